use crate::catalog::{Catalog, CatalogStore, DEFAULT_SEED_VARIETY};
use crate::error::{PaddyPlanError, Result};
use crate::logic::{PlanningEngine, ResourcePlanner};
use crate::models::{
    AreaUnit, FieldProfile, FieldProfileInput, PriceOverrides, PriceTable, Season, SoilType,
    WaterAvailability,
};
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub field: FieldProfileInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_variety: Option<String>,
    #[serde(default)]
    pub prices: PriceOverrides,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(PaddyPlanError::Config(format!(
                "Config file not found at {:?}. Run `paddyplan init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| PaddyPlanError::Config(format!("Failed to read config: {}", e)))?;

        tracing::debug!("Loading config from {}", config_path.display());
        Self::from_yaml_str(&config_str)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);
        serde_yaml::from_str(&content)
            .map_err(|e| PaddyPlanError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("paddyplan").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/paddyplan/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PaddyPlanError::Config("Cannot determine config directory".into()))?
            .join("paddyplan");
        Ok(config_dir.join("config.yaml"))
    }

    /// Validate the field section. A missing season is taken from `today`.
    pub fn field_profile(&self, today: NaiveDate) -> Result<FieldProfile> {
        self.field.validate(Season::for_date(today))
    }

    pub fn price_table(&self) -> Result<PriceTable> {
        let prices = self.prices.apply(PriceTable::default());
        prices.validate()?;
        Ok(prices)
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_yaml_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn planner(&self) -> Result<ResourcePlanner> {
        let planner = ResourcePlanner::new(self.price_table()?)?;
        match self.seed_variety.as_deref() {
            Some(name) => planner.with_seed_variety(name),
            None => Ok(planner),
        }
    }

    pub fn engine(&self) -> Result<PlanningEngine> {
        let store = CatalogStore::new(self.catalog()?);
        Ok(PlanningEngine::new(Arc::new(store), self.planner()?))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive(target: Option<&Path>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's describe your field.");
        println!();

        let district: String = Input::new()
            .with_prompt("  District")
            .default("Gampaha".into())
            .interact_text()
            .map_err(|e| PaddyPlanError::Config(format!("Input error: {}", e)))?;

        let soil_labels: Vec<&str> = SoilType::all().iter().map(|s| s.as_str()).collect();
        let soil_idx = Select::new()
            .with_prompt("  Soil type")
            .items(&soil_labels)
            .default(1)
            .interact()
            .map_err(|e| PaddyPlanError::Config(format!("Input error: {}", e)))?;

        let water_labels: Vec<&str> = WaterAvailability::all()
            .iter()
            .map(|w| w.as_str())
            .collect();
        let water_idx = Select::new()
            .with_prompt("  Water availability")
            .items(&water_labels)
            .default(1)
            .interact()
            .map_err(|e| PaddyPlanError::Config(format!("Input error: {}", e)))?;

        let seasons = ["Yala", "Maha"];
        let season_idx = Select::new()
            .with_prompt("  Season")
            .items(&seasons)
            .default(0)
            .interact()
            .map_err(|e| PaddyPlanError::Config(format!("Input error: {}", e)))?;

        let field_size: String = Input::new()
            .with_prompt("  Field size")
            .default("1.0".into())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                match input.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() && v > 0.0 => Ok(()),
                    _ => Err("Enter a positive number".into()),
                }
            })
            .interact_text()
            .map_err(|e| PaddyPlanError::Config(format!("Input error: {}", e)))?;

        let units = [AreaUnit::Acres.as_str(), AreaUnit::Hectares.as_str()];
        let unit_idx = Select::new()
            .with_prompt("  Unit")
            .items(&units)
            .default(0)
            .interact()
            .map_err(|e| PaddyPlanError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            field: FieldProfileInput {
                district,
                soil_type: soil_labels[soil_idx].to_string(),
                water_availability: water_labels[water_idx].to_string(),
                season: Some(seasons[season_idx].to_string()),
                field_size,
                unit: units[unit_idx].to_string(),
            },
            seed_variety: Some(DEFAULT_SEED_VARIETY.to_string()),
            prices: PriceOverrides::default(),
            catalog_path: None,
        };

        // Fail before writing anything the engine would reject
        config.field.validate(Season::Yala)?;

        let config_path = match target {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| PaddyPlanError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# PaddyPlan Configuration\n# Generated by `paddyplan init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldProfileInput {
                district: "Gampaha".into(),
                soil_type: "Clay Loam".into(),
                water_availability: "Good (Reliable Irrigation)".into(),
                season: Some("Yala".into()),
                field_size: "2.5".into(),
                unit: "Acres".into(),
            },
            seed_variety: None,
            prices: PriceOverrides::default(),
            catalog_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        let profile = config.field_profile(today()).unwrap();
        assert_eq!(profile.soil_type, SoilType::ClayLoam);
        assert_eq!(config.price_table().unwrap(), PriceTable::default());
        assert!(config.engine().is_ok());
    }

    #[test]
    fn parses_minimal_yaml() {
        let yaml = r#"
field:
  district: Kurunegala
  soil_type: Red Soil
  water_availability: Moderate
  field_size: "1.5"
  unit: Hectares
"#;
        let config = Config::from_yaml_str(yaml).unwrap();
        assert!(config.seed_variety.is_none());
        assert!(config.catalog_path.is_none());

        // October falls in Maha
        let profile = config.field_profile(today()).unwrap();
        assert_eq!(profile.season, Season::Maha);
        assert_eq!(profile.soil_type, SoilType::Red);
        assert!((profile.hectares() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn price_overrides_and_seed_variety_reach_planner() {
        let yaml = r#"
field:
  soil_type: Clay Loam
  water_availability: Good
  season: Yala
  field_size: "1"
  unit: Hectares
seed_variety: Ld 365
prices:
  urea_per_kg: 120
"#;
        let config = Config::from_yaml_str(yaml).unwrap();
        let planner = config.planner().unwrap();
        assert_eq!(planner.seed_variety().name, "Ld 365");
        assert_eq!(planner.prices().urea_per_kg, 120.0);
        assert_eq!(planner.prices().tsp_per_kg, 100.0);

        let plan = planner.plan(1.0);
        assert_eq!(plan.seed.quantity_kg, 135);
    }

    #[test]
    fn invalid_price_override_is_rejected() {
        let mut config = Config::default();
        config.prices.mop_per_kg = Some(0.0);
        assert!(config.price_table().unwrap_err().is_validation());
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("PADDYPLAN_TEST_DISTRICT", "Polonnaruwa");
        let yaml = r#"
field:
  district: ${PADDYPLAN_TEST_DISTRICT}
  soil_type: Alluvial
  water_availability: Excellent
  field_size: "3"
  unit: Acres
"#;
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.field.district, "Polonnaruwa");
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = Config::from_yaml_str("field: [").unwrap_err();
        assert!(matches!(err, PaddyPlanError::Config(_)));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/paddyplan.yaml"))).unwrap_err();
        assert!(matches!(err, PaddyPlanError::Config(_)));
    }
}
