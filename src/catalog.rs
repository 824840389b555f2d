//! Read-only reference data: the variety catalog scored for every request and
//! the seed-rate table used by the input planner.
//!
//! A catalog is never mutated after construction. [`CatalogStore`] swaps whole
//! catalogs and hands out `Arc` snapshots, so a scoring pass that already holds
//! a snapshot is unaffected by a reload.

use crate::error::{PaddyPlanError, Result};
use crate::models::{
    DurationRange, Range, RiskLevel, SeasonFit, SoilType, VarietyCandidate, WaterLevel,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

struct VarietyRow {
    name: &'static str,
    soils: &'static [SoilType],
    water: WaterLevel,
    season: SeasonFit,
    days: (u32, u32),
    yield_t_ha: (f64, f64),
    price_lkr_kg: (f64, f64),
    resistance: &'static [&'static str],
    risk: RiskLevel,
    description: &'static str,
}

const BUILTIN_VARIETIES: &[VarietyRow] = &[
    VarietyRow {
        name: "BG 358",
        soils: &[SoilType::ClayLoam, SoilType::Alluvial],
        water: WaterLevel::High,
        season: SeasonFit::Both,
        days: (105, 110),
        yield_t_ha: (5.2, 5.8),
        price_lkr_kg: (95.0, 110.0),
        resistance: &["Blast", "Brown Planthopper"],
        risk: RiskLevel::Low,
        description: "High-yielding 3.5 month variety, best on clay loam with reliable irrigation",
    },
    VarietyRow {
        name: "BG 360",
        soils: &[SoilType::ClayLoam, SoilType::Alluvial, SoilType::Black],
        water: WaterLevel::High,
        season: SeasonFit::Both,
        days: (105, 110),
        yield_t_ha: (5.0, 5.5),
        price_lkr_kg: (100.0, 115.0),
        resistance: &["Bacterial Leaf Blight"],
        risk: RiskLevel::Low,
        description: "Keeri samba grain type with strong market demand",
    },
    VarietyRow {
        name: "AT 362",
        soils: &[SoilType::Red, SoilType::ClayLoam, SoilType::Laterite],
        water: WaterLevel::Medium,
        season: SeasonFit::Both,
        days: (105, 110),
        yield_t_ha: (4.8, 5.3),
        price_lkr_kg: (95.0, 105.0),
        resistance: &["Blast", "Gall Midge"],
        risk: RiskLevel::Medium,
        description: "Red pericarp variety tolerant of moderate water stress",
    },
    VarietyRow {
        name: "BG 366",
        soils: &[SoilType::Alluvial, SoilType::ClayLoam],
        water: WaterLevel::High,
        season: SeasonFit::Maha,
        days: (105, 110),
        yield_t_ha: (5.5, 6.0),
        price_lkr_kg: (95.0, 105.0),
        resistance: &["Brown Planthopper"],
        risk: RiskLevel::Medium,
        description: "Top-yielding Maha variety for well-irrigated alluvial fields",
    },
    VarietyRow {
        name: "BG 352",
        soils: &[SoilType::Red, SoilType::Sandy, SoilType::Laterite],
        water: WaterLevel::Low,
        season: SeasonFit::Both,
        days: (100, 105),
        yield_t_ha: (4.2, 4.8),
        price_lkr_kg: (90.0, 100.0),
        resistance: &["Drought"],
        risk: RiskLevel::Medium,
        description: "Drought tolerant, suited to rain-fed and minor-tank fields",
    },
    VarietyRow {
        name: "BG 300",
        soils: &[SoilType::Red, SoilType::Sandy, SoilType::Alluvial],
        water: WaterLevel::Medium,
        season: SeasonFit::Yala,
        days: (85, 90),
        yield_t_ha: (4.0, 4.5),
        price_lkr_kg: (90.0, 100.0),
        resistance: &["Brown Planthopper"],
        risk: RiskLevel::Low,
        description: "Three month variety that escapes end-of-Yala drought",
    },
    VarietyRow {
        name: "Ld 365",
        soils: &[SoilType::Peaty, SoilType::Saline, SoilType::Alluvial],
        water: WaterLevel::Medium,
        season: SeasonFit::Both,
        days: (100, 105),
        yield_t_ha: (4.5, 5.0),
        price_lkr_kg: (90.0, 100.0),
        resistance: &["Iron Toxicity", "Salinity"],
        risk: RiskLevel::Medium,
        description: "Low country wet zone variety for problem soils",
    },
    VarietyRow {
        name: "At 307",
        soils: &[SoilType::Red, SoilType::Laterite, SoilType::Black],
        water: WaterLevel::Medium,
        season: SeasonFit::Maha,
        days: (105, 110),
        yield_t_ha: (4.6, 5.1),
        price_lkr_kg: (100.0, 110.0),
        resistance: &["Blast"],
        risk: RiskLevel::Medium,
        description: "Long grain red rice for intermediate zone Maha cultivation",
    },
    VarietyRow {
        name: "At 354",
        soils: &[SoilType::Saline, SoilType::Peaty],
        water: WaterLevel::Low,
        season: SeasonFit::Both,
        days: (105, 110),
        yield_t_ha: (3.8, 4.5),
        price_lkr_kg: (85.0, 95.0),
        resistance: &["Salinity"],
        risk: RiskLevel::High,
        description: "Salinity tolerant variety for coastal fields",
    },
    VarietyRow {
        name: "Suwandel",
        soils: &[SoilType::Red, SoilType::Sandy, SoilType::Peaty, SoilType::Laterite],
        water: WaterLevel::Low,
        season: SeasonFit::Both,
        days: (120, 135),
        yield_t_ha: (2.5, 3.2),
        price_lkr_kg: (180.0, 220.0),
        resistance: &[],
        risk: RiskLevel::High,
        description: "Traditional heirloom variety sold at a premium, low input needs",
    },
];

impl VarietyRow {
    fn to_candidate(&self) -> VarietyCandidate {
        VarietyCandidate {
            name: self.name.to_string(),
            soil_preference: self.soils.to_vec(),
            water_need: self.water,
            season: self.season,
            duration: DurationRange::new(self.days.0, self.days.1),
            yield_range: Range::new(self.yield_t_ha.0, self.yield_t_ha.1),
            price_range: Range::new(self.price_lkr_kg.0, self.price_lkr_kg.1),
            disease_resistance: self.resistance.iter().map(|s| s.to_string()).collect(),
            risk_level: self.risk,
            description: self.description.to_string(),
        }
    }
}

/// Ordered list of variety candidates. Order is significant: it breaks score ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    varieties: Vec<VarietyCandidate>,
}

impl Catalog {
    pub fn new(varieties: Vec<VarietyCandidate>) -> Self {
        Self { varieties }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_VARIETIES.iter().map(VarietyRow::to_candidate).collect())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        if catalog.is_empty() {
            tracing::warn!("Loaded variety catalog has no entries");
        }
        Ok(catalog)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaddyPlanError::Config(format!(
                "Failed to read catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!(
            "Loaded {} varieties from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Check every entry. An empty catalog is valid here; ranking reports it.
    pub fn validate(&self) -> Result<()> {
        self.varieties.iter().try_for_each(VarietyCandidate::validate)
    }

    pub fn varieties(&self) -> &[VarietyCandidate] {
        &self.varieties
    }

    pub fn len(&self) -> usize {
        self.varieties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.varieties.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&VarietyCandidate> {
        self.varieties
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Shared handle to the active catalog.
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The catalog as of now. Later replacements do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Catalog> {
        // The guarded value is a single Arc, so a poisoned lock still holds a whole catalog.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    pub fn replace(&self, catalog: Catalog) {
        let count = catalog.len();
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(catalog);
        tracing::info!("Variety catalog replaced ({} entries)", count);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Certified seed variety offered in the input planner, with its sowing rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeedVariety {
    pub name: &'static str,
    pub description: &'static str,
    pub rate_kg_per_ha: f64,
}

pub const DEFAULT_SEED_VARIETY: &str = "BG 358";

pub const SEED_VARIETIES: &[SeedVariety] = &[
    SeedVariety {
        name: "BG 358",
        description: "High yield, disease resistant",
        rate_kg_per_ha: 150.0,
    },
    SeedVariety {
        name: "BG 352",
        description: "Drought tolerant",
        rate_kg_per_ha: 140.0,
    },
    SeedVariety {
        name: "BG 367",
        description: "Short duration (3 months)",
        rate_kg_per_ha: 145.0,
    },
    SeedVariety {
        name: "At 362",
        description: "Traditional, high quality",
        rate_kg_per_ha: 155.0,
    },
    SeedVariety {
        name: "Ld 365",
        description: "Suitable for low country",
        rate_kg_per_ha: 135.0,
    },
];

pub fn seed_variety(name: &str) -> Result<&'static SeedVariety> {
    SEED_VARIETIES
        .iter()
        .find(|v| v.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| PaddyPlanError::NotFound(format!("seed variety '{}'", name)))
}
