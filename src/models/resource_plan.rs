use crate::error::{PaddyPlanError, Result};
use serde::{Deserialize, Serialize};

/// Per-unit input prices in LKR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub seed_per_kg: f64,
    pub urea_per_kg: f64,
    pub tsp_per_kg: f64,
    pub mop_per_kg: f64,
    pub pesticide_per_liter: f64,
}

impl PriceTable {
    pub fn validate(&self) -> Result<()> {
        let prices = [
            ("seed", self.seed_per_kg),
            ("urea", self.urea_per_kg),
            ("tsp", self.tsp_per_kg),
            ("mop", self.mop_per_kg),
            ("pesticide", self.pesticide_per_liter),
        ];
        for (name, price) in prices {
            if !price.is_finite() || price <= 0.0 {
                return Err(PaddyPlanError::validation(format!(
                    "{} price must be a positive number, got {}",
                    name, price
                )));
            }
        }
        Ok(())
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            seed_per_kg: 100.0,
            urea_per_kg: 100.0,
            tsp_per_kg: 100.0,
            mop_per_kg: 100.0,
            pesticide_per_liter: 2000.0,
        }
    }
}

/// Partial price overrides, e.g. from a config file or a market price feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceOverrides {
    pub seed_per_kg: Option<f64>,
    pub urea_per_kg: Option<f64>,
    pub tsp_per_kg: Option<f64>,
    pub mop_per_kg: Option<f64>,
    pub pesticide_per_liter: Option<f64>,
}

impl PriceOverrides {
    pub fn apply(&self, base: PriceTable) -> PriceTable {
        PriceTable {
            seed_per_kg: self.seed_per_kg.unwrap_or(base.seed_per_kg),
            urea_per_kg: self.urea_per_kg.unwrap_or(base.urea_per_kg),
            tsp_per_kg: self.tsp_per_kg.unwrap_or(base.tsp_per_kg),
            mop_per_kg: self.mop_per_kg.unwrap_or(base.mop_per_kg),
            pesticide_per_liter: self
                .pesticide_per_liter
                .unwrap_or(base.pesticide_per_liter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedLine {
    pub variety: String,
    pub quantity_kg: u64,
    pub cost_lkr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerLine {
    pub name: String,
    pub quantity_kg: u64,
    pub cost_lkr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PesticideLine {
    pub name: String,
    /// Rounded to one decimal place.
    pub quantity_liters: f64,
    pub cost_lkr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub hectares: f64,
    pub seed: SeedLine,
    pub fertilizers: Vec<FertilizerLine>,
    pub pesticide: PesticideLine,
    pub total_cost_lkr: f64,
}

impl ResourcePlan {
    pub fn fertilizer(&self, name: &str) -> Option<&FertilizerLine> {
        self.fertilizers
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prices_are_valid() {
        assert!(PriceTable::default().validate().is_ok());
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let prices = PriceTable {
            urea_per_kg: 0.0,
            ..PriceTable::default()
        };
        assert!(prices.validate().unwrap_err().is_validation());

        let prices = PriceTable {
            pesticide_per_liter: f64::NAN,
            ..PriceTable::default()
        };
        assert!(prices.validate().is_err());
    }

    #[test]
    fn overrides_replace_only_given_prices() {
        let overrides = PriceOverrides {
            urea_per_kg: Some(120.0),
            tsp_per_kg: Some(150.0),
            ..PriceOverrides::default()
        };
        let prices = overrides.apply(PriceTable::default());
        assert_eq!(prices.urea_per_kg, 120.0);
        assert_eq!(prices.tsp_per_kg, 150.0);
        assert_eq!(prices.mop_per_kg, 100.0);
        assert_eq!(prices.pesticide_per_liter, 2000.0);
    }
}
