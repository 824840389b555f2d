use crate::catalog::{self, SeedVariety, DEFAULT_SEED_VARIETY};
use crate::error::Result;
use crate::logic::units::{round_tenth, round_whole};
use crate::models::{FertilizerLine, PesticideLine, PriceTable, ResourcePlan, SeedLine};

/// Baseline application rates per hectare.
pub const UREA_KG_PER_HA: f64 = 75.0;
pub const TSP_KG_PER_HA: f64 = 50.0;
pub const MOP_KG_PER_HA: f64 = 40.0;
pub const PESTICIDE_L_PER_HA: f64 = 1.5;

const PESTICIDE_NAME: &str = "Weedicide";

/// Scales the fixed per-hectare input baseline to a field.
///
/// The baseline does not depend on which variety the scorer recommends; the
/// only variety input is the seed variety chosen for sowing rate.
#[derive(Debug, Clone)]
pub struct ResourcePlanner {
    prices: PriceTable,
    seed: &'static SeedVariety,
}

impl ResourcePlanner {
    pub fn new(prices: PriceTable) -> Result<Self> {
        prices.validate()?;
        Ok(Self {
            prices,
            seed: catalog::seed_variety(DEFAULT_SEED_VARIETY)?,
        })
    }

    pub fn with_seed_variety(mut self, name: &str) -> Result<Self> {
        self.seed = catalog::seed_variety(name)?;
        Ok(self)
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn seed_variety(&self) -> &'static SeedVariety {
        self.seed
    }

    pub fn plan(&self, hectares: f64) -> ResourcePlan {
        let seed_kg = scaled_kg(self.seed.rate_kg_per_ha, hectares);
        let seed = SeedLine {
            variety: self.seed.name.to_string(),
            quantity_kg: seed_kg,
            cost_lkr: seed_kg as f64 * self.prices.seed_per_kg,
        };

        let fertilizers: Vec<FertilizerLine> = [
            ("Urea", UREA_KG_PER_HA, self.prices.urea_per_kg),
            ("TSP", TSP_KG_PER_HA, self.prices.tsp_per_kg),
            ("MOP", MOP_KG_PER_HA, self.prices.mop_per_kg),
        ]
        .into_iter()
        .map(|(name, rate, price)| {
            let quantity_kg = scaled_kg(rate, hectares);
            FertilizerLine {
                name: name.to_string(),
                quantity_kg,
                cost_lkr: quantity_kg as f64 * price,
            }
        })
        .collect();

        let quantity_liters = round_tenth(PESTICIDE_L_PER_HA * hectares);
        let pesticide = PesticideLine {
            name: PESTICIDE_NAME.to_string(),
            quantity_liters,
            cost_lkr: quantity_liters * self.prices.pesticide_per_liter,
        };

        let total_cost_lkr = seed.cost_lkr
            + fertilizers.iter().map(|f| f.cost_lkr).sum::<f64>()
            + pesticide.cost_lkr;

        tracing::debug!(hectares, total_cost_lkr, "planned inputs");

        ResourcePlan {
            hectares,
            seed,
            fertilizers,
            pesticide,
            total_cost_lkr,
        }
    }
}

impl Default for ResourcePlanner {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            seed: &catalog::SEED_VARIETIES[0],
        }
    }
}

fn scaled_kg(rate_per_ha: f64, hectares: f64) -> u64 {
    round_whole(rate_per_ha * hectares).max(0.0) as u64
}
