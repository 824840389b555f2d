use serde::{Deserialize, Serialize};

/// A named yield/price assumption for comparing profitability per acre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub yield_kg_per_acre: f64,
    pub price_lkr_per_kg: f64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, yield_kg_per_acre: f64, price_lkr_per_kg: f64) -> Self {
        Self {
            name: name.into(),
            yield_kg_per_acre,
            price_lkr_per_kg,
        }
    }

    pub fn builtin() -> Vec<Scenario> {
        vec![
            Scenario::new("Traditional Paddy", 571.0, 120.0),
            Scenario::new("Organic Paddy", 450.0, 200.0),
            Scenario::new("High-Yield Variety", 700.0, 110.0),
        ]
    }
}

/// Cultivation costs per acre in LKR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSheet {
    pub seeds: f64,
    pub fertilizer: f64,
    pub water: f64,
    pub labor: f64,
    pub other: f64,
}

impl CostSheet {
    pub fn total(&self) -> f64 {
        self.seeds + self.fertilizer + self.water + self.labor + self.other
    }
}

impl Default for CostSheet {
    fn default() -> Self {
        Self {
            seeds: 5000.0,
            fertilizer: 3000.0,
            water: 1500.0,
            labor: 7000.0,
            other: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: String,
    pub yield_kg: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub profit: f64,
    /// Profit as a percentage of total cost.
    pub profit_margin_pct: f64,
}

impl ScenarioOutcome {
    /// Scale a per-acre outcome to a whole field. The margin is unchanged.
    pub fn scaled(&self, acres: f64) -> Self {
        Self {
            scenario: self.scenario.clone(),
            yield_kg: self.yield_kg * acres,
            total_cost: self.total_cost * acres,
            revenue: self.revenue * acres,
            profit: self.profit * acres,
            profit_margin_pct: self.profit_margin_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cost_sheet_total() {
        assert_eq!(CostSheet::default().total(), 17500.0);
    }

    #[test]
    fn builtin_scenarios() {
        let scenarios = Scenario::builtin();
        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].name, "Traditional Paddy");
        assert_eq!(scenarios[1].price_lkr_per_kg, 200.0);
    }
}
