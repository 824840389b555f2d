use crate::error::{PaddyPlanError, Result};
use crate::models::{CostSheet, Scenario, ScenarioOutcome};

/// Per-acre profitability comparison across yield/price scenarios.
pub struct ScenarioSimulator;

impl ScenarioSimulator {
    pub fn simulate(scenario: &Scenario, costs: &CostSheet) -> Result<ScenarioOutcome> {
        let total_cost = costs.total();
        if !total_cost.is_finite() || total_cost <= 0.0 {
            return Err(PaddyPlanError::validation(
                "cost sheet must total more than zero to run a simulation",
            ));
        }
        if scenario.yield_kg_per_acre < 0.0 || scenario.price_lkr_per_kg < 0.0 {
            return Err(PaddyPlanError::validation(format!(
                "scenario '{}' has a negative yield or price",
                scenario.name
            )));
        }

        let revenue = scenario.yield_kg_per_acre * scenario.price_lkr_per_kg;
        let profit = revenue - total_cost;

        Ok(ScenarioOutcome {
            scenario: scenario.name.clone(),
            yield_kg: scenario.yield_kg_per_acre,
            total_cost,
            revenue,
            profit,
            profit_margin_pct: profit / total_cost * 100.0,
        })
    }

    /// Outcomes in the same order as `scenarios`.
    pub fn compare(scenarios: &[Scenario], costs: &CostSheet) -> Result<Vec<ScenarioOutcome>> {
        scenarios
            .iter()
            .map(|scenario| Self::simulate(scenario, costs))
            .collect()
    }

    pub fn find<'a>(scenarios: &'a [Scenario], name: &str) -> Result<&'a Scenario> {
        scenarios
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| PaddyPlanError::NotFound(format!("scenario '{}'", name)))
    }
}
