use super::{AdvisoryComposer, FinancialProjector, ResourcePlanner, VarietyScorer};
use crate::catalog::{Catalog, CatalogStore};
use crate::error::Result;
use crate::models::{FieldProfile, Recommendation, ResourcePlan};
use std::sync::Arc;

/// Entry point tying the variety path and the input-planning path together.
///
/// Holds only read-only state; each call is independent of every other.
pub struct PlanningEngine {
    scorer: VarietyScorer,
    catalog: Arc<CatalogStore>,
    planner: ResourcePlanner,
}

impl PlanningEngine {
    pub fn new(catalog: Arc<CatalogStore>, planner: ResourcePlanner) -> Self {
        Self {
            scorer: VarietyScorer::new(),
            catalog,
            planner,
        }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(Arc::new(CatalogStore::new(catalog)), ResourcePlanner::default())
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.snapshot()
    }

    pub fn catalog_store(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    pub fn scorer(&self) -> &VarietyScorer {
        &self.scorer
    }

    pub fn planner(&self) -> &ResourcePlanner {
        &self.planner
    }

    /// Normalize, score, then project and compose advice for the top variety.
    pub fn recommend(&self, field: &FieldProfile) -> Result<Recommendation> {
        let catalog = self.catalog.snapshot();
        let hectares = field.hectares();
        let ranking = self.scorer.rank(catalog.varieties(), field)?;

        let financials = FinancialProjector::project(&ranking.primary.scored, hectares);
        let advisory = AdvisoryComposer::compose(field, &ranking.primary.scored);

        tracing::info!(
            district = %field.district,
            primary = %ranking.primary.name(),
            confidence = ranking.primary.confidence,
            "recommendation ready"
        );

        Ok(Recommendation {
            district: field.district.clone(),
            season: field.season,
            hectares,
            primary: ranking.primary,
            alternatives: ranking.alternatives,
            planting_window: field.season.planting_window().to_string(),
            financials,
            fertilizer_plan: advisory.fertilizer_plan,
            water_requirement: advisory.water_requirement,
            special_advice: advisory.special_advice,
        })
    }

    /// Scale the fixed input baseline to the field. Does not consult the scorer.
    pub fn plan_inputs(&self, field: &FieldProfile) -> ResourcePlan {
        self.planner.plan(field.hectares())
    }
}

impl Default for PlanningEngine {
    fn default() -> Self {
        Self::new(Arc::new(CatalogStore::default()), ResourcePlanner::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaddyPlanError;
    use crate::logic::scoring::test_support::{candidate, field};
    use crate::models::*;

    #[test]
    fn recommends_bg_358_for_irrigated_clay_loam() {
        let engine = PlanningEngine::default();
        let f = field(SoilType::ClayLoam, WaterAvailability::Good, Season::Yala);
        let rec = engine.recommend(&f).unwrap();

        assert_eq!(rec.primary.name(), "BG 358");
        assert_eq!(rec.primary.confidence, 100);
        assert_eq!(rec.alternatives.len(), 3);
        assert_eq!(rec.alternatives[0].name(), "BG 360");
        assert!(rec.alternatives.iter().all(|a| a.confidence <= 95));
        assert_eq!(rec.planting_window, "Apr 15 - May 5");
        assert_eq!(rec.district, "Gampaha");
        assert!((rec.hectares - 1.011715).abs() < 1e-9);
        assert!(rec.financials.estimated_profit > 0.0);
    }

    #[test]
    fn recommendation_is_idempotent() {
        let engine = PlanningEngine::default();
        let f = field(SoilType::Sandy, WaterAvailability::Poor, Season::Maha);
        assert_eq!(engine.recommend(&f).unwrap(), engine.recommend(&f).unwrap());
        assert_eq!(engine.plan_inputs(&f), engine.plan_inputs(&f));
    }

    #[test]
    fn rain_fed_sandy_field_prefers_drought_tolerant_variety() {
        let engine = PlanningEngine::default();
        let f = field(SoilType::Sandy, WaterAvailability::Poor, Season::Yala);
        let rec = engine.recommend(&f).unwrap();
        assert_eq!(rec.primary.name(), "BG 352");
        assert!(rec.special_advice.len() >= 3);
    }

    #[test]
    fn input_plan_ignores_recommended_variety() {
        let engine = PlanningEngine::default();
        let clay = field(SoilType::ClayLoam, WaterAvailability::Good, Season::Yala);
        let sandy = field(SoilType::Sandy, WaterAvailability::Poor, Season::Maha);
        assert_eq!(engine.plan_inputs(&clay), engine.plan_inputs(&sandy));
    }

    #[test]
    fn single_entry_catalog_has_no_alternatives() {
        let engine = PlanningEngine::with_catalog(Catalog::new(vec![candidate("Only")]));
        let f = field(SoilType::ClayLoam, WaterAvailability::Good, Season::Yala);
        let rec = engine.recommend(&f).unwrap();
        assert_eq!(rec.primary.name(), "Only");
        assert!(rec.alternatives.is_empty());
    }

    #[test]
    fn empty_catalog_fails_without_partial_result() {
        let engine = PlanningEngine::with_catalog(Catalog::new(vec![]));
        let f = field(SoilType::ClayLoam, WaterAvailability::Good, Season::Yala);
        assert!(matches!(
            engine.recommend(&f),
            Err(PaddyPlanError::EmptyCatalog)
        ));
    }

    #[test]
    fn loss_making_variety_reports_negative_profit() {
        let mut c = candidate("Loss Maker");
        c.yield_range = Range::new(1.0, 1.5);
        c.price_range = Range::new(30.0, 40.0);
        let engine = PlanningEngine::with_catalog(Catalog::new(vec![c]));
        let f = field(SoilType::ClayLoam, WaterAvailability::Good, Season::Yala);

        let rec = engine.recommend(&f).unwrap();
        assert!(rec.financials.total_cost > rec.financials.total_revenue);
        assert!(rec.financials.estimated_profit < 0.0);
        let expected = rec.financials.total_revenue - rec.financials.total_cost;
        assert_eq!(rec.financials.estimated_profit, expected);
    }

    #[test]
    fn catalog_replacement_applies_to_later_requests() {
        let engine = PlanningEngine::default();
        let f = field(SoilType::ClayLoam, WaterAvailability::Good, Season::Yala);
        let held = engine.catalog();

        engine
            .catalog_store()
            .replace(Catalog::new(vec![candidate("Replacement")]));

        assert_eq!(held.varieties()[0].name, "BG 358");
        assert_eq!(engine.recommend(&f).unwrap().primary.name(), "Replacement");
    }
}
