//! Paddy variety recommendation and input planning.
//!
//! Given a field description (soil, water, season, district, size), the
//! [`PlanningEngine`] ranks a catalog of rice varieties, projects revenue and
//! cost for the top pick, and scales a fixed seed/fertilizer/pesticide
//! baseline to the field.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use catalog::{Catalog, CatalogStore};
pub use config::Config;
pub use error::{PaddyPlanError, Result};
pub use logic::{
    AdvisoryComposer, FinancialProjector, PlanningEngine, ResourcePlanner, ScenarioSimulator,
    UnitNormalizer, VarietyScorer,
};
