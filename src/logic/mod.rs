pub mod advisory;
pub mod engine;
pub mod financials;
pub mod resources;
pub mod scenarios;
pub mod scoring;
pub mod units;

pub use advisory::AdvisoryComposer;
pub use engine::PlanningEngine;
pub use financials::FinancialProjector;
pub use resources::ResourcePlanner;
pub use scenarios::ScenarioSimulator;
pub use scoring::VarietyScorer;
pub use units::UnitNormalizer;
