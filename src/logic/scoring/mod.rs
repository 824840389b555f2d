pub mod risk;
pub mod scorer;
pub mod season;
pub mod soil;
pub mod water;
pub mod yield_tier;

pub use scorer::VarietyScorer;

use crate::models::{FieldProfile, VarietyCandidate};

/// One additive criterion of the variety scoring rubric.
pub trait Criterion: Send + Sync {
    /// Unique identifier for this criterion
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Upper bound on the points this criterion can award
    fn max_points(&self) -> u8;

    /// Points awarded to `candidate` for this field, never above `max_points`
    fn score(&self, candidate: &VarietyCandidate, field: &FieldProfile) -> u8;
}
