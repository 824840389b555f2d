use super::Criterion;
use crate::models::{FieldProfile, RiskLevel, VarietyCandidate};

/// Lower-risk varieties score higher regardless of field conditions.
pub struct RiskLevelScore;

impl Criterion for RiskLevelScore {
    fn id(&self) -> &'static str {
        "risk_level"
    }

    fn name(&self) -> &'static str {
        "Risk Level"
    }

    fn max_points(&self) -> u8 {
        15
    }

    fn score(&self, candidate: &VarietyCandidate, _field: &FieldProfile) -> u8 {
        match candidate.risk_level {
            RiskLevel::Low => 15,
            RiskLevel::Medium => 10,
            RiskLevel::High => 5,
        }
    }
}
