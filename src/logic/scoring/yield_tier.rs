use super::Criterion;
use crate::models::{FieldProfile, VarietyCandidate};

/// Tiers on the conservative (lower-bound) yield in t/ha.
///
/// - 5.0 and above → 10
/// - above 4.0 → 7
/// - otherwise → 5
pub struct YieldTier;

impl YieldTier {
    pub fn points(min_yield_tons_per_ha: f64) -> u8 {
        if min_yield_tons_per_ha >= 5.0 {
            10
        } else if min_yield_tons_per_ha > 4.0 {
            7
        } else {
            5
        }
    }
}

impl Criterion for YieldTier {
    fn id(&self) -> &'static str {
        "yield_tier"
    }

    fn name(&self) -> &'static str {
        "Yield Potential"
    }

    fn max_points(&self) -> u8 {
        10
    }

    fn score(&self, candidate: &VarietyCandidate, _field: &FieldProfile) -> u8 {
        Self::points(candidate.yield_range.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(YieldTier::points(5.2), 10);
        assert_eq!(YieldTier::points(5.0), 10);
        assert_eq!(YieldTier::points(4.9), 7);
        assert_eq!(YieldTier::points(4.5), 7);
        assert_eq!(YieldTier::points(4.0), 5);
        assert_eq!(YieldTier::points(3.2), 5);
    }
}
