use super::Criterion;
use crate::models::{FieldProfile, VarietyCandidate, WaterLevel};

/// Compares the variety's water need with the field's mapped water level.
///
/// Exact match earns 25. Partial credit (15) is given for exactly three
/// (available, needed) pairs: (High, Medium), (Medium, Low) and
/// (Low, Medium). Every other pairing, including High/Low in either
/// direction and (Medium, High), earns 0.
pub struct WaterMatch;

impl WaterMatch {
    pub fn points(available: WaterLevel, needed: WaterLevel) -> u8 {
        use WaterLevel::*;
        match (available, needed) {
            (a, n) if a == n => 25,
            (High, Medium) | (Medium, Low) | (Low, Medium) => 15,
            _ => 0,
        }
    }
}

impl Criterion for WaterMatch {
    fn id(&self) -> &'static str {
        "water_match"
    }

    fn name(&self) -> &'static str {
        "Water Match"
    }

    fn max_points(&self) -> u8 {
        25
    }

    fn score(&self, candidate: &VarietyCandidate, field: &FieldProfile) -> u8 {
        Self::points(field.water_availability.water_level(), candidate.water_need)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WaterLevel::*;

    #[test]
    fn exact_matches() {
        assert_eq!(WaterMatch::points(High, High), 25);
        assert_eq!(WaterMatch::points(Medium, Medium), 25);
        assert_eq!(WaterMatch::points(Low, Low), 25);
    }

    #[test]
    fn near_pairs_are_asymmetric() {
        assert_eq!(WaterMatch::points(High, Medium), 15);
        assert_eq!(WaterMatch::points(Medium, Low), 15);
        assert_eq!(WaterMatch::points(Low, Medium), 15);
        // Mirror of (High, Medium) gets nothing
        assert_eq!(WaterMatch::points(Medium, High), 0);
    }

    #[test]
    fn high_and_low_never_match() {
        assert_eq!(WaterMatch::points(High, Low), 0);
        assert_eq!(WaterMatch::points(Low, High), 0);
    }
}
