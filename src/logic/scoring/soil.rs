use super::Criterion;
use crate::models::{FieldProfile, VarietyCandidate};

/// Full credit when the field's soil is one the variety prefers, nothing otherwise.
pub struct SoilMatch;

impl Criterion for SoilMatch {
    fn id(&self) -> &'static str {
        "soil_match"
    }

    fn name(&self) -> &'static str {
        "Soil Match"
    }

    fn max_points(&self) -> u8 {
        30
    }

    fn score(&self, candidate: &VarietyCandidate, field: &FieldProfile) -> u8 {
        if candidate.prefers_soil(field.soil_type) {
            30
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scoring::test_support::{candidate, field};
    use crate::models::{Season, SoilType, WaterAvailability};

    #[test]
    fn binary_soil_credit() {
        let c = candidate("BG 358");
        let good = field(SoilType::ClayLoam, WaterAvailability::Good, Season::Yala);
        let bad = field(SoilType::Sandy, WaterAvailability::Good, Season::Yala);
        assert_eq!(SoilMatch.score(&c, &good), 30);
        assert_eq!(SoilMatch.score(&c, &bad), 0);
    }
}
