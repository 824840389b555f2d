use super::Criterion;
use crate::models::{FieldProfile, VarietyCandidate};

pub struct SeasonMatch;

impl Criterion for SeasonMatch {
    fn id(&self) -> &'static str {
        "season_match"
    }

    fn name(&self) -> &'static str {
        "Season Match"
    }

    fn max_points(&self) -> u8 {
        20
    }

    fn score(&self, candidate: &VarietyCandidate, field: &FieldProfile) -> u8 {
        if candidate.season.suits(field.season) {
            20
        } else {
            0
        }
    }
}
