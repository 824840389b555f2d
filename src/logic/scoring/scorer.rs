use super::{
    risk::RiskLevelScore, season::SeasonMatch, soil::SoilMatch, water::WaterMatch,
    yield_tier::YieldTier, Criterion,
};
use crate::error::{PaddyPlanError, Result};
use crate::models::{FieldProfile, RankedVariety, ScoreComponent, ScoredVariety, VarietyCandidate};

/// Highest score any candidate can reach.
pub const MAX_SCORE: u8 = 100;

/// Alternatives reported after the primary variety.
pub const MAX_ALTERNATIVES: usize = 3;

/// Primary pick plus the next best candidates, in rank order.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub primary: RankedVariety,
    pub alternatives: Vec<RankedVariety>,
}

pub struct VarietyScorer {
    criteria: Vec<Box<dyn Criterion>>,
}

impl VarietyScorer {
    pub fn new() -> Self {
        let criteria: Vec<Box<dyn Criterion>> = vec![
            Box::new(SoilMatch),
            Box::new(WaterMatch),
            Box::new(SeasonMatch),
            Box::new(RiskLevelScore),
            Box::new(YieldTier),
        ];

        Self { criteria }
    }

    pub fn score_candidate(&self, candidate: &VarietyCandidate, field: &FieldProfile) -> ScoredVariety {
        let breakdown: Vec<ScoreComponent> = self
            .criteria
            .iter()
            .map(|c| ScoreComponent::new(c.name(), c.score(candidate, field), c.max_points()))
            .collect();

        let total: u32 = breakdown.iter().map(|c| u32::from(c.points)).sum();
        let score = total.min(u32::from(MAX_SCORE)) as u8;

        tracing::debug!(variety = %candidate.name, score, "scored variety");

        ScoredVariety {
            candidate: candidate.clone(),
            score,
            breakdown,
        }
    }

    /// Score every candidate, best first. Equal scores keep catalog order.
    pub fn score(&self, catalog: &[VarietyCandidate], field: &FieldProfile) -> Vec<ScoredVariety> {
        let mut scored: Vec<ScoredVariety> = catalog
            .iter()
            .map(|candidate| self.score_candidate(candidate, field))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    pub fn rank(&self, catalog: &[VarietyCandidate], field: &FieldProfile) -> Result<Ranking> {
        let mut scored = self.score(catalog, field).into_iter();
        let primary = scored.next().ok_or(PaddyPlanError::EmptyCatalog)?;
        let alternatives = scored
            .take(MAX_ALTERNATIVES)
            .map(RankedVariety::alternative)
            .collect();

        Ok(Ranking {
            primary: RankedVariety::primary(primary),
            alternatives,
        })
    }

    pub fn list_criteria(&self) -> Vec<(&'static str, &'static str, u8)> {
        self.criteria
            .iter()
            .map(|c| (c.id(), c.name(), c.max_points()))
            .collect()
    }
}

impl Default for VarietyScorer {
    fn default() -> Self {
        Self::new()
    }
}
