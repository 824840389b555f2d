use super::{Season, VarietyCandidate};
use serde::{Deserialize, Serialize};

/// Confidence ceiling reported for the primary variety.
pub const PRIMARY_CONFIDENCE_CAP: u8 = 100;

/// Confidence ceiling reported for each alternative.
pub const ALTERNATIVE_CONFIDENCE_CAP: u8 = 95;

/// Points one rubric criterion awarded a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: String,
    pub points: u8,
    pub max_points: u8,
}

impl ScoreComponent {
    pub fn new(criterion: &str, points: u8, max_points: u8) -> Self {
        Self {
            criterion: criterion.to_string(),
            points: points.min(max_points),
            max_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVariety {
    pub candidate: VarietyCandidate,
    /// 0..=100
    pub score: u8,
    pub breakdown: Vec<ScoreComponent>,
}

impl ScoredVariety {
    pub fn confidence(&self, cap: u8) -> u8 {
        self.score.min(cap)
    }

    pub fn name(&self) -> &str {
        &self.candidate.name
    }
}

/// A scored variety with the confidence shown to the farmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVariety {
    #[serde(flatten)]
    pub scored: ScoredVariety,
    pub confidence: u8,
}

impl RankedVariety {
    pub fn primary(scored: ScoredVariety) -> Self {
        let confidence = scored.confidence(PRIMARY_CONFIDENCE_CAP);
        Self { scored, confidence }
    }

    pub fn alternative(scored: ScoredVariety) -> Self {
        let confidence = scored.confidence(ALTERNATIVE_CONFIDENCE_CAP);
        Self { scored, confidence }
    }

    pub fn candidate(&self) -> &VarietyCandidate {
        &self.scored.candidate
    }

    pub fn name(&self) -> &str {
        self.scored.name()
    }
}

/// Per-field cost lines in LKR.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub seed: f64,
    pub fertilizer: f64,
    pub pesticide: f64,
    pub labor: f64,
    pub other: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.seed + self.fertilizer + self.pesticide + self.labor + self.other
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            seed: self.seed * factor,
            fertilizer: self.fertilizer * factor,
            pesticide: self.pesticide * factor,
            labor: self.labor * factor,
            other: self.other * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    pub total_yield_tons: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub cost_breakdown: CostBreakdown,
    /// Negative when the field runs at a loss.
    pub estimated_profit: f64,
}

impl Financials {
    pub fn is_loss(&self) -> bool {
        self.estimated_profit < 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub fertilizer_plan: String,
    pub water_requirement: String,
    pub special_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub district: String,
    pub season: Season,
    pub hectares: f64,
    pub primary: RankedVariety,
    pub alternatives: Vec<RankedVariety>,
    pub planting_window: String,
    pub financials: Financials,
    pub fertilizer_plan: String,
    pub water_requirement: String,
    pub special_advice: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DurationRange, Range, RiskLevel, SeasonFit, SoilType, WaterLevel};

    fn scored(score: u8) -> ScoredVariety {
        ScoredVariety {
            candidate: VarietyCandidate {
                name: "BG 358".into(),
                soil_preference: vec![SoilType::ClayLoam],
                water_need: WaterLevel::High,
                season: SeasonFit::Both,
                duration: DurationRange::new(105, 110),
                yield_range: Range::new(5.2, 5.8),
                price_range: Range::new(95.0, 110.0),
                disease_resistance: vec![],
                risk_level: RiskLevel::Low,
                description: String::new(),
            },
            score,
            breakdown: vec![],
        }
    }

    #[test]
    fn confidence_caps_differ_for_primary_and_alternatives() {
        assert_eq!(RankedVariety::primary(scored(100)).confidence, 100);
        assert_eq!(RankedVariety::alternative(scored(100)).confidence, 95);
        assert_eq!(RankedVariety::alternative(scored(80)).confidence, 80);
    }

    #[test]
    fn score_component_clamps_to_max() {
        let c = ScoreComponent::new("Soil Match", 40, 30);
        assert_eq!(c.points, 30);
    }

    #[test]
    fn cost_breakdown_total_and_scaling() {
        let costs = CostBreakdown {
            seed: 8000.0,
            fertilizer: 25000.0,
            pesticide: 8000.0,
            labor: 30000.0,
            other: 10000.0,
        };
        assert_eq!(costs.total(), 81000.0);
        assert_eq!(costs.scaled(2.0).total(), 162000.0);
    }
}
