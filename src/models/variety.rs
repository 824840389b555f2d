use super::{Season, SoilType, WaterLevel};
use crate::error::{PaddyPlanError, Result};
use serde::{Deserialize, Serialize};

/// Seasons a variety can be grown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonFit {
    Yala,
    Maha,
    Both,
}

impl SeasonFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonFit::Yala => "Yala",
            SeasonFit::Maha => "Maha",
            SeasonFit::Both => "Both",
        }
    }

    pub fn suits(&self, season: Season) -> bool {
        match self {
            SeasonFit::Both => true,
            SeasonFit::Yala => season == Season::Yala,
            SeasonFit::Maha => season == Season::Maha,
        }
    }
}

impl std::fmt::Display for SeasonFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive numeric range; `min` is the conservative figure used in projections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Growing duration in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min_days: u32,
    pub max_days: u32,
}

impl DurationRange {
    pub const fn new(min_days: u32, max_days: u32) -> Self {
        Self { min_days, max_days }
    }
}

impl std::fmt::Display for DurationRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min_days == self.max_days {
            write!(f, "{} days", self.min_days)
        } else {
            write!(f, "{}-{} days", self.min_days, self.max_days)
        }
    }
}

/// A catalog entry describing one paddy variety's agronomic profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarietyCandidate {
    pub name: String,
    pub soil_preference: Vec<SoilType>,
    pub water_need: WaterLevel,
    pub season: SeasonFit,
    pub duration: DurationRange,
    /// Tons per hectare.
    pub yield_range: Range,
    /// LKR per kg.
    pub price_range: Range,
    #[serde(default)]
    pub disease_resistance: Vec<String>,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub description: String,
}

impl VarietyCandidate {
    /// Reject entries the scorer and projector cannot use. Yield and price
    /// bounds must be finite, positive and ordered.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| {
            Err(PaddyPlanError::validation(format!(
                "variety '{}': {}",
                self.name, msg
            )))
        };

        if self.name.trim().is_empty() {
            return invalid("name is required".into());
        }
        if self.soil_preference.is_empty() {
            return invalid("soil_preference must list at least one soil".into());
        }
        if self.duration.min_days > self.duration.max_days {
            return invalid(format!("duration {} is inverted", self.duration));
        }
        for (label, range) in [("yield_range", self.yield_range), ("price_range", self.price_range)] {
            if !range.min.is_finite() || !range.max.is_finite() {
                return invalid(format!("{} must be finite", label));
            }
            if range.min <= 0.0 {
                return invalid(format!("{} must be positive, got {}", label, range.min));
            }
            if range.min > range.max {
                return invalid(format!(
                    "{} min {} exceeds max {}",
                    label, range.min, range.max
                ));
            }
        }
        Ok(())
    }

    pub fn prefers_soil(&self, soil: SoilType) -> bool {
        self.soil_preference.contains(&soil)
    }

    pub fn yield_label(&self) -> String {
        format!("{:.1}-{:.1} t/ha", self.yield_range.min, self.yield_range.max)
    }

    pub fn price_label(&self) -> String {
        format!(
            "LKR {:.0}-{:.0}/kg",
            self.price_range.min, self.price_range.max
        )
    }

    pub fn resistance_label(&self) -> String {
        if self.disease_resistance.is_empty() {
            "None listed".to_string()
        } else {
            self.disease_resistance.join(", ")
        }
    }
}
