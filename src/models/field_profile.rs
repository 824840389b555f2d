use crate::error::{PaddyPlanError, Result};
use crate::logic::units::UnitNormalizer;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    #[serde(alias = "Red Soil")]
    Red,
    #[serde(alias = "Clay Loam")]
    ClayLoam,
    #[serde(alias = "Sandy Soil")]
    Sandy,
    #[serde(alias = "Alluvial Soil")]
    Alluvial,
    #[serde(alias = "Laterite Soil")]
    Laterite,
    #[serde(alias = "Peaty Soil")]
    Peaty,
    #[serde(alias = "Saline Soil")]
    Saline,
    #[serde(alias = "Black Soil")]
    Black,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Red => "Red Soil",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::Sandy => "Sandy Soil",
            SoilType::Alluvial => "Alluvial Soil",
            SoilType::Laterite => "Laterite Soil",
            SoilType::Peaty => "Peaty Soil",
            SoilType::Saline => "Saline Soil",
            SoilType::Black => "Black Soil",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        let name = normalized.strip_suffix(" soil").unwrap_or(&normalized);
        match name {
            "red" => Some(SoilType::Red),
            "clayloam" | "clay loam" => Some(SoilType::ClayLoam),
            "sandy" => Some(SoilType::Sandy),
            "alluvial" => Some(SoilType::Alluvial),
            "laterite" => Some(SoilType::Laterite),
            "peaty" => Some(SoilType::Peaty),
            "saline" => Some(SoilType::Saline),
            "black" => Some(SoilType::Black),
            _ => None,
        }
    }

    pub fn all() -> &'static [SoilType] {
        &[
            SoilType::Red,
            SoilType::ClayLoam,
            SoilType::Sandy,
            SoilType::Alluvial,
            SoilType::Laterite,
            SoilType::Peaty,
            SoilType::Saline,
            SoilType::Black,
        ]
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Water tier a variety needs, and the tier a field's availability maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterLevel {
    Low,
    Medium,
    High,
}

impl WaterLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterLevel::Low => "Low",
            WaterLevel::Medium => "Medium",
            WaterLevel::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(WaterLevel::Low),
            "medium" | "moderate" => Some(WaterLevel::Medium),
            "high" => Some(WaterLevel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for WaterLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordinal water availability tiers offered to the farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WaterAvailability {
    #[serde(alias = "Poor (Rain-fed Only)")]
    Poor,
    #[serde(alias = "Moderate (Seasonal Irrigation)")]
    Moderate,
    #[serde(alias = "Good (Reliable Irrigation)")]
    Good,
    #[serde(alias = "Excellent (Irrigation + Rainfall)")]
    Excellent,
}

impl WaterAvailability {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterAvailability::Excellent => "Excellent (Irrigation + Rainfall)",
            WaterAvailability::Good => "Good (Reliable Irrigation)",
            WaterAvailability::Moderate => "Moderate (Seasonal Irrigation)",
            WaterAvailability::Poor => "Poor (Rain-fed Only)",
        }
    }

    /// Short tier name without the parenthesised description.
    pub fn short_name(&self) -> &'static str {
        match self {
            WaterAvailability::Excellent => "Excellent",
            WaterAvailability::Good => "Good",
            WaterAvailability::Moderate => "Moderate",
            WaterAvailability::Poor => "Poor",
        }
    }

    /// Accepts either the short tier name or the full label.
    pub fn from_str(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        let tier = lowered.split('(').next().unwrap_or("").trim();
        match tier {
            "excellent" => Some(WaterAvailability::Excellent),
            "good" => Some(WaterAvailability::Good),
            "moderate" => Some(WaterAvailability::Moderate),
            "poor" => Some(WaterAvailability::Poor),
            _ => None,
        }
    }

    /// Fixed lookup onto the tier a variety's water need is compared with.
    pub fn water_level(&self) -> WaterLevel {
        match self {
            WaterAvailability::Excellent => WaterLevel::High,
            WaterAvailability::Good => WaterLevel::High,
            WaterAvailability::Moderate => WaterLevel::Medium,
            WaterAvailability::Poor => WaterLevel::Low,
        }
    }

    pub fn all() -> &'static [WaterAvailability] {
        &[
            WaterAvailability::Excellent,
            WaterAvailability::Good,
            WaterAvailability::Moderate,
            WaterAvailability::Poor,
        ]
    }
}

impl std::fmt::Display for WaterAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Yala,
    Maha,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Yala => "Yala",
            Season::Maha => "Maha",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yala" => Some(Season::Yala),
            "maha" => Some(Season::Maha),
            _ => None,
        }
    }

    /// Yala runs May through September; the rest of the year is Maha.
    pub fn for_date(date: NaiveDate) -> Self {
        if (5..=9).contains(&date.month()) {
            Season::Yala
        } else {
            Season::Maha
        }
    }

    pub fn planting_window(&self) -> &'static str {
        match self {
            Season::Yala => "Apr 15 - May 5",
            Season::Maha => "Oct 15 - Nov 5",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    Acres,
    Hectares,
}

impl AreaUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::Acres => "Acres",
            AreaUnit::Hectares => "Hectares",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "acres" | "acre" | "ac" => Some(AreaUnit::Acres),
            "hectares" | "hectare" | "ha" => Some(AreaUnit::Hectares),
            _ => None,
        }
    }

    /// The other supported unit, as the unit toggle flips it.
    pub fn toggled(&self) -> Self {
        match self {
            AreaUnit::Acres => AreaUnit::Hectares,
            AreaUnit::Hectares => AreaUnit::Acres,
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated, finite, strictly positive field size in its entered unit.
///
/// Deserialization goes through [`FieldSize::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldSize")]
pub struct FieldSize {
    value: f64,
    unit: AreaUnit,
}

#[derive(Deserialize)]
struct RawFieldSize {
    value: f64,
    unit: AreaUnit,
}

impl TryFrom<RawFieldSize> for FieldSize {
    type Error = PaddyPlanError;

    fn try_from(raw: RawFieldSize) -> Result<Self> {
        Self::new(raw.value, raw.unit)
    }
}

impl FieldSize {
    pub fn new(value: f64, unit: AreaUnit) -> Result<Self> {
        if !value.is_finite() {
            return Err(PaddyPlanError::validation(format!(
                "field size must be a finite number, got {}",
                value
            )));
        }
        if value <= 0.0 {
            return Err(PaddyPlanError::validation(format!(
                "field size must be greater than zero, got {}",
                value
            )));
        }
        Ok(Self { value, unit })
    }

    pub fn parse(raw: &str, unit: AreaUnit) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PaddyPlanError::validation("field size is required"));
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            PaddyPlanError::validation(format!("field size '{}' is not a number", trimmed))
        })?;
        Self::new(value, unit)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> AreaUnit {
        self.unit
    }

    pub fn hectares(&self) -> f64 {
        UnitNormalizer::to_hectares(self.value, self.unit)
    }

    /// Same area re-expressed in the other unit.
    pub fn toggled(&self) -> Self {
        let unit = self.unit.toggled();
        Self {
            value: UnitNormalizer::from_hectares(self.hectares(), unit),
            unit,
        }
    }
}

/// Validated farmer input for a single recommendation or planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProfile {
    pub district: String,
    pub soil_type: SoilType,
    pub water_availability: WaterAvailability,
    pub season: Season,
    pub field_size: FieldSize,
}

impl FieldProfile {
    pub fn new(
        district: impl Into<String>,
        soil_type: SoilType,
        water_availability: WaterAvailability,
        season: Season,
        field_size: FieldSize,
    ) -> Self {
        Self {
            district: district.into(),
            soil_type,
            water_availability,
            season,
            field_size,
        }
    }

    pub fn hectares(&self) -> f64 {
        self.field_size.hectares()
    }
}

/// Raw, unvalidated field input as it arrives from a form or config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldProfileInput {
    #[serde(default)]
    pub district: String,
    pub soil_type: String,
    pub water_availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub field_size: String,
    pub unit: String,
}

impl FieldProfileInput {
    /// Validate every field before anything is scored.
    ///
    /// `default_season` fills in a missing season; an unknown season label is
    /// still rejected.
    pub fn validate(&self, default_season: Season) -> Result<FieldProfile> {
        let soil_type = SoilType::from_str(&self.soil_type).ok_or_else(|| {
            PaddyPlanError::validation(format!("unknown soil type '{}'", self.soil_type))
        })?;

        let water_availability = WaterAvailability::from_str(&self.water_availability)
            .ok_or_else(|| {
                PaddyPlanError::validation(format!(
                    "unknown water availability '{}'",
                    self.water_availability
                ))
            })?;

        let season = match self.season.as_deref() {
            Some(s) if !s.trim().is_empty() => Season::from_str(s).ok_or_else(|| {
                PaddyPlanError::validation(format!("unknown season '{}'", s))
            })?,
            _ => default_season,
        };

        let unit = AreaUnit::from_str(&self.unit).ok_or_else(|| {
            PaddyPlanError::validation(format!("unsupported unit '{}'", self.unit))
        })?;

        let field_size = FieldSize::parse(&self.field_size, unit)?;

        Ok(FieldProfile::new(
            self.district.trim(),
            soil_type,
            water_availability,
            season,
            field_size,
        ))
    }
}
