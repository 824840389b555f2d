use crate::models::AreaUnit;

/// Hectares in one acre.
pub const HECTARES_PER_ACRE: f64 = 0.404686;

/// Converts field sizes to and from hectares, the unit all engine math uses.
pub struct UnitNormalizer;

impl UnitNormalizer {
    pub fn to_hectares(size: f64, unit: AreaUnit) -> f64 {
        match unit {
            AreaUnit::Acres => size * HECTARES_PER_ACRE,
            AreaUnit::Hectares => size,
        }
    }

    pub fn from_hectares(hectares: f64, unit: AreaUnit) -> f64 {
        match unit {
            AreaUnit::Acres => hectares / HECTARES_PER_ACRE,
            AreaUnit::Hectares => hectares,
        }
    }
}

/// Round half away from zero to the nearest integer.
pub fn round_whole(value: f64) -> f64 {
    value.round()
}

/// Round half away from zero to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
