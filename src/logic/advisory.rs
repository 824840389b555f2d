use crate::logic::units::round_whole;
use crate::models::{
    Advisory, FieldProfile, ScoredVariety, Season, SoilType, WaterAvailability, WaterLevel,
};
use regex_lite::{Captures, Regex};
use std::sync::LazyLock;

pub const NO_SPECIAL_ADVICE: &str = "No special advice needed";

/// Above this many hectares, mechanization is worth suggesting.
const MECHANIZATION_THRESHOLD_HA: f64 = 2.0;

static PER_HECTARE_RATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)kg/ha").expect("per-hectare rate pattern is valid")
});

/// Builds the farmer-facing guidance that accompanies a recommendation.
pub struct AdvisoryComposer;

impl AdvisoryComposer {
    pub fn compose(field: &FieldProfile, primary: &ScoredVariety) -> Advisory {
        let hectares = field.hectares();
        Advisory {
            fertilizer_plan: Self::fertilizer_plan(field.soil_type, hectares),
            water_requirement: Self::water_requirement(primary.candidate.water_need).to_string(),
            special_advice: Self::special_advice(field, hectares),
        }
    }

    /// Soil-specific fertilizer plan with every `<N>kg/ha` rate rewritten as
    /// the absolute amount for the field.
    pub fn fertilizer_plan(soil: SoilType, hectares: f64) -> String {
        PER_HECTARE_RATE
            .replace_all(fertilizer_plan_per_ha(soil), |caps: &Captures| {
                let rate: f64 = caps[1]
                    .parse()
                    .expect("rate pattern captures a number");
                format!("{}kg", round_whole(rate * hectares))
            })
            .into_owned()
    }

    pub fn water_requirement(need: WaterLevel) -> &'static str {
        match need {
            WaterLevel::High => "1200-1500 mm per season (continuous flooding)",
            WaterLevel::Medium => "900-1200 mm per season (intermittent irrigation)",
            WaterLevel::Low => "600-900 mm per season (rain-fed with supplementary irrigation)",
        }
    }

    /// Ordered advisory lines; never empty.
    pub fn special_advice(field: &FieldProfile, hectares: f64) -> Vec<String> {
        let mut advice = Vec::new();

        if field.water_availability == WaterAvailability::Poor {
            advice.push(
                "Build small farm ponds or harvest rainwater to bridge dry spells".to_string(),
            );
            advice.push("Mulch with paddy straw to conserve soil moisture".to_string());
        }

        if field.soil_type == SoilType::Sandy {
            advice.push(
                "Incorporate organic matter (compost or cow dung) to improve water retention"
                    .to_string(),
            );
        }

        if field.season == Season::Yala {
            advice.push(
                "Plant early in Yala so the crop matures before the end-of-season drought"
                    .to_string(),
            );
        }

        if hectares > MECHANIZATION_THRESHOLD_HA {
            advice.push(
                "Consider mechanized transplanting and combine harvesting for this field size"
                    .to_string(),
            );
        }

        if advice.is_empty() {
            advice.push(NO_SPECIAL_ADVICE.to_string());
        }

        advice
    }
}

fn fertilizer_plan_per_ha(soil: SoilType) -> &'static str {
    match soil {
        SoilType::Red => {
            "Urea: 100kg/ha, TSP: 62kg/ha, MOP: 60kg/ha. Apply dolomite 500kg/ha if pH is below 5.5"
        }
        SoilType::ClayLoam => "Urea: 75kg/ha, TSP: 50kg/ha, MOP: 40kg/ha in three split doses",
        SoilType::Sandy => {
            "Urea: 110kg/ha in four splits, TSP: 55kg/ha, MOP: 75kg/ha with compost 2500kg/ha"
        }
        SoilType::Alluvial => "Urea: 70kg/ha, TSP: 45kg/ha, MOP: 35kg/ha",
        SoilType::Laterite => "Urea: 90kg/ha, TSP: 65kg/ha, MOP: 50kg/ha with lime 250kg/ha",
        SoilType::Peaty => "Urea: 60kg/ha, TSP: 60kg/ha, MOP: 60kg/ha, zinc sulphate 10kg/ha",
        SoilType::Saline => "Urea: 85kg/ha, TSP: 50kg/ha, MOP: 50kg/ha with gypsum 500kg/ha",
        SoilType::Black => "Urea: 80kg/ha, TSP: 45kg/ha, MOP: 30kg/ha",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scoring::test_support::{candidate, field};
    use crate::models::{AreaUnit, FieldSize};

    fn scored(need: WaterLevel) -> ScoredVariety {
        let mut c = candidate("Test");
        c.water_need = need;
        ScoredVariety {
            candidate: c,
            score: 90,
            breakdown: vec![],
        }
    }

    fn sized(mut profile: FieldProfile, hectares: f64) -> FieldProfile {
        profile.field_size = FieldSize::new(hectares, AreaUnit::Hectares).unwrap();
        profile
    }

    #[test]
    fn fertilizer_plan_scales_every_rate() {
        let plan = AdvisoryComposer::fertilizer_plan(SoilType::ClayLoam, 2.0);
        assert_eq!(plan, "Urea: 150kg, TSP: 100kg, MOP: 80kg in three split doses");
        assert!(!plan.contains("/ha"));
    }

    #[test]
    fn fertilizer_plan_scales_amendments_too() {
        let plan = AdvisoryComposer::fertilizer_plan(SoilType::Sandy, 0.5);
        assert_eq!(
            plan,
            "Urea: 55kg in four splits, TSP: 28kg, MOP: 38kg with compost 1250kg"
        );
    }

    #[test]
    fn every_soil_has_a_plan() {
        for soil in SoilType::all() {
            let plan = AdvisoryComposer::fertilizer_plan(*soil, 1.0);
            assert!(plan.starts_with("Urea:"), "{}", soil);
            assert!(!plan.contains("kg/ha"), "{}", soil);
            assert!(!plan.contains(" 0kg"), "{}", soil);
        }
    }

    #[test]
    fn fractional_rates_are_scaled() {
        assert_eq!(
            PER_HECTARE_RATE.replace_all("Zinc: 2.5kg/ha", |caps: &Captures| {
                let rate: f64 = caps[1].parse().unwrap();
                format!("{}kg", round_whole(rate * 4.0))
            }),
            "Zinc: 10kg"
        );
    }

    #[test]
    fn water_requirement_follows_variety_need() {
        assert!(AdvisoryComposer::water_requirement(WaterLevel::High).starts_with("1200-1500"));
        assert!(AdvisoryComposer::water_requirement(WaterLevel::Medium).starts_with("900-1200"));
        assert!(AdvisoryComposer::water_requirement(WaterLevel::Low).starts_with("600-900"));
    }

    #[test]
    fn advice_lines_follow_fixed_order() {
        let f = sized(
            field(SoilType::Sandy, WaterAvailability::Poor, Season::Yala),
            3.0,
        );
        let advice = AdvisoryComposer::compose(&f, &scored(WaterLevel::Low)).special_advice;
        assert_eq!(advice.len(), 5);
        assert!(advice[0].contains("rainwater"));
        assert!(advice[1].contains("Mulch"));
        assert!(advice[2].contains("organic matter"));
        assert!(advice[3].contains("Yala"));
        assert!(advice[4].contains("mechanized"));
    }

    #[test]
    fn no_matching_condition_yields_sentinel() {
        let f = sized(
            field(SoilType::ClayLoam, WaterAvailability::Good, Season::Maha),
            1.0,
        );
        let advice = AdvisoryComposer::compose(&f, &scored(WaterLevel::High)).special_advice;
        assert_eq!(advice, vec![NO_SPECIAL_ADVICE.to_string()]);
    }

    #[test]
    fn mechanization_needs_more_than_two_hectares() {
        let at_threshold = sized(
            field(SoilType::ClayLoam, WaterAvailability::Good, Season::Maha),
            2.0,
        );
        let advice = AdvisoryComposer::special_advice(&at_threshold, at_threshold.hectares());
        assert_eq!(advice, vec![NO_SPECIAL_ADVICE.to_string()]);

        let above = sized(at_threshold.clone(), 2.01);
        let advice = AdvisoryComposer::special_advice(&above, above.hectares());
        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("mechanized"));
    }

    #[test]
    fn compose_uses_field_area_for_plan() {
        // 2.5 acres = 1.011715 ha
        let f = field(SoilType::ClayLoam, WaterAvailability::Good, Season::Yala);
        let advisory = AdvisoryComposer::compose(&f, &scored(WaterLevel::High));
        assert_eq!(
            advisory.fertilizer_plan,
            "Urea: 76kg, TSP: 51kg, MOP: 40kg in three split doses"
        );
        assert!(advisory.water_requirement.starts_with("1200-1500"));
        assert_eq!(advisory.special_advice.len(), 1);
        assert!(advisory.special_advice[0].contains("Yala"));
    }
}
