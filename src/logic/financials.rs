use crate::models::{CostBreakdown, Financials, ScoredVariety};

/// Fixed cultivation cost per hectare in LKR.
pub const COST_PER_HECTARE: CostBreakdown = CostBreakdown {
    seed: 8000.0,
    fertilizer: 25000.0,
    pesticide: 8000.0,
    labor: 30000.0,
    other: 10000.0,
};

const KG_PER_TON: f64 = 1000.0;

/// Projects yield, revenue and profit for the recommended variety on a field.
///
/// Uses the lower bound of both the yield and the price range, so the
/// projection is conservative. Profit is reported as-is, including losses.
pub struct FinancialProjector;

impl FinancialProjector {
    pub fn project(primary: &ScoredVariety, hectares: f64) -> Financials {
        let candidate = &primary.candidate;
        let avg_yield_tons_per_ha = candidate.yield_range.min;
        let avg_price_lkr_per_kg = candidate.price_range.min;

        let total_yield_tons = avg_yield_tons_per_ha * hectares;
        let total_revenue = total_yield_tons * avg_price_lkr_per_kg * KG_PER_TON;

        let cost_breakdown = COST_PER_HECTARE.scaled(hectares);
        let total_cost = COST_PER_HECTARE.total() * hectares;

        let financials = Financials {
            total_yield_tons,
            total_revenue,
            total_cost,
            cost_breakdown,
            estimated_profit: total_revenue - total_cost,
        };

        tracing::debug!(
            variety = %candidate.name,
            hectares,
            profit = financials.estimated_profit,
            "projected financials"
        );

        financials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scoring::test_support::candidate;
    use crate::models::Range;

    fn scored(yield_min: f64, price_min: f64) -> ScoredVariety {
        let mut c = candidate("Test");
        c.yield_range = Range::new(yield_min, yield_min + 0.5);
        c.price_range = Range::new(price_min, price_min + 10.0);
        ScoredVariety {
            candidate: c,
            score: 100,
            breakdown: vec![],
        }
    }

    #[test]
    fn one_hectare_projection() {
        let f = FinancialProjector::project(&scored(5.2, 95.0), 1.0);
        assert!((f.total_yield_tons - 5.2).abs() < 1e-9);
        assert!((f.total_revenue - 494_000.0).abs() < 1e-6);
        assert_eq!(f.total_cost, 81_000.0);
        assert!((f.estimated_profit - 413_000.0).abs() < 1e-6);
        assert!(!f.is_loss());
    }

    #[test]
    fn costs_scale_with_area() {
        let f = FinancialProjector::project(&scored(5.0, 100.0), 2.5);
        assert_eq!(f.total_cost, 202_500.0);
        assert_eq!(f.cost_breakdown.labor, 75_000.0);
        assert_eq!(f.cost_breakdown.seed, 20_000.0);
        assert!((f.cost_breakdown.total() - f.total_cost).abs() < 1e-9);
    }

    #[test]
    fn loss_is_reported_unclamped() {
        // 2.0 t/ha at 20 LKR/kg = 40,000 revenue against 81,000 cost
        let f = FinancialProjector::project(&scored(2.0, 20.0), 1.0);
        assert!(f.is_loss());
        assert!((f.estimated_profit - (-41_000.0)).abs() < 1e-6);
    }

    #[test]
    fn projection_is_deterministic() {
        let s = scored(4.8, 95.0);
        let a = FinancialProjector::project(&s, 1.011715);
        let b = FinancialProjector::project(&s, 1.011715);
        assert_eq!(a, b);
    }
}
