use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;
use crate::RentBuyResult;

use super::ComparisonInputs;

/// Rental cash outflows over the holding period, itemised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentingCostBreakdown {
    /// Sum of escalated annual rent across the holding period
    pub total_rent: Money,
    /// annual_renters_insurance * holding_period_years
    pub total_insurance: Money,
    /// total_rent + total_insurance
    pub total: Money,
}

/// Total cost of renting over the holding period.
///
/// Rent escalates once per year: year 0 pays the unescalated rent, year y
/// pays monthly_rent * (1 + inflation)^y for all twelve months. Years are
/// accumulated in increasing order so repeated runs are bit-identical.
pub fn total_renting_cost(inputs: &ComparisonInputs) -> RentBuyResult<Money> {
    Ok(breakdown(inputs)?.total)
}

/// Itemised renting cost computation behind [`total_renting_cost`].
pub fn breakdown(inputs: &ComparisonInputs) -> RentBuyResult<RentingCostBreakdown> {
    inputs.validate()?;

    let escalation = Decimal::ONE + inputs.annual_rent_inflation_rate;
    let mut annual_rent = inputs.monthly_rent * Decimal::from(12u32);
    let mut total_rent = Decimal::ZERO;

    for year in 0..inputs.holding_period_years {
        if year > 0 {
            annual_rent *= escalation;
        }
        total_rent += annual_rent;
    }

    let total_insurance =
        inputs.annual_renters_insurance * Decimal::from(inputs.holding_period_years);

    Ok(RentingCostBreakdown {
        total_rent,
        total_insurance,
        total: total_rent + total_insurance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_inputs() -> ComparisonInputs {
        ComparisonInputs {
            home_price: dec!(300_000),
            down_payment_fraction: dec!(0.20),
            loan_term_years: 30,
            annual_interest_rate: dec!(0.04),
            property_tax_rate: dec!(0.01),
            annual_homeowners_insurance: dec!(1000),
            annual_maintenance_fraction: dec!(0.01),
            selling_cost_fraction: dec!(0.06),
            monthly_rent: dec!(1500),
            annual_rent_inflation_rate: dec!(0.03),
            annual_renters_insurance: dec!(200),
            annual_investment_return_rate: dec!(0.05),
            holding_period_years: 10,
        }
    }

    #[test]
    fn test_total_renting_cost_baseline() {
        // 18,000 * sum(1.03^y, y=0..9) = 206,349.83, plus 2,000 insurance
        let total = total_renting_cost(&base_inputs()).unwrap();
        assert!((total - dec!(208_349.83)).abs() < dec!(0.01));
    }

    #[test]
    fn test_zero_inflation_is_flat_rent() {
        let mut inputs = base_inputs();
        inputs.annual_rent_inflation_rate = Decimal::ZERO;
        let b = breakdown(&inputs).unwrap();
        assert_eq!(b.total_rent, dec!(1500) * dec!(12) * dec!(10));
    }

    #[test]
    fn test_year_zero_rent_is_unescalated() {
        let mut inputs = base_inputs();
        inputs.holding_period_years = 1;
        let b = breakdown(&inputs).unwrap();
        assert_eq!(b.total_rent, dec!(1500) * dec!(12));
    }

    #[test]
    fn test_longer_horizon_costs_strictly_more() {
        let mut shorter = base_inputs();
        let mut longer = base_inputs();
        shorter.holding_period_years = 5;
        longer.holding_period_years = 6;
        let a = total_renting_cost(&shorter).unwrap();
        let b = total_renting_cost(&longer).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_free_rent_leaves_only_insurance() {
        let mut inputs = base_inputs();
        inputs.monthly_rent = Decimal::ZERO;
        let b = breakdown(&inputs).unwrap();
        assert_eq!(b.total_rent, Decimal::ZERO);
        assert_eq!(b.total, dec!(2000));
    }
}
