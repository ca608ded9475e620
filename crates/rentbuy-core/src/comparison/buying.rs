use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RentBuyError;
use crate::types::{Money, Rate};
use crate::RentBuyResult;

use super::ComparisonInputs;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Ownership cash outflows over the holding period, itemised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyingCostBreakdown {
    /// Cash paid up front
    pub down_payment: Money,
    /// Financed principal
    pub loan_amount: Money,
    /// Fixed monthly mortgage payment (annuity formula)
    pub monthly_payment: Money,
    /// payment * 12 * holding_period_years
    pub total_mortgage_payments: Money,
    /// home_price * property_tax_rate * holding_period_years
    pub total_property_tax: Money,
    /// annual_homeowners_insurance * holding_period_years
    pub total_insurance: Money,
    /// home_price * annual_maintenance_fraction * holding_period_years
    pub total_maintenance: Money,
    /// home_price * selling_cost_fraction, applied once at exit
    pub selling_costs: Money,
    /// Sum of every component above (less loan_amount, which is not an outflow)
    pub total: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Total cost of buying over the holding period.
///
/// All mortgage payments made during the holding period are treated as sunk
/// cost: outstanding principal at exit is not credited back, and home
/// appreciation is not modelled. Property tax, insurance, and maintenance
/// accrue flat against the purchase price.
pub fn total_buying_cost(inputs: &ComparisonInputs) -> RentBuyResult<Money> {
    Ok(breakdown(inputs)?.total)
}

/// Itemised buying cost computation behind [`total_buying_cost`].
pub fn breakdown(inputs: &ComparisonInputs) -> RentBuyResult<BuyingCostBreakdown> {
    inputs.validate()?;

    let down_payment = inputs.home_price * inputs.down_payment_fraction;
    let loan_amount = inputs.home_price - down_payment;

    let monthly_rate = inputs.annual_interest_rate / dec!(12);
    let total_months = inputs.loan_term_years * 12;
    let monthly_payment = monthly_mortgage_payment(loan_amount, monthly_rate, total_months)?;

    let years = Decimal::from(inputs.holding_period_years);
    let total_mortgage_payments = monthly_payment * dec!(12) * years;
    let total_property_tax = inputs.home_price * inputs.property_tax_rate * years;
    let total_insurance = inputs.annual_homeowners_insurance * years;
    let total_maintenance = inputs.home_price * inputs.annual_maintenance_fraction * years;
    let selling_costs = inputs.home_price * inputs.selling_cost_fraction;

    let total = down_payment
        + total_mortgage_payments
        + total_property_tax
        + total_insurance
        + total_maintenance
        + selling_costs;

    Ok(BuyingCostBreakdown {
        down_payment,
        loan_amount,
        monthly_payment,
        total_mortgage_payments,
        total_property_tax,
        total_insurance,
        total_maintenance,
        selling_costs,
        total,
    })
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

/// Standard fixed-rate mortgage payment: P * r(1+r)^n / ((1+r)^n - 1)
pub fn monthly_mortgage_payment(
    principal: Money,
    monthly_rate: Rate,
    total_months: u32,
) -> RentBuyResult<Money> {
    if total_months == 0 {
        return Err(RentBuyError::DivisionByZero {
            context: "monthly payment with zero months".into(),
        });
    }

    if monthly_rate.is_zero() {
        // Interest-free: straight-line amortisation
        return Ok(principal / Decimal::from(total_months));
    }

    // (1 + r)^n via iterative multiplication
    let mut compound = Decimal::ONE;
    for _ in 0..total_months {
        compound *= Decimal::ONE + monthly_rate;
    }

    let numerator = principal * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        return Err(RentBuyError::DivisionByZero {
            context: "mortgage payment denominator".into(),
        });
    }

    Ok(numerator / denominator)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

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
    fn test_monthly_payment_known_answer() {
        // $240k at 4% over 30 years: the textbook answer is $1,145.80
        let payment =
            monthly_mortgage_payment(dec!(240_000), dec!(0.04) / dec!(12), 360).unwrap();
        assert!((payment - dec!(1145.80)).abs() < dec!(0.01));
    }

    #[test]
    fn test_monthly_payment_zero_rate_is_straight_line() {
        let payment = monthly_mortgage_payment(dec!(240_000), Decimal::ZERO, 360).unwrap();
        assert_eq!(payment, dec!(240_000) / dec!(360));
    }

    #[test]
    fn test_monthly_payment_zero_months_rejected() {
        let err = monthly_mortgage_payment(dec!(100_000), dec!(0.005), 0).unwrap_err();
        assert!(matches!(err, RentBuyError::DivisionByZero { .. }));
    }

    #[test]
    fn test_breakdown_components() {
        let b = breakdown(&base_inputs()).unwrap();
        assert_eq!(b.down_payment, dec!(60_000));
        assert_eq!(b.loan_amount, dec!(240_000));
        assert_eq!(b.total_property_tax, dec!(30_000));
        assert_eq!(b.total_insurance, dec!(10_000));
        assert_eq!(b.total_maintenance, dec!(30_000));
        assert_eq!(b.selling_costs, dec!(18_000));
        assert_eq!(
            b.total,
            b.down_payment
                + b.total_mortgage_payments
                + b.total_property_tax
                + b.total_insurance
                + b.total_maintenance
                + b.selling_costs
        );
    }

    #[test]
    fn test_total_buying_cost_baseline() {
        // down 60k + mortgage 137,495.61 + tax 30k + insurance 10k
        // + maintenance 30k + selling 18k
        let total = total_buying_cost(&base_inputs()).unwrap();
        assert!((total - dec!(285_495.61)).abs() < dec!(1));
    }

    #[test]
    fn test_full_down_payment_means_no_loan() {
        let mut inputs = base_inputs();
        inputs.down_payment_fraction = Decimal::ONE;
        let b = breakdown(&inputs).unwrap();
        assert_eq!(b.loan_amount, Decimal::ZERO);
        assert_eq!(b.monthly_payment, Decimal::ZERO);
        assert_eq!(b.total_mortgage_payments, Decimal::ZERO);
    }

    #[test]
    fn test_price_proportional_components_scale_linearly() {
        let inputs = base_inputs();
        let mut doubled = base_inputs();
        doubled.home_price = inputs.home_price * dec!(2);

        let b1 = breakdown(&inputs).unwrap();
        let b2 = breakdown(&doubled).unwrap();

        assert_eq!(b2.total_property_tax, b1.total_property_tax * dec!(2));
        assert_eq!(b2.total_maintenance, b1.total_maintenance * dec!(2));
        assert_eq!(b2.selling_costs, b1.selling_costs * dec!(2));
    }
}
