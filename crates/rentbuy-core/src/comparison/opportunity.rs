use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::RentBuyError;
use crate::types::{Money, Rate, Years};
use crate::RentBuyResult;

/// Forgone investment value of the down payment at end of the horizon.
///
/// Models the down payment as capital that, had it not been spent on the
/// home, would have compounded annually at the given rate:
/// `home_price * fraction * (1 + r)^years`.
pub fn opportunity_cost(
    home_price: Money,
    down_payment_fraction: Decimal,
    annual_investment_return_rate: Rate,
    holding_period_years: Years,
) -> RentBuyResult<Money> {
    if home_price <= Decimal::ZERO {
        return Err(RentBuyError::InvalidInput {
            field: "home_price".into(),
            reason: "Home price must be positive".into(),
        });
    }
    if down_payment_fraction < Decimal::ZERO || down_payment_fraction > Decimal::ONE {
        return Err(RentBuyError::InvalidInput {
            field: "down_payment_fraction".into(),
            reason: "Down payment fraction must be between 0 and 1".into(),
        });
    }
    if annual_investment_return_rate < Decimal::ZERO {
        return Err(RentBuyError::InvalidInput {
            field: "annual_investment_return_rate".into(),
            reason: "Rate must not be negative".into(),
        });
    }
    if holding_period_years < 1 {
        return Err(RentBuyError::InvalidInput {
            field: "holding_period_years".into(),
            reason: "Holding period must be at least 1 year".into(),
        });
    }

    let principal = home_price * down_payment_fraction;
    let growth = (Decimal::ONE + annual_investment_return_rate).powi(holding_period_years as i64);

    Ok(principal * growth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_known_answer() {
        // 60,000 * 1.05^10 = 97,733.677606646484375
        let cost = opportunity_cost(dec!(300_000), dec!(0.20), dec!(0.05), 10).unwrap();
        assert!((cost - dec!(97_733.677606646484375)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_zero_return_is_principal() {
        let cost = opportunity_cost(dec!(300_000), dec!(0.20), Decimal::ZERO, 10).unwrap();
        assert_eq!(cost, dec!(60_000));
    }

    #[test]
    fn test_zero_down_payment_is_zero() {
        let cost = opportunity_cost(dec!(300_000), Decimal::ZERO, dec!(0.07), 10).unwrap();
        assert_eq!(cost, Decimal::ZERO);
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let err = opportunity_cost(dec!(300_000), dec!(0.20), dec!(0.05), 0).unwrap_err();
        assert!(matches!(
            err,
            RentBuyError::InvalidInput { ref field, .. } if field == "holding_period_years"
        ));
    }

    #[test]
    fn test_rejects_negative_rate() {
        assert!(opportunity_cost(dec!(300_000), dec!(0.20), dec!(-0.01), 10).is_err());
    }
}
