pub mod buying;
pub mod opportunity;
pub mod renting;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::RentBuyError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, Years};
use crate::RentBuyResult;

pub use buying::BuyingCostBreakdown;
pub use renting::RentingCostBreakdown;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for one rent-vs-buy comparison run.
///
/// All rates are decimals (0.05 = 5%), all fractions are of the home price
/// unless noted. The struct is a plain value object: construct it, validate,
/// compute. Nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInputs {
    /// Purchase price of the home
    pub home_price: Money,
    /// Down payment as a fraction of home price (0.20 = 20% down)
    pub down_payment_fraction: Decimal,
    /// Mortgage term in years
    pub loan_term_years: Years,
    /// Nominal annual mortgage interest rate
    pub annual_interest_rate: Rate,
    /// Annual property tax as a fraction of home price
    pub property_tax_rate: Rate,
    /// Annual homeowners insurance premium
    pub annual_homeowners_insurance: Money,
    /// Annual maintenance as a fraction of home price
    pub annual_maintenance_fraction: Rate,
    /// Selling costs at exit as a fraction of home price
    pub selling_cost_fraction: Rate,
    /// Starting monthly rent for the alternative
    pub monthly_rent: Money,
    /// Annual rent escalation rate
    pub annual_rent_inflation_rate: Rate,
    /// Annual renters insurance premium
    pub annual_renters_insurance: Money,
    /// Annual return the down payment would earn if invested instead
    pub annual_investment_return_rate: Rate,
    /// Comparison horizon in years
    pub holding_period_years: Years,
}

/// Buy-or-rent verdict derived from the net benefit sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Buy,
    Rent,
}

/// Complete comparison output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    /// Ownership cost components over the holding period
    pub buying: BuyingCostBreakdown,
    /// Renting cost components over the holding period
    pub renting: RentingCostBreakdown,
    /// Forgone investment value of the down payment at exit
    pub opportunity_cost: Money,
    /// buying total - renting total + opportunity cost
    pub net_benefit: Money,
    /// Buy when net_benefit > 0, rent otherwise
    pub recommendation: Recommendation,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full buy-vs-rent comparison.
///
/// Computes both cost models and the opportunity cost of the down payment,
/// then synthesises `net_benefit = buying - renting + opportunity_cost` and
/// the recommendation. Returns a `ComputationOutput<ComparisonOutput>` with
/// warnings for advisory (non-fatal) conditions.
pub fn compare(inputs: &ComparisonInputs) -> RentBuyResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    inputs.validate()?;
    collect_warnings(inputs, &mut warnings);

    let buying = buying::breakdown(inputs)?;
    let renting = renting::breakdown(inputs)?;
    let opportunity_cost = opportunity::opportunity_cost(
        inputs.home_price,
        inputs.down_payment_fraction,
        inputs.annual_investment_return_rate,
        inputs.holding_period_years,
    )?;

    let net_benefit = buying.total - renting.total + opportunity_cost;
    let recommendation = if net_benefit > Decimal::ZERO {
        Recommendation::Buy
    } else {
        Recommendation::Rent
    };

    let output = ComparisonOutput {
        buying,
        renting,
        opportunity_cost,
        net_benefit,
        recommendation,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Rent vs. Buy Total Cost Comparison",
        inputs,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl ComparisonInputs {
    /// Range-check every field before any computation. First violation wins.
    pub fn validate(&self) -> RentBuyResult<()> {
        if self.home_price <= Decimal::ZERO {
            return Err(invalid("home_price", "Home price must be positive"));
        }
        if self.down_payment_fraction < Decimal::ZERO || self.down_payment_fraction > Decimal::ONE {
            return Err(invalid(
                "down_payment_fraction",
                "Down payment fraction must be between 0 and 1",
            ));
        }
        if self.loan_term_years < 1 {
            return Err(invalid("loan_term_years", "Loan term must be at least 1 year"));
        }
        if self.holding_period_years < 1 {
            return Err(invalid(
                "holding_period_years",
                "Holding period must be at least 1 year",
            ));
        }

        let non_negative_rates = [
            ("annual_interest_rate", self.annual_interest_rate),
            ("property_tax_rate", self.property_tax_rate),
            ("annual_maintenance_fraction", self.annual_maintenance_fraction),
            ("selling_cost_fraction", self.selling_cost_fraction),
            ("annual_rent_inflation_rate", self.annual_rent_inflation_rate),
            (
                "annual_investment_return_rate",
                self.annual_investment_return_rate,
            ),
        ];
        for (field, rate) in non_negative_rates {
            if rate < Decimal::ZERO {
                return Err(invalid(field, "Rate must not be negative"));
            }
        }

        let non_negative_amounts = [
            ("annual_homeowners_insurance", self.annual_homeowners_insurance),
            ("monthly_rent", self.monthly_rent),
            ("annual_renters_insurance", self.annual_renters_insurance),
        ];
        for (field, amount) in non_negative_amounts {
            if amount < Decimal::ZERO {
                return Err(invalid(field, "Amount must not be negative"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> RentBuyError {
    RentBuyError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    }
}

fn collect_warnings(inputs: &ComparisonInputs, warnings: &mut Vec<String>) {
    if inputs.holding_period_years > inputs.loan_term_years {
        warnings.push(format!(
            "Holding period of {} years exceeds the {}-year loan term — mortgage outlay \
             is accrued for the full holding period",
            inputs.holding_period_years, inputs.loan_term_years
        ));
    }

    if inputs.holding_period_years > 100 {
        warnings.push(format!(
            "Holding period of {} years is beyond any realistic horizon",
            inputs.holding_period_years
        ));
    }

    if inputs.annual_interest_rate > dec!(0.15) {
        warnings.push(format!(
            "Mortgage rate {} exceeds 15% — verify market data",
            inputs.annual_interest_rate
        ));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// The worked example from the interactive shell's default form values.
    fn sample_inputs() -> ComparisonInputs {
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
    fn test_compare_net_benefit_identity() {
        let out = compare(&sample_inputs()).unwrap();
        let r = &out.result;
        assert_eq!(
            r.net_benefit,
            r.buying.total - r.renting.total + r.opportunity_cost
        );
    }

    #[test]
    fn test_compare_recommendation_follows_sign() {
        let out = compare(&sample_inputs()).unwrap();
        let r = &out.result;
        let expected = if r.net_benefit > Decimal::ZERO {
            Recommendation::Buy
        } else {
            Recommendation::Rent
        };
        assert_eq!(r.recommendation, expected);
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut inputs = sample_inputs();
        inputs.home_price = dec!(-1);
        let err = compare(&inputs).unwrap_err();
        assert!(matches!(
            err,
            RentBuyError::InvalidInput { ref field, .. } if field == "home_price"
        ));
    }

    #[test]
    fn test_validate_rejects_down_payment_above_one() {
        let mut inputs = sample_inputs();
        inputs.down_payment_fraction = dec!(1.01);
        assert!(compare(&inputs).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_holding_period() {
        let mut inputs = sample_inputs();
        inputs.holding_period_years = 0;
        let err = compare(&inputs).unwrap_err();
        assert!(matches!(
            err,
            RentBuyError::InvalidInput { ref field, .. } if field == "holding_period_years"
        ));
    }

    #[test]
    fn test_warning_when_holding_exceeds_term() {
        let mut inputs = sample_inputs();
        inputs.loan_term_years = 5;
        inputs.holding_period_years = 10;
        let out = compare(&inputs).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("exceeds")));
    }

    #[test]
    fn test_inputs_json_round_trip() {
        let inputs = sample_inputs();
        let json = serde_json::to_string(&inputs).unwrap();
        let back: ComparisonInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back.home_price, inputs.home_price);
        assert_eq!(back.holding_period_years, inputs.holding_period_years);
    }
}
