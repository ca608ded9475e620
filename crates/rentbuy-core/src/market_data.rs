use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonInputs;
use crate::types::{Money, Rate};

/// Illustrative snapshot of typical US market figures.
///
/// Hardcoded reference values — nothing here is fetched live. The shell
/// merges a snapshot into a `ComparisonInputs` before user edits; the core
/// formulas never read these directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub mortgage_rate: Rate,
    pub rent_inflation_rate: Rate,
    /// Published alongside the rest of the snapshot; no cost formula uses it
    pub home_appreciation_rate: Rate,
    pub down_payment_fraction: Decimal,
    pub home_price: Money,
    pub annual_homeowners_insurance: Money,
    pub property_tax_rate: Rate,
    pub selling_cost_fraction: Rate,
    pub monthly_rent: Money,
    pub annual_renters_insurance: Money,
    pub investment_return_rate: Rate,
}

impl MarketSnapshot {
    /// National averages, 2024 vintage.
    pub fn typical_us() -> Self {
        MarketSnapshot {
            mortgage_rate: dec!(0.0687),
            rent_inflation_rate: dec!(0.03),
            home_appreciation_rate: dec!(0.07),
            down_payment_fraction: dec!(0.136),
            home_price: dec!(513_100),
            annual_homeowners_insurance: dec!(1312),
            property_tax_rate: dec!(0.0107),
            selling_cost_fraction: dec!(0.06),
            monthly_rent: dec!(1480),
            annual_renters_insurance: dec!(174),
            investment_return_rate: dec!(0.07),
        }
    }

    /// Overwrite the snapshot-covered fields of `inputs`. Loan term and
    /// holding period stay as supplied; the snapshot has no opinion on them.
    pub fn apply(&self, inputs: &mut ComparisonInputs) {
        inputs.home_price = self.home_price;
        inputs.down_payment_fraction = self.down_payment_fraction;
        inputs.annual_interest_rate = self.mortgage_rate;
        inputs.property_tax_rate = self.property_tax_rate;
        inputs.annual_homeowners_insurance = self.annual_homeowners_insurance;
        inputs.selling_cost_fraction = self.selling_cost_fraction;
        inputs.monthly_rent = self.monthly_rent;
        inputs.annual_rent_inflation_rate = self.rent_inflation_rate;
        inputs.annual_renters_insurance = self.annual_renters_insurance;
        inputs.annual_investment_return_rate = self.investment_return_rate;
    }
}
