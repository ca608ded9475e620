use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use rentbuy_core::comparison::{self, buying, opportunity, renting, ComparisonInputs};
use rentbuy_core::market_data::MarketSnapshot;

use crate::input;

/// Input plumbing shared by every cost command: a JSON file, piped JSON,
/// or the interactive-form placeholder defaults, optionally overlaid with
/// the market snapshot and then with explicit flags.
#[derive(Args)]
pub struct InputOptions {
    /// Path to a JSON file holding a full ComparisonInputs object
    #[arg(long)]
    pub input: Option<String>,

    /// Pre-populate from the typical US market snapshot before flag overrides
    #[arg(long)]
    pub market: bool,

    /// Home purchase price
    #[arg(long)]
    pub home_price: Option<Decimal>,

    /// Down payment as a fraction of home price (0.20 = 20% down)
    #[arg(long)]
    pub down_payment_fraction: Option<Decimal>,

    /// Mortgage term in years
    #[arg(long)]
    pub loan_term_years: Option<u32>,

    /// Nominal annual mortgage interest rate (0.04 = 4%)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Annual property tax as a fraction of home price
    #[arg(long)]
    pub property_tax_rate: Option<Decimal>,

    /// Annual homeowners insurance premium
    #[arg(long)]
    pub homeowners_insurance: Option<Decimal>,

    /// Annual maintenance as a fraction of home price
    #[arg(long)]
    pub maintenance_fraction: Option<Decimal>,

    /// Selling costs at exit as a fraction of home price
    #[arg(long)]
    pub selling_cost_fraction: Option<Decimal>,

    /// Starting monthly rent
    #[arg(long)]
    pub monthly_rent: Option<Decimal>,

    /// Annual rent escalation rate
    #[arg(long)]
    pub rent_inflation_rate: Option<Decimal>,

    /// Annual renters insurance premium
    #[arg(long)]
    pub renters_insurance: Option<Decimal>,

    /// Annual return the down payment would earn if invested
    #[arg(long)]
    pub investment_return_rate: Option<Decimal>,

    /// Comparison horizon in years
    #[arg(long)]
    pub holding_period_years: Option<u32>,
}

/// Arguments for the full comparison
#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub inputs: InputOptions,
}

/// Arguments for the buying cost model
#[derive(Args)]
pub struct BuyingCostArgs {
    #[command(flatten)]
    pub inputs: InputOptions,
}

/// Arguments for the renting cost model
#[derive(Args)]
pub struct RentingCostArgs {
    #[command(flatten)]
    pub inputs: InputOptions,
}

/// Arguments for the standalone opportunity cost calculation
#[derive(Args)]
pub struct OpportunityCostArgs {
    /// Home purchase price
    #[arg(long)]
    pub home_price: Decimal,

    /// Down payment as a fraction of home price
    #[arg(long)]
    pub down_payment_fraction: Decimal,

    /// Annual return the down payment would earn if invested
    #[arg(long)]
    pub investment_return_rate: Decimal,

    /// Comparison horizon in years
    #[arg(long)]
    pub holding_period_years: u32,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args.inputs)?;
    let result = comparison::compare(&inputs)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_buying_cost(args: BuyingCostArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args.inputs)?;
    let result = buying::breakdown(&inputs)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_renting_cost(args: RentingCostArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args.inputs)?;
    let result = renting::breakdown(&inputs)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_opportunity_cost(
    args: OpportunityCostArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let cost = opportunity::opportunity_cost(
        args.home_price,
        args.down_payment_fraction,
        args.investment_return_rate,
        args.holding_period_years,
    )?;
    Ok(serde_json::json!({ "opportunity_cost": cost }))
}

pub fn run_market_defaults() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(MarketSnapshot::typical_us())?)
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

/// Placeholder values matching the interactive form's default state.
fn placeholder_inputs() -> ComparisonInputs {
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

/// Merge order: file/stdin (or placeholders), then the market snapshot when
/// requested, then any explicit flags. Later layers win.
fn resolve_inputs(opts: &InputOptions) -> Result<ComparisonInputs, Box<dyn std::error::Error>> {
    let mut inputs: ComparisonInputs = if let Some(ref path) = opts.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        placeholder_inputs()
    };

    if opts.market {
        MarketSnapshot::typical_us().apply(&mut inputs);
    }

    apply_flags(opts, &mut inputs);

    Ok(inputs)
}

fn apply_flags(opts: &InputOptions, inputs: &mut ComparisonInputs) {
    if let Some(v) = opts.home_price {
        inputs.home_price = v;
    }
    if let Some(v) = opts.down_payment_fraction {
        inputs.down_payment_fraction = v;
    }
    if let Some(v) = opts.loan_term_years {
        inputs.loan_term_years = v;
    }
    if let Some(v) = opts.interest_rate {
        inputs.annual_interest_rate = v;
    }
    if let Some(v) = opts.property_tax_rate {
        inputs.property_tax_rate = v;
    }
    if let Some(v) = opts.homeowners_insurance {
        inputs.annual_homeowners_insurance = v;
    }
    if let Some(v) = opts.maintenance_fraction {
        inputs.annual_maintenance_fraction = v;
    }
    if let Some(v) = opts.selling_cost_fraction {
        inputs.selling_cost_fraction = v;
    }
    if let Some(v) = opts.monthly_rent {
        inputs.monthly_rent = v;
    }
    if let Some(v) = opts.rent_inflation_rate {
        inputs.annual_rent_inflation_rate = v;
    }
    if let Some(v) = opts.renters_insurance {
        inputs.annual_renters_insurance = v;
    }
    if let Some(v) = opts.investment_return_rate {
        inputs.annual_investment_return_rate = v;
    }
    if let Some(v) = opts.holding_period_years {
        inputs.holding_period_years = v;
    }
}
