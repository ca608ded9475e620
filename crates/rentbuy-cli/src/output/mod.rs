pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Field names that carry dollar amounts and get currency rendering.
const MONEY_FIELDS: &[&str] = &[
    "down_payment",
    "loan_amount",
    "monthly_payment",
    "total_mortgage_payments",
    "total_property_tax",
    "total_insurance",
    "total_maintenance",
    "selling_costs",
    "total",
    "total_rent",
    "opportunity_cost",
    "net_benefit",
    "home_price",
    "monthly_rent",
    "annual_homeowners_insurance",
    "annual_renters_insurance",
];

pub fn is_money_field(name: &str) -> bool {
    MONEY_FIELDS.contains(&name)
}

/// Render a decimal value as currency: two decimal places, thousands
/// separators, leading dollar sign. Falls back to None for non-numeric input.
pub fn format_currency(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let amount = Decimal::from_str(&raw).ok()?;
    // Half-up, the way currency is displayed, rather than banker's rounding
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    Some(format!("{sign}${grouped}.{frac_part}"))
}
