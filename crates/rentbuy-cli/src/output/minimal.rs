use serde_json::Value;

use super::{format_currency, is_money_field};

/// Print just the headline figures from the output.
///
/// For a full comparison that is the net benefit and the recommendation;
/// for an individual cost model it is the total.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Priority list of key output fields
    let priority_keys = ["net_benefit", "total", "opportunity_cost"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(key, val));
                    if let Some(Value::String(rec)) = map.get("recommendation") {
                        println!("recommendation: {}", rec);
                    }
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(key, val));
            return;
        }
    }

    println!("{}", format_minimal("", result_obj));
}

fn format_minimal(name: &str, value: &Value) -> String {
    if is_money_field(name) {
        if let Some(currency) = format_currency(value) {
            return currency;
        }
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
