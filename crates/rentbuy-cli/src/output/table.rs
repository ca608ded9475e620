use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_currency, is_money_field};

/// Format output as a table using the tabled crate.
///
/// Cost breakdowns nested one level deep (the comparison's `buying` and
/// `renting` sections) are flattened into dotted field names; money fields
/// are rendered as currency.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            push_rows(&mut builder, key, val);
        }
        let table = Table::from(builder);
        println!("{}", table);
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            push_rows(&mut builder, key, val);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

/// Push one row per scalar field, flattening nested breakdown objects.
fn push_rows(builder: &mut Builder, key: &str, val: &Value) {
    match val {
        Value::Object(inner) => {
            for (sub_key, sub_val) in inner {
                let label = format!("{key}.{sub_key}");
                builder.push_record([label.as_str(), &format_field(sub_key, sub_val)]);
            }
        }
        _ => {
            builder.push_record([key, &format_field(key, val)]);
        }
    }
}

fn format_field(name: &str, value: &Value) -> String {
    if is_money_field(name) {
        if let Some(currency) = format_currency(value) {
            return currency;
        }
    }
    format_value(value)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
