use serde_json::Value;
use std::io;

/// Write output as two-column field/value CSV to stdout.
///
/// Values stay raw (no currency formatting) so the output remains
/// machine-readable; nested breakdown objects flatten to dotted names.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let target = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };

            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in target {
                match val {
                    Value::Object(inner) => {
                        for (sub_key, sub_val) in inner {
                            let _ = wtr.write_record([
                                format!("{key}.{sub_key}"),
                                format_csv_value(sub_val),
                            ]);
                        }
                    }
                    _ => {
                        let _ = wtr.write_record([key.to_string(), format_csv_value(val)]);
                    }
                }
            }
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
