use serde_json::{Map, Value};
use std::fmt::Write;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    println!("{}", render_table(value));
}

/// One Field/Value table for the scalar results, then one table per list
/// (allocations, lenders), then warnings and methodology.
pub fn render_table(value: &Value) -> String {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => render_result_tables(result, map),
            _ => render_fields(map),
        },
        Value::Array(arr) => render_rows(arr),
        _ => value.to_string(),
    }
}

fn render_result_tables(result: &Map<String, Value>, envelope: &Map<String, Value>) -> String {
    let mut out = render_fields(result);

    for (key, val) in result {
        if let Value::Array(rows) = val {
            if is_row_list(val) {
                let _ = write!(out, "\n\n{}:\n{}", heading(key), render_rows(rows));
            }
        }
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            out.push_str("\n\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    let _ = write!(out, "\n  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        let _ = write!(out, "\n\nMethodology: {}", meth);
    }
    out
}

/// Scalar fields only; nested lists get their own table.
fn render_fields(map: &Map<String, Value>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if is_row_list(val) {
            continue;
        }
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    Table::from(builder).to_string()
}

fn render_rows(arr: &[Value]) -> String {
    if arr.is_empty() {
        return "(empty)".to_string();
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        Table::from(builder).to_string()
    } else {
        arr.iter().map(format_value).collect::<Vec<_>>().join("\n")
    }
}

fn is_row_list(value: &Value) -> bool {
    matches!(value, Value::Array(rows) if !rows.is_empty() && rows.iter().all(Value::is_object))
}

fn heading(key: &str) -> String {
    let mut chars = key.replace('_', " ").chars().collect::<Vec<_>>();
    if let Some(c) = chars.first_mut() {
        *c = c.to_ascii_uppercase();
    }
    chars.into_iter().collect()
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
