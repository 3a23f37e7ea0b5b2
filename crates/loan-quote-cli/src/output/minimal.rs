use serde_json::Value;

const PRIORITY_KEYS: [&str; 3] = ["monthly_repayment", "total_available", "rate"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", render_minimal(value));
}

/// Looks for well-known result fields in order of priority, then falls back
/// to the first field in the result object.
pub fn render_minimal(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    return format_minimal(val);
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }

    format_minimal(result_obj)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_envelope;
    use serde_json::json;

    #[test]
    fn test_quote_picks_monthly_repayment() {
        assert_eq!(render_minimal(&test_envelope()), "36.18");
    }

    #[test]
    fn test_listing_picks_total_available() {
        let value = json!({ "result": { "lenders": [], "lender_count": 0, "total_available": 0 } });
        assert_eq!(render_minimal(&value), "0");
    }

    #[test]
    fn test_falls_back_to_first_field() {
        let value = json!({ "result": { "amount": 1000 } });
        assert_eq!(render_minimal(&value), "amount: 1000");
    }

    #[test]
    fn test_bare_value() {
        assert_eq!(render_minimal(&json!("done")), "done");
    }
}
