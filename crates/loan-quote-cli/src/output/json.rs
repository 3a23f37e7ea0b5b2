use serde_json::Value;

/// Pretty-print the full output envelope as JSON to stdout.
pub fn print_json(value: &Value) {
    match render_json(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Envelope as indented JSON; Decimal fields stay strings so no precision is lost.
pub fn render_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::output::test_envelope;

    #[test]
    fn test_render_json_round_trips_envelope() {
        let envelope = test_envelope();
        let text = render_json(&envelope).unwrap();
        assert!(text.contains("\n  \"result\": {"));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, envelope);
        assert_eq!(parsed["result"]["monthly_repayment"], "36.18");
    }
}
