use clap::Args;
use tracing::debug;

use loan_quote_core::{price_quote, LenderPool, QuoteInput, QuotePolicy, QuoteRequest};

use super::{CommandResult, Report};
use crate::input;

/// Arguments for quoting a loan
#[derive(Args)]
pub struct QuoteArgs {
    /// Path to JSON input file with request, lenders and policy (overrides positional arguments)
    #[arg(long)]
    pub input: Option<String>,

    /// Lender market CSV (`-` reads it from stdin)
    pub market: Option<String>,

    /// Amount to borrow, in whole pounds
    pub amount: Option<u64>,

    /// Loan term in months (defaults to the policy's term)
    #[arg(long)]
    pub term: Option<u32>,
}

pub fn run_quote(args: QuoteArgs, policy: &QuotePolicy) -> CommandResult {
    let quote_input: QuoteInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else {
        let market = args
            .market
            .as_deref()
            .ok_or("MARKET is required (or provide --input)")?;
        let amount = args
            .amount
            .ok_or("AMOUNT is required (or provide --input)")?;

        QuoteInput {
            request: QuoteRequest::new(
                amount,
                args.term.unwrap_or(policy.default_term_months),
            ),
            lenders: load_market(market)?,
            policy: policy.clone(),
        }
    };

    debug!(
        amount = quote_input.request.requested_amount,
        term = quote_input.request.term_months,
        lenders = quote_input.lenders.len(),
        "pricing quote"
    );

    let output = price_quote(&quote_input)?;
    let text = output.result.to_string();
    Ok(Report {
        value: serde_json::to_value(&output)?,
        text,
    })
}

pub(crate) fn load_market(market: &str) -> Result<LenderPool, Box<dyn std::error::Error>> {
    if market == "-" {
        return input::stdin::read_stdin_market()?
            .ok_or_else(|| "No lender market piped on stdin".into());
    }
    input::file::read_market(market)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("loanquote-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    fn args(input: Option<String>, market: Option<String>, amount: Option<u64>) -> QuoteArgs {
        QuoteArgs {
            input,
            market,
            amount,
            term: None,
        }
    }

    const EXPECTED: &str = "Requested amount: £1200\n\
                            Rate: 5.4%\n\
                            Monthly repayment: £36.18\n\
                            Total repayment: £1302.56";

    #[test]
    fn test_json_input_file() {
        let path = write_temp(
            "input.json",
            r#"{
                "request": { "requested_amount": 1200, "term_months": 36 },
                "lenders": [
                    { "name": "a", "rate": "0.051", "available": 1000 },
                    { "name": "b", "rate": "0.069", "available": 200 }
                ]
            }"#,
        );
        let report = run_quote(
            args(Some(path.display().to_string()), None, None),
            &QuotePolicy::default(),
        )
        .unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(report.text, EXPECTED);
        assert_eq!(report.value["result"]["requested_amount"], 1200);
        assert_eq!(report.value["assumptions"]["min_amount"], 1000);
    }

    #[test]
    fn test_market_csv_and_amount() {
        let path = write_temp("market.csv", "Lender,Rate,Available\na,0.051,1000\nb,0.069,200\n");
        let report = run_quote(
            args(None, Some(path.display().to_string()), Some(1200)),
            &QuotePolicy::default(),
        )
        .unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(report.text, EXPECTED);
    }

    #[test]
    fn test_missing_market_is_reported() {
        let err = run_quote(args(None, None, Some(1200)), &QuotePolicy::default())
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "MARKET is required (or provide --input)");
    }
}
