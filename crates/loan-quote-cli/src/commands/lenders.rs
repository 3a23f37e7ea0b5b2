use clap::Args;
use serde::Serialize;
use std::time::Instant;

use loan_quote_core::lender::RankedLender;
use loan_quote_core::quote::format::{round_for_display, CURRENCY_SYMBOL};
use loan_quote_core::{with_metadata, Amount};
use rust_decimal_macros::dec;

use super::quote::load_market;
use super::{CommandResult, Report};

/// Arguments for listing a lender market
#[derive(Args)]
pub struct LendersArgs {
    /// Lender market CSV (`-` reads it from stdin)
    pub market: String,
}

#[derive(Debug, Serialize)]
struct MarketListing {
    lenders: Vec<RankedLender>,
    lender_count: usize,
    total_available: Amount,
}

pub fn run_lenders(args: LendersArgs) -> CommandResult {
    let start = Instant::now();
    let pool = load_market(&args.market)?;

    let listing = MarketListing {
        lenders: pool.ranked_summary(),
        lender_count: pool.len(),
        total_available: pool.total_available(),
    };
    let text = render_listing(&listing);

    let output = with_metadata(
        "Lenders ranked by rate ascending, then available funds descending",
        &serde_json::json!({ "market": args.market }),
        Vec::new(),
        start.elapsed().as_micros() as u64,
        listing,
    );

    Ok(Report {
        value: serde_json::to_value(&output)?,
        text,
    })
}

fn render_listing(listing: &MarketListing) -> String {
    let mut lines: Vec<String> = listing
        .lenders
        .iter()
        .map(|l| {
            format!(
                "{:>3}. {:<16} {:>5.1}%  {CURRENCY_SYMBOL}{}",
                l.rank,
                l.name,
                round_for_display(l.rate * dec!(100), 1),
                l.available
            )
        })
        .collect();
    lines.push(format!(
        "Total available: {CURRENCY_SYMBOL}{} from {} lenders",
        listing.total_available, listing.lender_count
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_listing() {
        let listing = MarketListing {
            lenders: vec![
                RankedLender {
                    rank: 1,
                    name: "Jane".into(),
                    rate: dec!(0.069),
                    available: 480,
                },
                RankedLender {
                    rank: 2,
                    name: "Fred".into(),
                    rate: dec!(0.071),
                    available: 520,
                },
            ],
            lender_count: 2,
            total_available: 1000,
        };
        let text = render_listing(&listing);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("1. Jane"));
        assert!(lines[0].ends_with("6.9%  £480"));
        assert!(lines[1].ends_with("7.1%  £520"));
        assert_eq!(lines[2], "Total available: £1000 from 2 lenders");
    }
}
