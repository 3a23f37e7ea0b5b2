pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::commands::Report;
use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, report: &Report) {
    match format {
        OutputFormat::Text => println!("{}", report.text),
        OutputFormat::Json => json::print_json(&report.value),
        OutputFormat::Table => table::print_table(&report.value),
        OutputFormat::Csv => csv_out::print_csv(&report.value),
        OutputFormat::Minimal => minimal::print_minimal(&report.value),
    }
}

/// A two-lender quote envelope shaped like `price_quote` output.
#[cfg(test)]
pub(crate) fn test_envelope() -> serde_json::Value {
    serde_json::json!({
        "result": {
            "requested_amount": 1200,
            "term_months": 36,
            "rate": "0.054",
            "monthly_repayment": "36.18",
            "total_repayment": "1302.56",
            "allocations": [
                { "lender": "Jane", "rate": "0.051", "drawn": 1000, "monthly_repayment": "30.01" },
                { "lender": "Fred", "rate": "0.069", "drawn": 200, "monthly_repayment": "6.17" }
            ]
        },
        "methodology": "Greedy waterfall",
        "assumptions": { "min_amount": 1000 },
        "warnings": ["Loan is funded by 2 lenders"],
        "metadata": { "version": "0.1.0", "computation_time_us": 3, "precision": "rust_decimal_128bit" }
    })
}
