pub mod lenders;
pub mod quote;

use serde_json::Value;

/// What a command produced: structured data for the machine formats and a
/// plain-text rendering for `--output text`.
pub struct Report {
    pub value: Value,
    pub text: String,
}

pub type CommandResult = Result<Report, Box<dyn std::error::Error>>;
