use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Loan amount of £{amount} is too low. Minimum loan amount is £{minimum}")]
    AmountTooLow { amount: u64, minimum: u64 },

    #[error("Loan amount of £{amount} is too high. Maximum loan amount is £{maximum}")]
    AmountTooHigh { amount: u64, maximum: u64 },

    #[error("Loan amount of £{amount} is not a multiple of £{increment}")]
    AmountNotMultiple { amount: u64, increment: u64 },

    #[error("Loan term must be at least one month (got {months})")]
    InvalidTerm { months: u32 },

    #[error("It is not possible to provide a quote at this time: £{requested} requested but only £{available} available")]
    InsufficientFunds { requested: u64, available: u64 },

    #[error("Invalid {field} field on line {line}: {cause}")]
    FieldParse {
        line: u64,
        field: &'static str,
        #[source]
        cause: FieldCause,
    },

    #[error("Wrong number of fields on line {line}: expected {expected}, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid policy: {field} — {reason}")]
    InvalidPolicy { field: String, reason: String },

    #[error("Arithmetic overflow in {context}")]
    ArithmeticOverflow { context: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Why a single CSV field could not be turned into a lender attribute.
#[derive(Debug, Error)]
pub enum FieldCause {
    #[error(transparent)]
    Integer(#[from] ParseIntError),

    #[error(transparent)]
    Decimal(#[from] rust_decimal::Error),

    #[error("value must not be negative")]
    Negative,

    #[error("value must not be empty")]
    Empty,
}

impl QuoteError {
    /// Request rejected before any allocation work was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuoteError::AmountTooLow { .. }
                | QuoteError::AmountTooHigh { .. }
                | QuoteError::AmountNotMultiple { .. }
                | QuoteError::InvalidTerm { .. }
        )
    }

    /// Malformed lender source or configuration.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            QuoteError::FieldParse { .. }
                | QuoteError::FieldCount { .. }
                | QuoteError::Csv(_)
                | QuoteError::InvalidPolicy { .. }
                | QuoteError::Serialization(_)
        )
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(e: serde_json::Error) -> Self {
        QuoteError::Serialization(e.to_string())
    }
}
