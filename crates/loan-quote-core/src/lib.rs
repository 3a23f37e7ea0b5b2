pub mod error;
pub mod lender;
pub mod quote;
pub mod time_value;
pub mod types;

pub use error::{FieldCause, QuoteError};
pub use lender::{compare_lenders, Lender, LenderPool};
pub use quote::{compute_quote, price_quote, Quote, QuoteInput, QuotePolicy, QuoteRequest};
pub use types::*;

/// Standard result type for all loan-quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;
