use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::types::Amount;
use crate::QuoteResult;

pub const DEFAULT_MIN_AMOUNT: Amount = 1_000;
pub const DEFAULT_MAX_AMOUNT: Amount = 15_000;
pub const DEFAULT_AMOUNT_INCREMENT: Amount = 100;
pub const DEFAULT_TERM_MONTHS: u32 = 36;
pub const DEFAULT_COMPOUNDING_PERIODS: u32 = 12;

/// Business rules a quote request is checked against. Passed into the engine
/// explicitly so different lending products can coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotePolicy {
    /// Smallest loan offered (inclusive).
    pub min_amount: Amount,
    /// Largest loan offered (inclusive).
    pub max_amount: Amount,
    /// Requested amounts must be a whole multiple of this.
    pub amount_increment: Amount,
    /// Term used when the caller does not supply one.
    pub default_term_months: u32,
    /// Interest compounding periods per year; repayments fall on the same schedule.
    pub compounding_periods_per_year: u32,
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self {
            min_amount: DEFAULT_MIN_AMOUNT,
            max_amount: DEFAULT_MAX_AMOUNT,
            amount_increment: DEFAULT_AMOUNT_INCREMENT,
            default_term_months: DEFAULT_TERM_MONTHS,
            compounding_periods_per_year: DEFAULT_COMPOUNDING_PERIODS,
        }
    }
}

impl QuotePolicy {
    pub fn validate(&self) -> QuoteResult<()> {
        if self.min_amount == 0 {
            return Err(QuoteError::InvalidPolicy {
                field: "min_amount".into(),
                reason: "Minimum amount must be positive".into(),
            });
        }
        if self.min_amount > self.max_amount {
            return Err(QuoteError::InvalidPolicy {
                field: "min_amount".into(),
                reason: format!(
                    "Minimum amount {} exceeds maximum amount {}",
                    self.min_amount, self.max_amount
                ),
            });
        }
        if self.amount_increment == 0 {
            return Err(QuoteError::InvalidPolicy {
                field: "amount_increment".into(),
                reason: "Increment must be positive".into(),
            });
        }
        if self.default_term_months == 0 {
            return Err(QuoteError::InvalidPolicy {
                field: "default_term_months".into(),
                reason: "Default term must be at least one month".into(),
            });
        }
        if self.compounding_periods_per_year == 0 {
            return Err(QuoteError::InvalidPolicy {
                field: "compounding_periods_per_year".into(),
                reason: "Must compound at least once per year".into(),
            });
        }
        Ok(())
    }

    /// Check a requested amount and term before any allocation work.
    pub fn check_request(&self, amount: Amount, term_months: u32) -> QuoteResult<()> {
        self.validate()?;
        if amount < self.min_amount {
            return Err(QuoteError::AmountTooLow {
                amount,
                minimum: self.min_amount,
            });
        }
        if amount > self.max_amount {
            return Err(QuoteError::AmountTooHigh {
                amount,
                maximum: self.max_amount,
            });
        }
        if amount % self.amount_increment != 0 {
            return Err(QuoteError::AmountNotMultiple {
                amount,
                increment: self.amount_increment,
            });
        }
        if term_months == 0 {
            return Err(QuoteError::InvalidTerm {
                months: term_months,
            });
        }
        Ok(())
    }
}
