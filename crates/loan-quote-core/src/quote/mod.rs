pub mod engine;
pub mod format;
pub mod policy;

use serde::{Deserialize, Serialize};

use crate::lender::LenderPool;
use crate::types::{Amount, Money, Rate};

pub use engine::{compute_quote, price_quote};
pub use policy::QuotePolicy;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub requested_amount: Amount,
    pub term_months: u32,
}

impl QuoteRequest {
    pub fn new(requested_amount: Amount, term_months: u32) -> Self {
        Self {
            requested_amount,
            term_months,
        }
    }

    /// Request using the policy's default term.
    pub fn with_default_term(requested_amount: Amount, policy: &QuotePolicy) -> Self {
        Self::new(requested_amount, policy.default_term_months)
    }
}

/// Self-contained pricing job: request, market and rules together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteInput {
    pub request: QuoteRequest,
    pub lenders: LenderPool,
    #[serde(default)]
    pub policy: QuotePolicy,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Funds drawn from a single lender and what they cost per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub lender: String,
    pub rate: Rate,
    pub drawn: Amount,
    pub monthly_repayment: Money,
}

/// A priced loan. Only the engine constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    requested_amount: Amount,
    term_months: u32,
    rate: Rate,
    monthly_repayment: Money,
    total_repayment: Money,
    allocations: Vec<Allocation>,
}

impl Quote {
    pub(crate) fn new(
        requested_amount: Amount,
        term_months: u32,
        rate: Rate,
        monthly_repayment: Money,
        total_repayment: Money,
        allocations: Vec<Allocation>,
    ) -> Self {
        Self {
            requested_amount,
            term_months,
            rate,
            monthly_repayment,
            total_repayment,
            allocations,
        }
    }

    pub fn requested_amount(&self) -> Amount {
        self.requested_amount
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Blended annual rate, weighted by the amount drawn from each lender.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn monthly_repayment(&self) -> Money {
        self.monthly_repayment
    }

    pub fn total_repayment(&self) -> Money {
        self.total_repayment
    }

    /// Lenders actually drawn from, in draw order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }
}
