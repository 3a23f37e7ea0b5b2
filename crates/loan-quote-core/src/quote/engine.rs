use rust_decimal::Decimal;
use std::time::Instant;
use tracing::{debug, info};

use super::{Allocation, Quote, QuoteInput, QuotePolicy, QuoteRequest};
use crate::error::QuoteError;
use crate::lender::LenderPool;
use crate::time_value::{annuity_payment, overflow, periodic_rate};
use crate::types::{with_metadata, ComputationOutput};
use crate::QuoteResult;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Price a loan by drawing on the cheapest lenders first.
///
/// Each lender's share is amortised separately at that lender's rate and the
/// monthly payments are summed; the blended rate is the draw-weighted average
/// of the rates used. The pool itself is never modified.
pub fn compute_quote(
    request: &QuoteRequest,
    pool: &LenderPool,
    policy: &QuotePolicy,
) -> QuoteResult<Quote> {
    policy.check_request(request.requested_amount, request.term_months)?;

    let term = request.term_months;
    let mut remaining = request.requested_amount;
    let mut monthly_total = Decimal::ZERO;
    let mut weighted_rate_sum = Decimal::ZERO;
    let mut allocations = Vec::new();

    for lender in pool.ranked() {
        let drawn = lender.borrow(remaining);
        if drawn == 0 {
            continue;
        }

        let principal = Decimal::from(drawn);
        let monthly_rate = periodic_rate(lender.rate, policy.compounding_periods_per_year)?;
        let repayment = annuity_payment(principal, monthly_rate, term)?;

        debug!(
            lender = %lender.name,
            rate = %lender.rate,
            drawn,
            repayment = %repayment,
            "drew from lender"
        );

        monthly_total = monthly_total
            .checked_add(repayment)
            .ok_or_else(|| overflow("monthly repayment total".into()))?;
        weighted_rate_sum = principal
            .checked_mul(lender.rate)
            .and_then(|weighted| weighted_rate_sum.checked_add(weighted))
            .ok_or_else(|| overflow("draw-weighted rate".into()))?;
        remaining -= drawn;
        allocations.push(Allocation {
            lender: lender.name.clone(),
            rate: lender.rate,
            drawn,
            monthly_repayment: repayment,
        });

        if remaining == 0 {
            break;
        }
    }

    if remaining > 0 {
        return Err(QuoteError::InsufficientFunds {
            requested: request.requested_amount,
            available: pool.total_available(),
        });
    }

    let blended_rate = weighted_rate_sum
        .checked_div(Decimal::from(request.requested_amount))
        .ok_or_else(|| overflow("blended rate".into()))?;
    let total_repayment = monthly_total
        .checked_mul(Decimal::from(term))
        .ok_or_else(|| overflow("total repayment".into()))?;

    info!(
        amount = request.requested_amount,
        term,
        lenders = allocations.len(),
        rate = %blended_rate,
        "quote priced"
    );

    Ok(Quote::new(
        request.requested_amount,
        term,
        blended_rate,
        monthly_total,
        total_repayment,
        allocations,
    ))
}

/// Run [`compute_quote`] and wrap the result in the standard output envelope.
pub fn price_quote(input: &QuoteInput) -> QuoteResult<ComputationOutput<Quote>> {
    let start = Instant::now();

    let quote = compute_quote(&input.request, &input.lenders, &input.policy)?;
    let warnings = collect_warnings(&quote);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Greedy waterfall allocation across lenders ranked by rate (ties: larger \
         capacity first); per-lender annuity repayments summed",
        &input.policy,
        warnings,
        elapsed,
        quote,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn collect_warnings(quote: &Quote) -> Vec<String> {
    let mut warnings: Vec<String> = quote
        .allocations()
        .iter()
        .filter(|a| a.rate.is_zero())
        .map(|a| {
            format!(
                "{} lends at 0%; £{} repaid straight-line over {} months",
                a.lender,
                a.drawn,
                quote.term_months()
            )
        })
        .collect();

    if quote.allocations().len() > 1 {
        warnings.push(format!(
            "Loan is funded by {} lenders",
            quote.allocations().len()
        ));
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
