use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::QuoteError;
use crate::types::{Money, Rate};
use crate::QuoteResult;

/// Convert a nominal annual rate into the rate applied per compounding period.
pub fn periodic_rate(annual_rate: Rate, periods_per_year: u32) -> QuoteResult<Rate> {
    if periods_per_year == 0 {
        return Err(QuoteError::InvalidPolicy {
            field: "compounding_periods_per_year".into(),
            reason: "Must compound at least once per year".into(),
        });
    }
    Ok(annual_rate / Decimal::from(periods_per_year))
}

/// Fixed payment per period that fully amortises `principal` over `periods`
/// at `rate` per period (Excel PMT with the sign flipped).
///
/// A zero rate has no compounding, so the principal is repaid straight-line.
pub fn annuity_payment(principal: Money, rate: Rate, periods: u32) -> QuoteResult<Money> {
    if periods == 0 {
        return Err(QuoteError::InvalidTerm { months: periods });
    }

    let n = Decimal::from(periods);
    if rate.is_zero() {
        return Ok(principal / n);
    }

    let factor = Decimal::ONE
        .checked_add(rate)
        .and_then(|base| base.checked_powu(u64::from(periods)))
        .ok_or_else(|| overflow(format!("compounding factor over {periods} periods")))?;
    let annuity_factor = factor - Decimal::ONE;

    // Rates below Decimal resolution leave the factor at exactly one.
    if annuity_factor.is_zero() {
        return Ok(principal / n);
    }

    rate.checked_mul(factor)
        .and_then(|scaled| scaled.checked_div(annuity_factor))
        .and_then(|coefficient| principal.checked_mul(coefficient))
        .ok_or_else(|| overflow("annuity payment".into()))
}

pub(crate) fn overflow(context: String) -> QuoteError {
    QuoteError::ArithmeticOverflow { context }
}
