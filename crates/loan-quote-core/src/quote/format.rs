use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::Quote;

pub const CURRENCY_SYMBOL: &str = "£";

/// Round for display only; calculations keep full precision.
pub fn round_for_display(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Requested amount: {CURRENCY_SYMBOL}{}",
            self.requested_amount()
        )?;
        writeln!(f, "Rate: {:.1}%", round_for_display(self.rate() * dec!(100), 1))?;
        writeln!(
            f,
            "Monthly repayment: {CURRENCY_SYMBOL}{:.2}",
            round_for_display(self.monthly_repayment(), 2)
        )?;
        write!(
            f,
            "Total repayment: {CURRENCY_SYMBOL}{:.2}",
            round_for_display(self.total_repayment(), 2)
        )
    }
}
