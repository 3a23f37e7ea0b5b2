use loan_quote_core::lender::import::read_lenders;
use loan_quote_core::LenderPool;
use std::io;

/// Read a lender market CSV piped on stdin.
/// Returns None if stdin is a TTY (interactive).
pub fn read_stdin_market() -> Result<Option<LenderPool>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let pool = read_lenders(io::stdin().lock())?;
    Ok(Some(pool))
}
