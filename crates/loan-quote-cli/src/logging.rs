use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`;
/// `LOANQUOTE_LOG_JSON` switches to JSON lines.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "loan_quote_core=debug,loan_quote_cli=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if std::env::var("LOANQUOTE_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    }
}
