mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::lenders::LendersArgs;
use commands::quote::QuoteArgs;

/// Loan quotes from a market of lenders
#[derive(Parser)]
#[command(
    name = "loanquote",
    version,
    about = "Loan quotes from a market of lenders",
    long_about = "Quotes a loan by drawing funds from the cheapest lenders in a CSV \
                  market first, then reports the blended rate together with the \
                  monthly and total repayment."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    output: OutputFormat,

    /// Path to a JSON quote policy (amount bounds, increment, default term)
    #[arg(long, global = true)]
    policy: Option<String>,

    /// Log allocation decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a loan against a lender market
    Quote(QuoteArgs),
    /// List a lender market in the order lenders are drawn on
    Lenders(LendersArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let policy = match input::file::read_policy(cli.policy.as_deref()) {
        Ok(policy) => policy,
        Err(e) => exit_with_error(e),
    };

    let result = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args, &policy),
        Commands::Lenders(args) => commands::lenders::run_lenders(args),
        Commands::Version => {
            println!("loanquote {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(report) => {
            output::format_output(&cli.output, &report);
            process::exit(0);
        }
        Err(e) => exit_with_error(e),
    }
}

fn exit_with_error(e: Box<dyn std::error::Error>) -> ! {
    eprintln!("{}: {}", "error".red().bold(), e);
    process::exit(1);
}
