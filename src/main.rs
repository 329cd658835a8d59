//! Calcshell command-line entry point.
//!
//! ```bash
//! # Default session: 50 history entries, 6 significant digits
//! calcshell
//!
//! # Keep the latest 200 calculations, show 10 digits, no banners
//! calcshell --capacity 200 --evict-oldest --precision 10 --quiet
//!
//! # Trace every computation on stderr
//! calcshell --log-level debug
//! ```

use std::io;
use std::process::ExitCode;

use calcshell::core::OverflowPolicy;
use calcshell::{ConfigBuilder, Console};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Interactive menu-driven calculator
#[derive(Parser, Debug)]
#[command(name = "calcshell")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum number of calculations kept in the session history
    #[arg(long, default_value_t = calcshell::core::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Once the history is full, evict the oldest entry instead of
    /// discarding new calculations
    #[arg(long)]
    evict_oldest: bool,

    /// Significant digits used when displaying values
    #[arg(long, default_value_t = calcshell::config::DEFAULT_PRECISION)]
    precision: usize,

    /// Suppress the welcome banner and goodbye message
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let policy = if cli.evict_oldest {
        OverflowPolicy::EvictOldest
    } else {
        OverflowPolicy::DropNewest
    };

    let config = match ConfigBuilder::new()
        .history_capacity(cli.capacity)
        .overflow_policy(policy)
        .precision(cli.precision)
        .quiet(cli.quiet)
        .build()
    {
        Ok(config) => config,
        Err(errors) => {
            eprintln!("{errors}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Console::new(stdin.lock(), stdout.lock(), config).and_then(|mut console| {
        console.run()
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "calculator stopped");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
