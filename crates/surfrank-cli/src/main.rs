//! Surfrank CLI
//!
//! Rank the pages of an HTML corpus by sampling and by iteration.

use clap::Parser;
use std::process::ExitCode;
use surfrank_core::error::exit_codes;
use surfrank_core::SurfRankError;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref(), default_level))
        .init();

    match commands::pagerank::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<SurfRankError>()
                .map(|e| e.exit_code())
                .unwrap_or(exit_codes::GENERAL_ERROR);
            ExitCode::from(code as u8)
        }
    }
}

/// `RUST_LOG` directives when given, otherwise `default_level` for everything
fn log_filter(rust_log: Option<&str>, default_level: tracing::Level) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(default_level.into()))
}
