use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use primer::cli::commands::handler_for;
use primer::cli::{Cli, LogLevel};
use primer::config::SourceResolver;

/// Initialize tracing from the --log-level flag
///
/// `RUST_LOG` directives, when set, take precedence over the flag.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    // Logs go to stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level);

    let resolver = SourceResolver::from_environment().with_explicit(cli.catalog);

    let handler = handler_for(cli.command);
    handler
        .execute(&resolver)
        .with_context(|| format!("{} failed", handler.name()))?;

    Ok(())
}
