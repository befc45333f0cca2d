//! find-sdk
//!
//! Prints the lowest locally available macOS SDK version greater than or
//! equal to a given minimum:
//!
//! ```text
//! find-sdk 10.6  # Ignores SDKs < 10.6
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use find_sdk::commands::FindCommand;
use find_sdk_core::{FindSdkError, APP_NAME, VERSION};

fn main() -> Result<()> {
    let command = FindCommand::parse();
    init_logging(command.verbose)?;

    let resolution = command.execute().map_err(|e| match e.downcast::<FindSdkError>() {
        Ok(err) => anyhow!(err.user_message()),
        Err(e) => e,
    })?;
    if let Some(warning) = resolution.warning() {
        eprint!("{}", warning);
    }
    println!("{}", resolution.version);

    Ok(())
}

/// Logs go to stderr; stdout carries only the result line
fn init_logging(verbose: u8) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    debug!("{} v{} starting", APP_NAME, VERSION);
    Ok(())
}
