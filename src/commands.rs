//! CLI commands for find-sdk
//!
//! Argument parsing and the single resolve command the binary runs.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use find_sdk_core::ResolverConfig;
use find_sdk_macos_toolchain::{Resolution, ResolveRequest, SdkResolver};

/// Prints the lowest locally available macOS SDK version greater than or
/// equal to the given minimum.
#[derive(Debug, Parser)]
#[command(name = "find-sdk", version, about)]
pub struct FindCommand {
    /// Minimum SDK version, e.g. 10.6. SDKs below it are ignored.
    #[arg(value_name = "MIN_SDK_VERSION")]
    pub min_sdk_version: String,

    /// Return the sdk argument and warn if it doesn't exist
    #[arg(long)]
    pub verify: bool,

    /// User-specified SDK path; bypasses verification
    #[arg(long = "sdk_path", value_name = "PATH", default_value = "")]
    pub sdk_path: String,

    /// Directory to scan for MacOSX<version>.sdk entries
    #[arg(long, value_name = "DIR")]
    pub sdk_dir: Option<PathBuf>,

    /// Configuration file (defaults to config.toml in the user config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FindCommand {
    /// Build the resolver configuration, command-line overrides last
    pub fn resolver_config(&self) -> Result<ResolverConfig> {
        let mut config = ResolverConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.sdk_dir {
            config = config.with_sdk_dir(dir);
        }
        debug!("Resolver config: {:?}", config);
        Ok(config)
    }

    pub fn request(&self) -> ResolveRequest {
        ResolveRequest::new(&self.min_sdk_version)
            .verify(self.verify)
            .sdk_path(&self.sdk_path)
    }

    /// Execute the resolve command
    pub fn execute(&self) -> Result<Resolution> {
        let resolver = SdkResolver::new(self.resolver_config()?);
        Ok(resolver.resolve(&self.request())?)
    }
}
