//! Resolver Configuration
//!
//! Settings are layered, lowest precedence first:
//! - built-in defaults
//! - a TOML config file (explicit path, or `config.toml` in the user config dir)
//! - the `FIND_SDK_DIR` environment variable
//! - command-line overrides applied by the caller

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use tracing::debug;

use crate::error::{FindSdkError, Result};

/// Directory the macOS SDKs are installed under
pub const DEFAULT_SDK_DIR: &str = "/Developer/SDKs";

/// Environment variable overriding the SDK directory
pub const SDK_DIR_ENV: &str = "FIND_SDK_DIR";

/// Configuration for the SDK resolver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Directory scanned for `MacOSX<version>.sdk` entries
    pub sdk_dir: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            sdk_dir: PathBuf::from(DEFAULT_SDK_DIR),
        }
    }
}

impl ResolverConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("org", "find-sdk", "find-sdk")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(FindSdkError::Config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }

        debug!("Loading config from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load the layered configuration.
    ///
    /// With `explicit` set, that file must exist and parse. Otherwise the
    /// default config file is read if present; a missing file means defaults
    /// and is never created.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::config_file() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_override(std::env::var_os(SDK_DIR_ENV));
        Ok(config)
    }

    /// Apply the value of `FIND_SDK_DIR`, ignoring it when empty
    pub fn apply_env_override(&mut self, value: Option<std::ffi::OsString>) {
        if let Some(dir) = value.filter(|v| !v.is_empty()) {
            debug!("{} overrides SDK directory: {:?}", SDK_DIR_ENV, dir);
            self.sdk_dir = PathBuf::from(dir);
        }
    }

    /// Override the SDK directory
    pub fn with_sdk_dir(mut self, sdk_dir: impl Into<PathBuf>) -> Self {
        self.sdk_dir = sdk_dir.into();
        self
    }
}
