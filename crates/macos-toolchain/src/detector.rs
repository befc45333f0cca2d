//! SDK Detection
//!
//! Lists the SDK directory and keeps the entries named `MacOSX<version>.sdk`.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::version::SdkVersion;

/// `MacOSX10.6.sdk` => `10.6`
static SDK_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^MacOSX(\d+\..+)\.sdk$").unwrap());

/// An installed SDK found in the SDK directory
#[derive(Debug, Clone)]
pub struct SdkEntry {
    pub name: String,
    pub path: PathBuf,
    pub version: SdkVersion,
}

impl SdkEntry {
    /// Match a directory entry name, returning `None` for anything that is not an SDK
    pub fn from_dir_name(name: &str, sdk_dir: &Path) -> Option<Self> {
        let caps = SDK_NAME.captures(name)?;
        let version = SdkVersion::parse(caps.get(1)?.as_str());

        Some(Self {
            name: name.to_string(),
            path: sdk_dir.join(name),
            version,
        })
    }
}

/// Scans one SDK directory
pub struct SdkDetector {
    sdk_dir: PathBuf,
}

impl SdkDetector {
    pub fn new(sdk_dir: impl Into<PathBuf>) -> Self {
        Self {
            sdk_dir: sdk_dir.into(),
        }
    }

    /// List installed SDKs, sorted by entry name.
    ///
    /// An unreadable directory yields no SDKs, and entries that do not match
    /// the naming pattern are skipped.
    pub fn scan(&self) -> Vec<SdkEntry> {
        let entries = match std::fs::read_dir(&self.sdk_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot read SDK directory {:?}: {}", self.sdk_dir, e);
                return Vec::new();
            }
        };

        let mut sdks: Vec<SdkEntry> = entries
            .flatten()
            .filter_map(|entry| {
                let file_name = entry.file_name();
                let name = file_name.to_str()?;
                match SdkEntry::from_dir_name(name, &self.sdk_dir) {
                    Some(sdk) => {
                        debug!("Found SDK {} at {:?}", sdk.version, sdk.path);
                        Some(sdk)
                    }
                    None => {
                        debug!("Skipping {:?}", name);
                        None
                    }
                }
            })
            .collect();

        sdks.sort_by(|a, b| a.name.cmp(&b.name));
        sdks
    }
}
