//! SDK version numbers
//!
//! A version is the sequence of digit runs found in its string form, so
//! "10.10.2" is `[10, 10, 2]` and compares numerically: 10.10 sorts above 10.9.

use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// A parsed SDK version.
///
/// Keeps the string it was parsed from so a selected SDK is reported exactly
/// as installed. Equality and ordering only look at the numeric components.
#[derive(Debug, Clone)]
pub struct SdkVersion {
    raw: String,
    components: Vec<u64>,
}

impl SdkVersion {
    /// Parse a version string such as "10.6" into `[10, 6]`.
    ///
    /// Every digit run counts, in order; everything else is a separator.
    /// Runs too large for `u64` saturate.
    pub fn parse(version: &str) -> Self {
        let components = DIGIT_RUN
            .find_iter(version)
            .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .collect();

        Self {
            raw: version.to_string(),
            components,
        }
    }

    /// Numeric components in order
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The string this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// `parse_version("10.6") == [10, 6]`
pub fn parse_version(version: &str) -> Vec<u64> {
    SdkVersion::parse(version).components
}

impl PartialEq for SdkVersion {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for SdkVersion {}

impl PartialOrd for SdkVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SdkVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
