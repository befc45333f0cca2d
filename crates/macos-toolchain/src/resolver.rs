//! SDK Resolution
//!
//! Picks the lowest installed SDK at or above a minimum version, with an
//! optional cross-check against the exact version requested.

use std::path::PathBuf;

use find_sdk_core::{FindSdkError, ResolverConfig, Result};
use tracing::{debug, info};

use crate::detector::{SdkDetector, SdkEntry};
use crate::platform::Platform;
use crate::version::SdkVersion;

/// What the caller asked for
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    /// Lowest acceptable SDK version, e.g. "10.6"
    pub min_version: String,
    /// Report the request back, with a warning, when it is not installed exactly
    pub verify: bool,
    /// User-specified SDK path; when set the verify cross-check is skipped
    pub sdk_path: Option<PathBuf>,
}

impl ResolveRequest {
    pub fn new(min_version: impl Into<String>) -> Self {
        Self {
            min_version: min_version.into(),
            ..Default::default()
        }
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn sdk_path(mut self, sdk_path: impl Into<PathBuf>) -> Self {
        self.sdk_path = Some(sdk_path.into());
        self
    }

    /// An empty path counts as no override
    fn has_sdk_path_override(&self) -> bool {
        self.sdk_path
            .as_ref()
            .is_some_and(|p| !p.as_os_str().is_empty())
    }
}

/// How the reported version was arrived at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The lowest qualifying installed SDK
    Found,
    /// Verification failed; the request is reported instead of what was discovered
    VerifyMismatch { discovered: String },
    /// Not on macOS, nothing to discover
    UnsupportedPlatform,
}

/// Result of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The line to print
    pub version: String,
    pub outcome: ResolutionOutcome,
}

impl Resolution {
    /// Warning banner for stderr, if verification failed
    pub fn warning(&self) -> Option<String> {
        match self.outcome {
            ResolutionOutcome::VerifyMismatch { .. } => Some(verification_warning(&self.version)),
            _ => None,
        }
    }
}

/// The bracketed warning shown when the requested SDK is not installed
pub fn verification_warning(min_version: &str) -> String {
    let marker_pad = " ".repeat(43);
    format!(
        "\n{pad}vvvvvvv\n\n\
         This build requires the {min} SDK, but it was not found on your system.\n\
         Either install it, or explicitly set mac_sdk in your build configuration.\n\
         \n{pad}^^^^^^^\n\n",
        pad = marker_pad,
        min = min_version,
    )
}

/// Resolves the SDK to build against
pub struct SdkResolver {
    config: ResolverConfig,
    platform: Platform,
}

impl SdkResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            platform: Platform::current(),
        }
    }

    /// Resolve as if running on `platform`
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Lowest installed SDK at or above `min`.
    ///
    /// `Ok(None)` off macOS, without touching the filesystem.
    pub fn find_lowest(&self, min: &SdkVersion) -> Result<Option<SdkEntry>> {
        if !self.platform.is_macos() {
            debug!("Not on macOS ({}), skipping SDK discovery", self.platform);
            return Ok(None);
        }

        let detector = SdkDetector::new(&self.config.sdk_dir);
        let mut candidates: Vec<SdkEntry> = detector
            .scan()
            .into_iter()
            .filter(|sdk| sdk.version >= *min)
            .collect();

        if candidates.is_empty() {
            return Err(FindSdkError::no_sdk_found(min.as_str()));
        }

        candidates.sort_by(|a, b| a.version.cmp(&b.version));
        let best = candidates.swap_remove(0);
        info!("Selected macOS SDK {} at {:?}", best.version, best.path);
        Ok(Some(best))
    }

    /// Resolve the version to report for `request`
    pub fn resolve(&self, request: &ResolveRequest) -> Result<Resolution> {
        let min = SdkVersion::parse(&request.min_version);

        let (discovered, outcome) = match self.find_lowest(&min)? {
            Some(sdk) => (sdk.version.as_str().to_string(), ResolutionOutcome::Found),
            None => (String::new(), ResolutionOutcome::UnsupportedPlatform),
        };

        if request.verify
            && !request.has_sdk_path_override()
            && discovered != request.min_version
        {
            info!(
                "Requested SDK {} not installed (best match: {:?})",
                request.min_version, discovered
            );
            return Ok(Resolution {
                version: request.min_version.clone(),
                outcome: ResolutionOutcome::VerifyMismatch { discovered },
            });
        }

        Ok(Resolution {
            version: discovered,
            outcome,
        })
    }
}
