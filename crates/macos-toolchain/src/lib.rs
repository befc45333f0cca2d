//! macOS SDK Discovery
//!
//! Handles locating installed macOS SDKs:
//! - Version parsing and numeric ordering
//! - Host platform detection
//! - SDK directory scanning
//! - Minimum-version resolution and verification

pub mod detector;
pub mod platform;
pub mod resolver;
pub mod version;

pub use detector::{SdkDetector, SdkEntry};
pub use platform::Platform;
pub use resolver::{
    verification_warning, Resolution, ResolutionOutcome, ResolveRequest, SdkResolver,
};
pub use version::{parse_version, SdkVersion};
