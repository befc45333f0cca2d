//! find-sdk
//!
//! Locates the lowest installed macOS SDK that satisfies a minimum version,
//! for build configuration systems that need a concrete SDK to compile against.
//!
//! ## Architecture
//!
//! - `find-sdk-core`: error type and layered configuration
//! - `find-sdk-macos-toolchain`: version parsing, SDK scanning, resolution
//! - `find-sdk` (this crate): command-line front end

#![warn(clippy::all)]

pub mod commands;

// Re-export main components for library usage
pub use find_sdk_core;
pub use find_sdk_macos_toolchain as toolchain;

/// Prelude module for convenient imports
pub mod prelude {
    pub use find_sdk_core::{FindSdkError, ResolverConfig};
    pub use find_sdk_macos_toolchain::{
        Platform, Resolution, ResolutionOutcome, ResolveRequest, SdkResolver, SdkVersion,
    };
}
