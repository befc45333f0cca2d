//! find-sdk Core - Configuration and shared types
//!
//! This crate provides the error type and layered configuration shared by
//! the SDK resolver and the command-line front end.

pub mod config;
pub mod error;

pub use config::ResolverConfig;
pub use error::{FindSdkError, Result};

/// find-sdk version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "find-sdk";
