//! Shared library for the NYT API client workspace.
//!
//! This crate provides the ambient plumbing used by the client crate:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ApiConfig, Config, LoggingConfig, API_KEY_ENV};
pub use logging::LogConfig;

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
