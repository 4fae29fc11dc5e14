//! Error handling for the Trusona crates.
//!
//! Only setup-time failures live here. Failures of the trusonafication
//! service itself are step-level outcomes, not errors.

use thiserror::Error;

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for setup-time failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The `.env` file exists but could not be read.
    #[error("environment file error: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

impl Error {
    /// Returns whether this error was caused by the operator's configuration.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
