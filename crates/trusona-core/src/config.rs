//! Process-wide configuration for the trucode step.
//!
//! Configuration is loaded from environment variables with sensible defaults.
//! Nothing here is overridable per session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shared-state key under which the trusonafication id is stored.
pub const TRUSONAFICATION_ID: &str = "trusonafication_id";

/// Default polling wait interval handed to the client, in milliseconds.
pub const DEFAULT_POLL_WAIT_MILLIS: u64 = 5000;

/// Configuration consumed by the trucode step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrusonaConfig {
    /// Interval the client waits between polls, in milliseconds.
    pub poll_wait_millis: u64,

    /// Shared-state key for the trusonafication id.
    pub trusonafication_key: String,

    /// Log level filter handed to the subscriber by the host.
    pub log_level: String,
}

impl TrusonaConfig {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file is read first if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EnvFile`] if a `.env` file exists but is malformed
    /// and [`Error::Config`] if a variable is set but invalid.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the poll interval does not parse to a
    /// positive integer or the key is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let poll_wait_millis = match lookup("TRUSONA_POLL_WAIT_MILLIS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("TRUSONA_POLL_WAIT_MILLIS is not a number: {e}"))
            })?,
            None => DEFAULT_POLL_WAIT_MILLIS,
        };

        let trusonafication_key = lookup("TRUSONA_TRUSONAFICATION_KEY")
            .unwrap_or_else(|| TRUSONAFICATION_ID.to_string());

        let log_level = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let config = Self {
            poll_wait_millis,
            trusonafication_key,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            poll_wait_millis: 1000,
            trusonafication_key: TRUSONAFICATION_ID.to_string(),
            log_level: "trusona_auth=debug".to_string(),
        }
    }

    /// Checks the configuration for values the step cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.poll_wait_millis == 0 {
            return Err(Error::Config(
                "TRUSONA_POLL_WAIT_MILLIS must be positive".to_string(),
            ));
        }
        if self.trusonafication_key.trim().is_empty() {
            return Err(Error::Config(
                "TRUSONA_TRUSONAFICATION_KEY must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the polling wait interval.
    #[must_use]
    pub const fn poll_wait(&self) -> Duration {
        Duration::from_millis(self.poll_wait_millis)
    }
}

impl Default for TrusonaConfig {
    fn default() -> Self {
        Self {
            poll_wait_millis: DEFAULT_POLL_WAIT_MILLIS,
            trusonafication_key: TRUSONAFICATION_ID.to_string(),
            log_level: "info".to_string(),
        }
    }
}
