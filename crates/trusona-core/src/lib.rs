//! # trusona-core
//!
//! Configuration, error handling and audit events shared by the Trusona
//! authentication crates.
//!
//! The step crates treat everything here as process-wide: configuration is
//! loaded once at startup and handed to each step by value.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod event;

pub use config::{TrusonaConfig, DEFAULT_POLL_WAIT_MILLIS, TRUSONAFICATION_ID};
pub use error::{Error, Result};
pub use event::{Event, EventBuilder, EventOutcome, EventType};
