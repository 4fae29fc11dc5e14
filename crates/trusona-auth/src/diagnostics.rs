//! Diagnostics sinks for the trucode step.
//!
//! Diagnostics are fire-and-forget: nothing here returns an error and the
//! step never branches on what a sink does.

use std::error::Error as StdError;
use std::sync::Arc;

use parking_lot::RwLock;
use trusona_core::event::Event;

/// Receives diagnostic output from a step.
pub trait Diagnostics: Send + Sync {
    /// Records an informational message.
    fn log_message(&self, message: &str);

    /// Records a failure together with its cause.
    fn log_error(&self, message: &str, cause: &dyn StdError);

    /// Records an audit event.
    fn record_event(&self, event: &Event) {
        self.log_message(&format!(
            "{:?} {:?} trusonafication={:?}",
            event.event_type, event.outcome, event.trusonafication_id
        ));
    }
}

impl<T> Diagnostics for Arc<T>
where
    T: Diagnostics + ?Sized,
{
    fn log_message(&self, message: &str) {
        (**self).log_message(message);
    }

    fn log_error(&self, message: &str, cause: &dyn StdError) {
        (**self).log_error(message, cause);
    }

    fn record_event(&self, event: &Event) {
        (**self).record_event(event);
    }
}

// ============================================================================
// Tracing Diagnostics
// ============================================================================

/// Diagnostics sink that writes to the tracing framework.
///
/// Messages go out at DEBUG, failures at ERROR and audit events as
/// structured INFO records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    /// Creates a new tracing sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Diagnostics for TracingDiagnostics {
    fn log_message(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn log_error(&self, message: &str, cause: &dyn StdError) {
        tracing::error!(error = %cause, "{}", message);
    }

    fn record_event(&self, event: &Event) {
        tracing::info!(
            event_id = %event.id,
            event_type = ?event.event_type,
            outcome = ?event.outcome,
            credential = ?event.credential,
            trusonafication_id = ?event.trusonafication_id,
            error = ?event.error,
            "trusona_event"
        );
    }
}

// ============================================================================
// In-Memory Diagnostics (for testing)
// ============================================================================

/// Diagnostics sink that keeps everything in memory.
#[derive(Debug, Default)]
pub struct InMemoryDiagnostics {
    messages: RwLock<Vec<String>>,
    errors: RwLock<Vec<(String, String)>>,
    events: RwLock<Vec<Event>>,
}

impl InMemoryDiagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().clone()
    }

    /// Returns all recorded failures as `(message, cause)` pairs.
    #[must_use]
    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.read().clone()
    }

    /// Returns all recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.read().clone()
    }

    /// Clears everything recorded so far.
    pub fn clear(&self) {
        self.messages.write().clear();
        self.errors.write().clear();
        self.events.write().clear();
    }
}

impl Diagnostics for InMemoryDiagnostics {
    fn log_message(&self, message: &str) {
        self.messages.write().push(message.to_string());
    }

    fn log_error(&self, message: &str, cause: &dyn StdError) {
        self.errors
            .write()
            .push((message.to_string(), cause.to_string()));
    }

    fn record_event(&self, event: &Event) {
        self.events.write().push(event.clone());
    }
}
