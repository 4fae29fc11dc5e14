//! Directives returned to the client.
//!
//! The step decides *which* directives to send; a [`DirectiveFactory`]
//! decides what they look like on the wire. Hosts with their own callback
//! types plug in a factory producing those; everyone else can use
//! [`StandardDirectiveFactory`].

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::reference::ChallengeReference;

/// Builds protocol-specific directives.
///
/// Construction performs no I/O and cannot fail.
pub trait DirectiveFactory: Send + Sync {
    /// The directive type understood by the host.
    type Directive: Debug + Clone + Send;

    /// A script the client executes.
    fn make_script_directive(&self, script: &str) -> Self::Directive;

    /// A redirect to `target`.
    fn make_redirect_directive(&self, target: &str) -> Self::Directive;

    /// An instruction to wait `interval_millis` before polling again.
    fn make_polling_wait_directive(&self, interval_millis: u64) -> Self::Directive;
}

/// Protocol-neutral directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    /// Execute a script on the client.
    Script {
        /// Script source.
        script: String,
    },
    /// Redirect the client.
    Redirect {
        /// Redirect target.
        target: String,
    },
    /// Wait before the next poll.
    PollingWait {
        /// Wait interval in milliseconds.
        interval_millis: u64,
    },
}

/// Factory producing [`Directive`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDirectiveFactory;

impl StandardDirectiveFactory {
    /// Creates the factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DirectiveFactory for StandardDirectiveFactory {
    type Directive = Directive;

    fn make_script_directive(&self, script: &str) -> Directive {
        Directive::Script {
            script: script.to_string(),
        }
    }

    fn make_redirect_directive(&self, target: &str) -> Directive {
        Directive::Redirect {
            target: target.to_string(),
        }
    }

    fn make_polling_wait_directive(&self, interval_millis: u64) -> Directive {
        Directive::PollingWait { interval_millis }
    }
}

/// Script that makes the companion page remember the trusonafication.
#[must_use]
pub fn save_trusonafication_script(challenge: &ChallengeReference) -> String {
    format!(
        "app.saveTrusonaficationCookie('{}');",
        escape_single_quoted(challenge.as_str())
    )
}

// Escapes for a single-quoted JS string literal that may sit inline in a
// <script> element.
fn escape_single_quoted(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    let mut previous = None;
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            '/' if previous == Some('<') => escaped.push_str("\\/"),
            _ => escaped.push(c),
        }
        previous = Some(c);
    }
    escaped
}
