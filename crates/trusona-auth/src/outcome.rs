//! Outcomes of the trucode step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::directive::Directive;
use crate::state::SharedState;

/// The edge taken out of the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrusonaOutcome {
    /// Hand off to the companion app through a deep link.
    ProceedWithRedirect,
    /// Keep the client polling until the trusonafication resolves.
    ProceedWithPoll,
    /// The trusonafication could not be created.
    Error,
}

impl TrusonaOutcome {
    /// Every outcome, in the order hosts should wire them.
    pub const ALL: [Self; 3] = [Self::ProceedWithRedirect, Self::ProceedWithPoll, Self::Error];

    /// Returns the outcome label.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::ProceedWithRedirect => "proceed-with-redirect",
            Self::ProceedWithPoll => "proceed-with-poll",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for TrusonaOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What the step hands back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionResult<D = Directive> {
    outcome: TrusonaOutcome,
    directives: Vec<D>,
    shared_state: SharedState,
}

impl<D> TransitionResult<D> {
    /// Creates a result that sends `directives` along `outcome`.
    #[must_use]
    pub fn send(outcome: TrusonaOutcome, directives: Vec<D>, shared_state: SharedState) -> Self {
        Self {
            outcome,
            directives,
            shared_state,
        }
    }

    /// Creates an error result carrying no directives.
    #[must_use]
    pub fn error(shared_state: SharedState) -> Self {
        Self {
            outcome: TrusonaOutcome::Error,
            directives: Vec::new(),
            shared_state,
        }
    }

    /// The outcome taken.
    #[must_use]
    pub const fn outcome(&self) -> TrusonaOutcome {
        self.outcome
    }

    /// The directives, in send order.
    #[must_use]
    pub fn directives(&self) -> &[D] {
        &self.directives
    }

    /// The amended shared state.
    #[must_use]
    pub const fn shared_state(&self) -> &SharedState {
        &self.shared_state
    }

    /// Checks whether the step failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.outcome == TrusonaOutcome::Error
    }

    /// Splits the result into its parts.
    #[must_use]
    pub fn into_parts(self) -> (TrusonaOutcome, Vec<D>, SharedState) {
        (self.outcome, self.directives, self.shared_state)
    }
}
