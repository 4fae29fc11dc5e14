//! # trusona-auth
//!
//! The trucode step of a Trusona authentication tree.
//!
//! Given a trucode the user already bound to a device, the step creates a
//! trusonafication, stores its id in the shared state and picks the next
//! client interaction: a deep-link handoff to the Trusona app or a polling
//! wait until the trusonafication resolves.
//!
//! ## Features
//!
//! - Copy-on-write shared state; the caller's state is never mutated
//! - Pluggable authenticator, directive factory and diagnostics
//! - One trusonafication per invocation, no internal retry
//! - Audit events for every invocation
//!
//! ## Example
//!
//! ```ignore
//! use trusona_auth::{SharedState, StandardDirectiveFactory, TracingDiagnostics, TrucodeStep};
//! use trusona_core::TrusonaConfig;
//!
//! let config = TrusonaConfig::from_env()?;
//! let step = TrucodeStep::new(authenticator, StandardDirectiveFactory, TracingDiagnostics, &config);
//!
//! let result = step.advance(&state, &trucode_id.into(), deep_link.as_deref()).await;
//! match result.outcome() {
//!     TrusonaOutcome::ProceedWithRedirect => { /* send script + redirect */ }
//!     TrusonaOutcome::ProceedWithPoll => { /* send polling wait */ }
//!     TrusonaOutcome::Error => { /* route to the tree's error handling */ }
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod authenticator;
pub mod diagnostics;
pub mod directive;
pub mod error;
pub mod outcome;
pub mod reference;
pub mod state;
pub mod trucode;

pub use authenticator::TrusonaAuthenticator;
pub use diagnostics::{Diagnostics, InMemoryDiagnostics, TracingDiagnostics};
pub use directive::{
    save_trusonafication_script, Directive, DirectiveFactory, StandardDirectiveFactory,
};
pub use error::{AuthError, AuthResult};
pub use outcome::{TransitionResult, TrusonaOutcome};
pub use reference::{ChallengeReference, CredentialReference, DeepLinkPayload};
pub use state::SharedState;
pub use trucode::TrucodeStep;
