//! The trucode step.
//!
//! Creates a trusonafication for a trucode the user already scanned, records
//! its id in the shared state and tells the client what to do next:
//!
//! - deep link present: save the trusonafication id, then redirect to the link
//! - no deep link: wait and poll
//! - service failure: take the error edge
//!
//! The step keeps no state between invocations. Re-entering it for the same
//! session creates a new trusonafication whose id replaces the previous one;
//! the superseded trusonafication is left to expire on the service side.

use trusona_core::config::TrusonaConfig;
use trusona_core::event::{Event, EventType};

use crate::authenticator::TrusonaAuthenticator;
use crate::diagnostics::Diagnostics;
use crate::directive::{save_trusonafication_script, DirectiveFactory};
use crate::outcome::{TransitionResult, TrusonaOutcome};
use crate::reference::{CredentialReference, DeepLinkPayload};
use crate::state::SharedState;

const CREATE_FAILED: &str = "Error when creating Trusonafication";

/// Step that starts a trusonafication and picks the next client directive.
#[derive(Debug, Clone)]
pub struct TrucodeStep<A, F, G> {
    authenticator: A,
    directives: F,
    diagnostics: G,
    poll_wait_millis: u64,
    trusonafication_key: String,
}

impl<A, F, G> TrucodeStep<A, F, G>
where
    A: TrusonaAuthenticator,
    F: DirectiveFactory,
    G: Diagnostics,
{
    /// Creates the step from its collaborators and process configuration.
    #[must_use]
    pub fn new(authenticator: A, directives: F, diagnostics: G, config: &TrusonaConfig) -> Self {
        Self {
            authenticator,
            directives,
            diagnostics,
            poll_wait_millis: config.poll_wait_millis,
            trusonafication_key: config.trusonafication_key.clone(),
        }
    }

    /// Outcome edges this step can take.
    #[must_use]
    pub const fn outcomes() -> [TrusonaOutcome; 3] {
        TrusonaOutcome::ALL
    }

    /// Shared-state key the trusonafication id is written under.
    #[must_use]
    pub fn trusonafication_key(&self) -> &str {
        &self.trusonafication_key
    }

    /// Runs one transition.
    ///
    /// `current_state` is left untouched; the result carries an amended
    /// copy. Exactly one trusonafication is requested per call and a failure
    /// is reported through the error outcome rather than returned.
    pub async fn advance(
        &self,
        current_state: &SharedState,
        credential: &CredentialReference,
        deep_link: Option<&str>,
    ) -> TransitionResult<F::Directive> {
        self.diagnostics.log_message("In TrucodeStep");
        let mut new_state = current_state.clone();

        let challenge = match self.authenticator.create_trusonafication(credential).await {
            Ok(challenge) => challenge,
            Err(e) => {
                self.diagnostics.log_error(CREATE_FAILED, &e);
                self.diagnostics.record_event(
                    &Event::builder(EventType::TrusonaficationError)
                        .failure(e.to_string())
                        .credential(credential.as_str())
                        .detail("authenticator", self.authenticator.id())
                        .build(),
                );
                return TransitionResult::error(new_state);
            }
        };

        new_state.insert(self.trusonafication_key.as_str(), challenge.as_str());

        let factory = &self.directives;
        let (outcome, directives) = match DeepLinkPayload::parse(deep_link) {
            Some(payload) => {
                let script = save_trusonafication_script(&challenge);
                (
                    TrusonaOutcome::ProceedWithRedirect,
                    vec![
                        factory.make_script_directive(&script),
                        factory.make_redirect_directive(payload.as_str()),
                    ],
                )
            }
            None => (
                TrusonaOutcome::ProceedWithPoll,
                vec![factory.make_polling_wait_directive(self.poll_wait_millis)],
            ),
        };

        self.diagnostics.record_event(
            &Event::builder(EventType::TrusonaficationCreated)
                .success()
                .credential(credential.as_str())
                .trusonafication(challenge.as_str())
                .detail("outcome", outcome.id())
                .build(),
        );

        TransitionResult::send(outcome, directives, new_state)
    }
}
