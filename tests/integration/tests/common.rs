//! Common test utilities and fixtures.
//!
//! [`TestEnv`] wires a [`TrucodeStep`] to a fake trusonafication service and
//! an in-memory diagnostics sink so tests can drive the step and then look
//! at every side effect.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use trusona_auth::{
    AuthError, AuthResult, ChallengeReference, CredentialReference, InMemoryDiagnostics,
    StandardDirectiveFactory, TrucodeStep, TrusonaAuthenticator,
};
use trusona_core::TrusonaConfig;
use tracing_subscriber::EnvFilter;

/// How the fake service answers when nothing is queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMode {
    /// Create a trusonafication with a fresh random id.
    Available,
    /// Reject every request.
    Unavailable,
}

/// In-process stand-in for the trusonafication service.
#[derive(Debug)]
pub struct FakeTrusonaService {
    mode: Mutex<ServiceMode>,
    queued: Mutex<VecDeque<AuthResult<ChallengeReference>>>,
    requests: Mutex<Vec<CredentialReference>>,
    created: Mutex<Vec<ChallengeReference>>,
}

impl FakeTrusonaService {
    /// Creates a service answering in `mode`.
    #[must_use]
    pub fn new(mode: ServiceMode) -> Self {
        Self {
            mode: Mutex::new(mode),
            queued: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    /// Queues a fixed trusonafication id for the next request.
    pub fn queue_id(&self, id: &str) {
        self.queued.lock().push_back(Ok(ChallengeReference::new(id)));
    }

    /// Queues a failure for the next request.
    pub fn queue_failure(&self, message: &str) {
        self.queued.lock().push_back(Err(AuthError::service(message)));
    }

    /// Switches how unqueued requests are answered.
    pub fn set_mode(&self, mode: ServiceMode) {
        *self.mode.lock() = mode;
    }

    /// Credentials the step asked about, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<CredentialReference> {
        self.requests.lock().clone()
    }

    /// Trusonafications the service actually created, in order.
    #[must_use]
    pub fn created(&self) -> Vec<ChallengeReference> {
        self.created.lock().clone()
    }
}

#[async_trait]
impl TrusonaAuthenticator for FakeTrusonaService {
    fn id(&self) -> &'static str {
        "fake-trusona"
    }

    async fn create_trusonafication(
        &self,
        credential: &CredentialReference,
    ) -> AuthResult<ChallengeReference> {
        self.requests.lock().push(credential.clone());

        let queued = self.queued.lock().pop_front();
        let response = match queued {
            Some(response) => response,
            None => match *self.mode.lock() {
                ServiceMode::Available => Ok(ChallengeReference::generate()),
                ServiceMode::Unavailable => {
                    Err(AuthError::service("trusonafication service unavailable"))
                }
            },
        };

        if let Ok(challenge) = &response {
            self.created.lock().push(challenge.clone());
        }
        response
    }
}

/// Step type driven by the integration tests.
pub type TestStep =
    TrucodeStep<Arc<FakeTrusonaService>, StandardDirectiveFactory, Arc<InMemoryDiagnostics>>;

/// A step plus handles on its collaborators.
pub struct TestEnv {
    /// The step under test.
    pub step: TestStep,
    /// The fake service behind the step.
    pub service: Arc<FakeTrusonaService>,
    /// Everything the step logged.
    pub diagnostics: Arc<InMemoryDiagnostics>,
    /// Configuration the step was built with.
    pub config: TrusonaConfig,
}

impl TestEnv {
    /// Creates an environment with the testing configuration.
    #[must_use]
    pub fn new(mode: ServiceMode) -> Self {
        Self::with_config(mode, TrusonaConfig::for_testing())
    }

    /// Creates an environment with an explicit configuration.
    #[must_use]
    pub fn with_config(mode: ServiceMode, config: TrusonaConfig) -> Self {
        init_tracing(&config);

        let service = Arc::new(FakeTrusonaService::new(mode));
        let diagnostics = Arc::new(InMemoryDiagnostics::new());
        let step = TrucodeStep::new(
            service.clone(),
            StandardDirectiveFactory::new(),
            diagnostics.clone(),
            &config,
        );

        Self {
            step,
            service,
            diagnostics,
            config,
        }
    }
}

/// Installs a test subscriber filtered by `config.log_level`.
///
/// Only the first call installs anything; later calls are no-ops.
pub fn init_tracing(config: &TrusonaConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_test_writer()
        .try_init();
}
