//! Authentication error types.

use std::fmt;

/// Errors raised while talking to the trusonafication service.
///
/// The trucode step never propagates these; any of them turns the step
/// into its error outcome.
#[derive(Debug)]
pub enum AuthError {
    /// The trusonafication service failed or rejected the request.
    AuthenticationService(String),
    /// The credential reference is unknown to the service.
    InvalidCredential,
    /// Shared state could not be built from the supplied value.
    InvalidState(String),
    /// Internal error.
    Internal(String),
}

impl AuthError {
    /// Creates a service error.
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::AuthenticationService(message.into())
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthenticationService(msg) => {
                write!(f, "trusonafication service error: {msg}")
            }
            Self::InvalidCredential => write!(f, "invalid credential reference"),
            Self::InvalidState(msg) => write!(f, "invalid shared state: {msg}"),
            Self::Internal(msg) => write!(f, "internal authentication error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
