//! Authenticator trait for the trusonafication service.
//!
//! The authenticator owns the wire protocol. The trucode step only asks it
//! to create one trusonafication per invocation and never retries.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AuthResult;
use crate::reference::{ChallengeReference, CredentialReference};

/// Creates trusonafications against the verification service.
#[async_trait]
pub trait TrusonaAuthenticator: Send + Sync {
    /// Returns the authenticator ID.
    fn id(&self) -> &'static str;

    /// Creates a trusonafication targeting `credential`.
    ///
    /// At most one trusonafication is created per call.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthenticationService`](crate::AuthError::AuthenticationService)
    /// if the service is unreachable or rejects the request.
    async fn create_trusonafication(
        &self,
        credential: &CredentialReference,
    ) -> AuthResult<ChallengeReference>;
}

#[async_trait]
impl<T> TrusonaAuthenticator for Arc<T>
where
    T: TrusonaAuthenticator + ?Sized,
{
    fn id(&self) -> &'static str {
        (**self).id()
    }

    async fn create_trusonafication(
        &self,
        credential: &CredentialReference,
    ) -> AuthResult<ChallengeReference> {
        (**self).create_trusonafication(credential).await
    }
}
