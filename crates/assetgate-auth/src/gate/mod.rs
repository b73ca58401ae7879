//! The per-request authentication gate.
//!
//! Evaluation walks a fixed sequence and stops at the first failure:
//!
//! 1. extract the bearer credential
//! 2. verify it (signature, expiry, credential kind)
//! 3. check the route's role requirement
//! 4. look the session up in the revocation store (bounded by a timeout)
//! 5. produce the identity header mutation
//!
//! The gate never touches the request itself. It returns either an
//! [`Admission`] carrying the header edits for the boundary layer to apply,
//! or a single [`Rejection`].

pub mod credential;
pub mod headers;
pub mod rejection;

use std::sync::Arc;
use std::time::Duration;

use http::HeaderMap;
use tracing::{debug, warn};

use assetgate_core::config::GateConfig;
use assetgate_core::error::AppError;

use crate::jwt::TokenKind;
use crate::rbac::RoleRequirement;
use crate::revocation::{RevocationError, RevocationKey, RevocationStore};
use crate::verifier::CredentialVerifier;

pub use headers::{HeaderMutation, Identity, IdentityHeaders};
pub use rejection::Rejection;

/// Result of an accepted evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    /// Who the request is from.
    pub identity: Identity,
    /// Header edits to apply before forwarding the request.
    pub mutation: HeaderMutation,
}

/// Verifies, authorizes, and revocation-checks inbound requests.
///
/// Holds no mutable state; share one instance across all requests.
#[derive(Debug, Clone)]
pub struct AuthGate {
    /// Credential verifier.
    verifier: Arc<dyn CredentialVerifier>,
    /// Revocation list.
    store: Arc<dyn RevocationStore>,
    /// Identity header names.
    headers: IdentityHeaders,
    /// Credential kind this gate accepts; selects the revocation namespace.
    kind: TokenKind,
    /// Bound on a single revocation lookup.
    revocation_timeout: Duration,
}

impl AuthGate {
    /// Creates an access-credential gate from configuration.
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        store: Arc<dyn RevocationStore>,
        config: &GateConfig,
    ) -> Result<Self, AppError> {
        Ok(Self {
            verifier,
            store,
            headers: IdentityHeaders::from_config(&config.headers)?,
            kind: TokenKind::Access,
            revocation_timeout: Duration::from_millis(config.revocation_timeout_ms),
        })
    }

    /// Switches the credential kind (and revocation namespace) this gate checks.
    pub fn for_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Identity header names this gate writes.
    pub fn identity_headers(&self) -> &IdentityHeaders {
        &self.headers
    }

    /// Credential kind this gate accepts.
    pub fn token_kind(&self) -> TokenKind {
        self.kind
    }

    /// The revocation store this gate reads.
    pub fn store(&self) -> &Arc<dyn RevocationStore> {
        &self.store
    }

    /// Evaluates one request against `required`.
    pub async fn evaluate(
        &self,
        headers: &HeaderMap,
        required: &RoleRequirement,
    ) -> Result<Admission, Rejection> {
        let credential = credential::extract_bearer(headers).inspect_err(|rejection| {
            debug!(stage = "extract", reason = rejection.code(), "Request rejected");
        })?;

        let claims = self.verifier.verify(credential).map_err(|e| {
            debug!(stage = "verify", error = %e, "Request rejected");
            Rejection::InvalidCredential
        })?;

        if claims.kind != self.kind {
            debug!(
                stage = "verify",
                expected = %self.kind,
                actual = %claims.kind,
                "Request rejected: wrong credential kind"
            );
            return Err(Rejection::InvalidCredential);
        }

        let identity = Identity::from(&claims);
        let insert = self.headers.render(&identity).map_err(|e| {
            debug!(stage = "verify", error = %e, "Request rejected: claims not representable as headers");
            Rejection::InvalidCredential
        })?;

        if !required.permits(claims.role.as_ref()) {
            debug!(
                stage = "authorize",
                subject_id = %claims.subject_id,
                role = claims.role.as_ref().map(|r| r.as_str()).unwrap_or(""),
                required = %required,
                "Request rejected"
            );
            return Err(Rejection::Forbidden);
        }

        let key = RevocationKey::for_claims(&claims);
        match self.lookup(&key).await {
            Ok(false) => {}
            Ok(true) => {
                debug!(
                    stage = "revocation",
                    subject_id = %claims.subject_id,
                    session_id = %claims.session_id,
                    "Request rejected: session revoked"
                );
                return Err(Rejection::SessionRevoked);
            }
            Err(e) => {
                warn!(
                    stage = "revocation",
                    subject_id = %claims.subject_id,
                    session_id = %claims.session_id,
                    error = %e,
                    "Revocation check failed; rejecting request"
                );
                return Err(Rejection::RevocationCheckUnavailable);
            }
        }

        debug!(
            subject_id = %identity.subject_id,
            session_id = %identity.session_id,
            "Request accepted"
        );

        Ok(Admission {
            identity,
            mutation: HeaderMutation {
                remove: self.headers.names().into_iter().cloned().collect(),
                insert,
            },
        })
    }

    /// Queries the store, treating an overrun as a store failure.
    async fn lookup(&self, key: &RevocationKey) -> Result<bool, RevocationError> {
        tokio::time::timeout(self.revocation_timeout, self.store.exists(key))
            .await
            .unwrap_or(Err(RevocationError::Timeout(self.revocation_timeout)))
    }
}
