//! Revocation (denylist) lookups keyed by session and subject.
//!
//! The gate only reads through [`RevocationStore`]. Entries are written by
//! logout/rotation flows and by operator tooling via
//! [`CacheRevocationStore::revoke`].

pub mod cache;
pub mod unconfigured;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use assetgate_cache::keys;

use crate::jwt::{Claims, TokenKind};

pub use cache::CacheRevocationStore;
pub use unconfigured::UnconfiguredRevocationStore;

/// Identifies one revocation entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevocationKey {
    /// Namespace: which kind of credential the entry revokes.
    pub kind: TokenKind,
    /// Revoked session identifier.
    pub session_id: String,
    /// Subject the session belongs to.
    pub subject_id: String,
}

impl RevocationKey {
    /// Creates a key from its parts.
    pub fn new(kind: TokenKind, session_id: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            kind,
            session_id: session_id.into(),
            subject_id: subject_id.into(),
        }
    }

    /// The key under which verified `claims` would be revoked.
    pub fn for_claims(claims: &Claims) -> Self {
        Self::new(claims.kind, &claims.session_id, &claims.subject_id)
    }

    /// Storage key, namespaced by credential kind.
    pub fn cache_key(&self) -> String {
        match self.kind {
            TokenKind::Access => keys::revoked_access(&self.session_id, &self.subject_id),
            TokenKind::Refresh => keys::revoked_refresh(&self.session_id, &self.subject_id),
        }
    }
}

/// Failure to consult the revocation store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevocationError {
    /// The backend returned an error or could not be reached.
    #[error("revocation store unavailable: {0}")]
    Unavailable(String),
    /// The lookup did not complete in time.
    #[error("revocation store did not answer within {0:?}")]
    Timeout(Duration),
    /// No store backend is configured.
    #[error("no revocation store configured")]
    Unconfigured,
}

/// Read side of the shared revocation list.
///
/// Implementations must tolerate arbitrarily many concurrent callers.
#[async_trait]
pub trait RevocationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Whether an entry exists for `key`.
    async fn exists(&self, key: &RevocationKey) -> Result<bool, RevocationError>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> Result<bool, RevocationError>;
}
