//! Stand-in used when no revocation backend is configured.

use async_trait::async_trait;

use super::{RevocationError, RevocationKey, RevocationStore};

/// Fails every lookup, so an unconfigured deployment rejects gated
/// requests instead of treating every session as not revoked.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredRevocationStore;

#[async_trait]
impl RevocationStore for UnconfiguredRevocationStore {
    async fn exists(&self, _key: &RevocationKey) -> Result<bool, RevocationError> {
        Err(RevocationError::Unconfigured)
    }

    async fn health_check(&self) -> Result<bool, RevocationError> {
        Err(RevocationError::Unconfigured)
    }
}
