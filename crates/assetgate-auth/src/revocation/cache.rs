//! Revocation store backed by the cache layer (Redis or moka).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use assetgate_cache::CacheManager;
use assetgate_core::error::AppError;
use assetgate_core::traits::CacheProvider;

use super::{RevocationError, RevocationKey, RevocationStore};

/// Reads and writes revocation entries through a [`CacheManager`].
#[derive(Debug, Clone)]
pub struct CacheRevocationStore {
    /// Cache manager holding the entries.
    cache: Arc<CacheManager>,
    /// TTL applied when a caller does not give one.
    default_ttl: Duration,
}

impl CacheRevocationStore {
    /// Creates a store over `cache`; entries default to `default_ttl`.
    pub fn new(cache: Arc<CacheManager>, default_ttl: Duration) -> Self {
        Self { cache, default_ttl }
    }

    /// Adds a revocation entry. The value records when it was revoked.
    pub async fn revoke(&self, key: &RevocationKey, ttl: Option<Duration>) -> Result<(), AppError> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let revoked_at = Utc::now().to_rfc3339();
        self.cache
            .set(&key.cache_key(), &revoked_at, ttl)
            .await
            .map_err(|e| AppError::cache(format!("Failed to revoke session: {e}")))?;

        info!(
            kind = %key.kind,
            session_id = %key.session_id,
            subject_id = %key.subject_id,
            ttl_seconds = ttl.as_secs(),
            "Session revoked"
        );
        Ok(())
    }

    /// Removes a revocation entry. Returns `true` if one was present.
    pub async fn restore(&self, key: &RevocationKey) -> Result<bool, AppError> {
        let removed = self
            .cache
            .delete(&key.cache_key())
            .await
            .map_err(|e| AppError::cache(format!("Failed to restore session: {e}")))?;

        if removed {
            info!(
                kind = %key.kind,
                session_id = %key.session_id,
                subject_id = %key.subject_id,
                "Session revocation lifted"
            );
        }
        Ok(removed)
    }

    /// Returns when the entry was revoked, if it exists.
    pub async fn revoked_at(&self, key: &RevocationKey) -> Result<Option<String>, AppError> {
        self.cache
            .get(&key.cache_key())
            .await
            .map_err(|e| AppError::cache(format!("Failed to read revocation entry: {e}")))
    }
}

#[async_trait]
impl RevocationStore for CacheRevocationStore {
    async fn exists(&self, key: &RevocationKey) -> Result<bool, RevocationError> {
        self.cache
            .exists(&key.cache_key())
            .await
            .map_err(|e| RevocationError::Unavailable(e.to_string()))
    }

    async fn health_check(&self) -> Result<bool, RevocationError> {
        self.cache
            .health_check()
            .await
            .map_err(|e| RevocationError::Unavailable(e.to_string()))
    }
}
