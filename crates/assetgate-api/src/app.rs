//! Wires configuration into a ready [`AppState`].

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use assetgate_auth::{
    AuthGate, CacheRevocationStore, JwtVerifier, RevocationStore, UnconfiguredRevocationStore,
};
use assetgate_cache::CacheManager;
use assetgate_core::config::AppConfig;
use assetgate_core::result::AppResult;

/// Builds state from configuration, connecting the configured revocation store.
///
/// With `cache.provider = "none"` the gate still starts, but every
/// authenticated request is rejected as unavailable.
pub async fn build_state(config: AppConfig) -> AppResult<crate::AppState> {
    let store: Arc<dyn RevocationStore> = if config.cache.is_configured() {
        info!(provider = %config.cache.provider, "Initializing revocation store");
        let cache = Arc::new(CacheManager::new(&config.cache).await?);
        Arc::new(CacheRevocationStore::new(
            cache,
            Duration::from_secs(config.cache.default_ttl_seconds),
        ))
    } else {
        warn!("No revocation store configured; authenticated requests will be rejected");
        Arc::new(UnconfiguredRevocationStore)
    };

    build_state_with_store(config, store)
}

/// Builds state around an existing revocation store.
pub fn build_state_with_store(
    config: AppConfig,
    store: Arc<dyn RevocationStore>,
) -> AppResult<crate::AppState> {
    if config.auth.uses_placeholder_secret() {
        warn!("auth.jwt_secret is the placeholder value; set ASSETGATE__AUTH__JWT_SECRET");
    }

    let verifier = Arc::new(JwtVerifier::new(&config.auth));
    let gate = AuthGate::new(verifier, store, &config.gate)?;

    info!(
        revocation_timeout_ms = config.gate.revocation_timeout_ms,
        "Authentication gate ready"
    );

    Ok(crate::AppState::new(config, gate))
}
