//! Revocation entry commands: revoke, restore, status.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use assetgate_auth::{CacheRevocationStore, RevocationKey};
use assetgate_cache::CacheManager;
use assetgate_core::config::AppConfig;
use assetgate_core::error::AppError;

use super::KindArg;
use crate::output::{self, OutputFormat};

/// Identifies one revocation entry
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Session identifier (the token's `jti`)
    #[arg(long)]
    pub session: String,
    /// Subject identifier (the token's `sub`)
    #[arg(long)]
    pub subject: String,
    /// Credential kind namespace
    #[arg(long, value_enum, default_value = "access")]
    pub kind: KindArg,
}

impl TargetArgs {
    fn key(&self) -> RevocationKey {
        RevocationKey::new(self.kind.into(), &self.session, &self.subject)
    }
}

/// Arguments for `revoke`
#[derive(Debug, Args)]
pub struct RevokeArgs {
    /// Entry to write
    #[command(flatten)]
    pub target: TargetArgs,
    /// Entry lifetime; should cover the credential's remaining validity
    #[arg(long)]
    pub ttl_seconds: Option<u64>,
}

/// Arguments for `restore`
#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Entry to delete
    #[command(flatten)]
    pub target: TargetArgs,
    /// Skip confirmation
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `status`
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Entry to look up
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Status display row
#[derive(Debug, Serialize, Tabled)]
struct StatusRow {
    /// Kind
    kind: String,
    /// Session
    session: String,
    /// Subject
    subject: String,
    /// Revoked
    revoked: bool,
    /// Revoked At
    revoked_at: String,
}

/// Opens the configured revocation store for writing.
async fn open_store(config: &AppConfig) -> Result<CacheRevocationStore, AppError> {
    if !config.cache.is_configured() {
        return Err(AppError::configuration(
            "No revocation store configured (cache.provider = \"none\")",
        ));
    }
    if config.cache.provider.eq_ignore_ascii_case("memory") {
        output::print_warning(
            "cache.provider is 'memory'; entries written here are not visible to a running server",
        );
    }

    let cache = CacheManager::new(&config.cache).await?;
    Ok(CacheRevocationStore::new(
        Arc::new(cache),
        Duration::from_secs(config.cache.default_ttl_seconds),
    ))
}

/// Execute `revoke`
pub async fn revoke(args: &RevokeArgs, config: &AppConfig) -> Result<(), AppError> {
    if args.ttl_seconds == Some(0) {
        return Err(AppError::validation("--ttl-seconds must be greater than zero"));
    }

    let store = open_store(config).await?;
    let key = args.target.key();
    store.revoke(&key, args.ttl_seconds.map(Duration::from_secs)).await?;

    output::print_success(&format!(
        "Revoked {} session {} for subject {}",
        key.kind, key.session_id, key.subject_id
    ));
    Ok(())
}

/// Execute `restore`
pub async fn restore(args: &RestoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let key = args.target.key();

    if !args.force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Lift revocation of {} session {} for subject {}?",
                key.kind, key.session_id, key.subject_id
            ))
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let store = open_store(config).await?;
    if store.restore(&key).await? {
        output::print_success(&format!("Session {} restored", key.session_id));
    } else {
        output::print_warning(&format!("Session {} was not revoked", key.session_id));
    }
    Ok(())
}

/// Execute `status`
pub async fn status(
    args: &StatusArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = open_store(config).await?;
    let key = args.target.key();
    let revoked_at = store.revoked_at(&key).await?;

    let row = StatusRow {
        kind: key.kind.to_string(),
        session: key.session_id,
        subject: key.subject_id,
        revoked: revoked_at.is_some(),
        revoked_at: revoked_at.unwrap_or_else(|| "-".to_string()),
    };

    output::print_list(&[row], format);
    Ok(())
}
