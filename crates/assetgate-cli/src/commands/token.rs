//! Token commands: issue and verify.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use assetgate_auth::{Claims, CredentialVerifier, JwtEncoder, JwtVerifier, Role, TokenKind};
use assetgate_core::config::AppConfig;
use assetgate_core::error::AppError;

use super::KindArg;
use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Sign a token with the configured secret
    Issue {
        /// Subject identifier
        #[arg(long)]
        subject: String,
        /// Session identifier; a random UUID when omitted
        #[arg(long)]
        session: Option<String>,
        /// Role claim
        #[arg(long)]
        role: Option<String>,
        /// Credential kind
        #[arg(long, value_enum, default_value = "access")]
        kind: KindArg,
    },
    /// Verify a token and print its claims
    Verify {
        /// The bearer token
        token: String,
    },
}

/// Claims display row
#[derive(Debug, Serialize, Tabled)]
struct ClaimsRow {
    /// Subject
    subject: String,
    /// Session
    session: String,
    /// Role
    role: String,
    /// Kind
    kind: String,
    /// Expires
    expires: String,
}

impl From<Claims> for ClaimsRow {
    fn from(claims: Claims) -> Self {
        let expires = claims
            .expires_at()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| claims.exp.to_string());
        Self {
            subject: claims.subject_id,
            session: claims.session_id,
            role: claims.role.map(|r| r.as_str().to_string()).unwrap_or_default(),
            kind: claims.kind.to_string(),
            expires,
        }
    }
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    if config.auth.uses_placeholder_secret() {
        output::print_warning("auth.jwt_secret is the placeholder value");
    }

    match &args.command {
        TokenCommand::Issue {
            subject,
            session,
            role,
            kind,
        } => {
            let session = session
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let role = role.as_deref().map(Role::parse);
            let kind = TokenKind::from(*kind);

            let token = JwtEncoder::new(&config.auth).issue(subject, &session, role.as_ref(), kind)?;

            match format {
                OutputFormat::Table => {
                    output::print_kv("session", &session);
                    output::print_kv("kind", kind.as_str());
                    println!("{token}");
                }
                OutputFormat::Json => output::print_item(
                    &serde_json::json!({ "token": token, "session": session, "kind": kind }),
                    format,
                ),
            }
        }
        TokenCommand::Verify { token } => {
            let claims = JwtVerifier::new(&config.auth)
                .verify(token.trim())
                .map_err(|e| AppError::authentication(e.to_string()))?;
            output::print_list(&[ClaimsRow::from(claims)], format);
        }
    }

    Ok(())
}
