//! CLI command definitions and dispatch.

pub mod config;
pub mod revocation;
pub mod token;

use clap::{Parser, Subcommand, ValueEnum};

use assetgate_auth::TokenKind;
use assetgate_core::config::AppConfig;
use assetgate_core::error::AppError;

use crate::output::OutputFormat;

/// AssetGate: bearer authentication and session revocation
#[derive(Debug, Parser)]
#[command(name = "assetgate", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, env = "ASSETGATE_CONFIG", default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/{env}`
    #[arg(short, long, env = "ASSETGATE_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Revoke a session so the gate rejects its credentials
    Revoke(revocation::RevokeArgs),
    /// Lift a session revocation
    Restore(revocation::RestoreArgs),
    /// Show whether a session is revoked
    Status(revocation::StatusArgs),
    /// Issue or verify tokens
    Token(token::TokenArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Revoke(args) => revocation::revoke(args, &self.load_config()?).await,
            Commands::Restore(args) => revocation::restore(args, &self.load_config()?).await,
            Commands::Status(args) => {
                revocation::status(args, &self.load_config()?, self.format).await
            }
            Commands::Token(args) => token::execute(args, &self.load_config()?, self.format),
            Commands::Config(args) => config::execute(args, &self.config, &self.env, self.format),
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load(&self.config, &self.env)
    }
}

/// Credential kind namespace selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Access credentials
    #[default]
    Access,
    /// Refresh credentials
    Refresh,
}

impl From<KindArg> for TokenKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Access => TokenKind::Access,
            KindArg::Refresh => TokenKind::Refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_revoke() {
        let cli = Cli::try_parse_from([
            "assetgate", "revoke", "--session", "s1", "--subject", "u1", "--kind", "refresh",
            "--ttl-seconds", "60",
        ])
        .unwrap();

        match cli.command {
            Commands::Revoke(args) => {
                assert_eq!(args.target.session, "s1");
                assert_eq!(args.target.subject, "u1");
                assert_eq!(TokenKind::from(args.target.kind), TokenKind::Refresh);
                assert_eq!(args.ttl_seconds, Some(60));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_requires_session_and_subject() {
        assert!(Cli::try_parse_from(["assetgate", "status", "--session", "s1"]).is_err());
    }

    #[test]
    fn test_parse_json_format() {
        let cli = Cli::try_parse_from([
            "assetgate", "--format", "json", "status", "--session", "s1", "--subject", "u1",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
