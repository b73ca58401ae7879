//! Configuration inspection commands.

use clap::{Args, Subcommand};

use assetgate_cache::redis::mask_redis_url;
use assetgate_core::config::AppConfig;
use assetgate_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration with secrets masked
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = AppConfig::load(config_path, env)?;
            config.auth.jwt_secret = "****".to_string();
            config.cache.redis.url = mask_redis_url(&config.cache.redis.url);
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match AppConfig::load(config_path, env) {
            Ok(config) => {
                output::print_success(&format!(
                    "Configuration '{config_path}' (env: {env}) is valid"
                ));
                output::print_kv(
                    "Server",
                    &format!("{}:{}", config.server.host, config.server.port),
                );
                output::print_kv("Revocation store", &config.cache.provider);
                if config.cache.provider.eq_ignore_ascii_case("redis") {
                    output::print_kv("Redis", &mask_redis_url(&config.cache.redis.url));
                }
                output::print_kv(
                    "Revocation timeout",
                    &format!("{} ms", config.gate.revocation_timeout_ms),
                );
                if config.auth.uses_placeholder_secret() {
                    output::print_warning("auth.jwt_secret is the placeholder value");
                }
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}
