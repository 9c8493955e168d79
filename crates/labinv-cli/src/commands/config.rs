//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use labinv_cache::QrPngEncoder;
use labinv_cache::provider::LinkCodeCacheManager;
use labinv_core::config::AppConfig;
use labinv_core::error::AppError;
use labinv_store::StoreManager;

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
    /// Show the effective configuration (file, environment, defaults)
    Show,
    /// Validate the configuration by building every provider it names
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => print_summary(&config),
            }
        }
        ConfigCommand::Validate => match validate(config_path).await {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                print_summary(&config);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Load the configuration and construct the encoder, cache, and store it
/// selects, so unknown providers and bad profiles surface before serving.
async fn validate(config_path: &str) -> Result<AppConfig, AppError> {
    let config = super::load_config(config_path)?;
    let encoder = std::sync::Arc::new(QrPngEncoder::from_config(&config.link_code)?);
    LinkCodeCacheManager::new(&config.link_code.cache, encoder)?;
    StoreManager::new(&config.persistence).await?;
    Ok(config)
}

fn print_summary(config: &AppConfig) {
    output::print_kv(
        "Server",
        &format!("{}:{}", config.server.host, config.server.port),
    );
    output::print_kv("Public URL", &config.server.public_url);
    output::print_kv(
        "Link code",
        &format!(
            "version {} / EC {} / module {}px / border {}",
            config.link_code.version,
            config.link_code.error_correction,
            config.link_code.module_size,
            config.link_code.border
        ),
    );
    output::print_kv("Link code cache", &config.link_code.cache.provider);
    output::print_kv(
        "Persistence",
        &format!(
            "{} ({})",
            config.persistence.provider, config.persistence.directory
        ),
    );
    output::print_kv(
        "Session idle timeout",
        &format!("{} min", config.session.idle_timeout_minutes),
    );
    output::print_kv("Logging", &config.logging.level);
}
