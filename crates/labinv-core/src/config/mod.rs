//! Application configuration schemas.
//!
//! All configuration structs are deserialized from an optional TOML file
//! via the `config` crate, overlaid with `LABINV__*` environment
//! variables. Every section carries serde defaults so the server starts
//! without any file at all.

pub mod app;
pub mod link_code;
pub mod logging;
pub mod persistence;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::link_code::{LinkCodeCacheConfig, LinkCodeConfig};
pub use self::logging::LoggingConfig;
pub use self::persistence::PersistenceConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Link-code encoding profile and cache settings.
    #[serde(default)]
    pub link_code: LinkCodeConfig,
    /// Client session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Inventory persistence settings.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (optional) and the environment.
    ///
    /// Environment variables use the `LABINV` prefix and `__` as the
    /// section separator, e.g. `LABINV__SERVER__PORT=9000`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("LABINV")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
