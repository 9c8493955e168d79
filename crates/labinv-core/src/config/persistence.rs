//! Inventory persistence configuration.

use serde::{Deserialize, Serialize};

/// Where session inventories are kept between request cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Provider: `"memory"` (lost on restart) or `"file"` (one JSON
    /// document per session).
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Directory for the `file` provider.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            directory: default_directory(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_directory() -> String {
    "data/sessions".to_string()
}
