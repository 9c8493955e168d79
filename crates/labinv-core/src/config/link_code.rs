//! Link-code encoding profile and cache configuration.

use serde::{Deserialize, Serialize};

/// Fixed encoding profile for generated link codes.
///
/// The profile never depends on the encoded content: every code uses the
/// same error-correction level, module size, and border.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCodeConfig {
    /// QR symbol version (1-40). With `fit` enabled this is the minimum.
    #[serde(default = "default_version")]
    pub version: i16,
    /// Error-correction level: `"L"`, `"M"`, `"Q"`, or `"H"`.
    #[serde(default = "default_error_correction")]
    pub error_correction: String,
    /// Edge length of one module (box) in pixels.
    #[serde(default = "default_module_size")]
    pub module_size: u32,
    /// Quiet-zone width in modules.
    #[serde(default = "default_border")]
    pub border: u32,
    /// Grow the version when the content does not fit `version`.
    #[serde(default = "default_fit")]
    pub fit: bool,
    /// Cache provider settings.
    #[serde(default)]
    pub cache: LinkCodeCacheConfig,
}

impl Default for LinkCodeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            error_correction: default_error_correction(),
            module_size: default_module_size(),
            border: default_border(),
            fit: default_fit(),
            cache: LinkCodeCacheConfig::default(),
        }
    }
}

/// Link-code cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCodeCacheConfig {
    /// Cache provider: `"unbounded"` (never evicts) or `"bounded"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Maximum number of entries for the bounded provider.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for LinkCodeCacheConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            max_capacity: default_max_capacity(),
        }
    }
}

fn default_version() -> i16 {
    8
}

fn default_error_correction() -> String {
    "H".to_string()
}

fn default_module_size() -> u32 {
    10
}

fn default_border() -> u32 {
    4
}

fn default_fit() -> bool {
    true
}

fn default_provider() -> String {
    "unbounded".to_string()
}

fn default_max_capacity() -> u64 {
    256
}
