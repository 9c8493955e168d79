//! Client session configuration.

use serde::{Deserialize, Serialize};

/// Client session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Idle timeout in minutes before a session is dropped from memory.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Interval between idle-session sweeps in seconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            idle_timeout_minutes: default_idle_timeout(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_cookie_name() -> String {
    "labinv_session".to_string()
}

fn default_idle_timeout() -> u64 {
    120
}

fn default_sweep_interval() -> u64 {
    60
}
