//! Viewer session configuration.

use serde::{Deserialize, Serialize};

/// Viewer session management configuration.
///
/// Viewer sessions are ephemeral and held in process memory; they carry
/// the set of unlocked share ids and, after login, the user identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle timeout in minutes before a session is evicted.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Interval for expired session cleanup in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: default_idle_timeout(),
            cleanup_interval_minutes: default_cleanup_interval(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_idle_timeout() -> u64 {
    720
}

fn default_cleanup_interval() -> u64 {
    15
}

fn default_cookie_name() -> String {
    "notehub_session".to_string()
}
