//! Authentication and share credential configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum account password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Length of generated share codes. Codes are drawn from an
    /// alphanumeric alphabet, so the default of 10 gives a code space
    /// far beyond the point where collisions are a practical concern.
    #[serde(default = "default_share_code_length")]
    pub share_code_length: usize,
    /// How many times share creation retries after a share-code
    /// uniqueness collision before giving up.
    #[serde(default = "default_share_code_retries")]
    pub share_code_retries: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            share_code_length: default_share_code_length(),
            share_code_retries: default_share_code_retries(),
        }
    }
}

fn default_password_min() -> usize {
    8
}

fn default_share_code_length() -> usize {
    10
}

fn default_share_code_retries() -> u32 {
    3
}
