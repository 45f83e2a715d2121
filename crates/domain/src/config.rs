//! Application configuration structures
//!
//! Loaded by the infrastructure layer from environment variables or a config
//! file; see the loader for the lookup strategy.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Top-level configuration for the application core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Local database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: constants::DEFAULT_DB_FILE.to_string(), pool_size: 4 }
    }
}

/// Session document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path to the durable session document
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { path: constants::DEFAULT_SESSION_FILE.to_string() }
    }
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the diary backend (no trailing slash)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: constants::DEFAULT_API_TIMEOUT_SECS,
        }
    }
}
