//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::hn::HN_BASE_URL;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long cached entries live, in seconds
    pub cache_ttl_secs: u64,
    /// Timeout for upstream HackerNews requests, in seconds
    pub upstream_timeout_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the HackerNews API
    pub hn_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cache entry lifetime in seconds (default: 40)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout in seconds (default: 20)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `HN_BASE_URL` - HackerNews API base URL (default: the public Firebase endpoint)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(40),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            hn_base_url: env::var("HN_BASE_URL").unwrap_or_else(|_| HN_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 40,
            upstream_timeout_secs: 20,
            server_port: 3000,
            hn_base_url: HN_BASE_URL.to_string(),
        }
    }
}
