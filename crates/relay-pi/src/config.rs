//! # Pi Platform Configuration
//!
//! Configuration management for the Pi Platform integration.
//! The secret credential is loaded from environment variables.

use std::env;
use tracing::warn;

/// Pi Platform API configuration
#[derive(Debug, Clone)]
pub struct PiConfig {
    /// Full `Authorization` header value (`Key <secret>`)
    pub api_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

/// Production base URL of the Pi Platform API
pub const DEFAULT_API_BASE_URL: &str = "https://api.minepi.com";

impl PiConfig {
    /// Load configuration from environment variables.
    ///
    /// Env vars:
    /// - `PI_API_KEY` - the full header value, `Key <secret>` as issued
    ///   by the developer portal
    ///
    /// A missing key is not fatal: upstream calls go out with an empty
    /// `Authorization` header and the platform's rejection is relayed
    /// to the caller unchanged.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("PI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("PI_API_KEY not set; upstream calls will be rejected by the platform");
        }

        Self {
            api_key,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Create config with an explicit key (for testing)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Get the `Authorization` header value.
    ///
    /// `PI_API_KEY` already carries its `Key ` scheme prefix, so the
    /// configured value is sent verbatim.
    pub fn auth_header(&self) -> &str {
        &self.api_key
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl Default for PiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_is_verbatim() {
        let config = PiConfig::new("Key q234abc");
        assert_eq!(config.auth_header(), "Key q234abc");
    }

    #[test]
    fn test_default_base_url() {
        let config = PiConfig::new("Key q234abc");
        assert_eq!(config.api_base_url, "https://api.minepi.com");
    }

    #[test]
    fn test_with_api_base_url() {
        let config = PiConfig::new("Key q234abc").with_api_base_url("http://127.0.0.1:9999");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_from_env_missing_key_is_not_fatal() {
        env::remove_var("PI_API_KEY");

        let config = PiConfig::from_env();
        assert!(config.api_key.is_empty());
    }
}
