//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the Pi Platform client and process-wide configuration, built
//! once at startup so handlers never reach into the environment.

use relay_core::{RelayError, RelayResult};
use relay_pi::PiPlatformClient;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Token served at `/validation-key.txt` for the platform's
    /// domain-ownership check
    pub validation_key: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let validation_key = std::env::var("PI_VALIDATION_KEY").unwrap_or_default();
        if validation_key.is_empty() {
            tracing::warn!(
                "PI_VALIDATION_KEY not set; /validation-key.txt will serve an empty body"
            );
        }

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            validation_key,
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> RelayResult<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                RelayError::Configuration(format!(
                    "Invalid bind address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Pi Platform client (holds the secret credential)
    pub pi: PiPlatformClient,
}

impl AppState {
    /// Create a new AppState from the environment
    pub fn new() -> Self {
        Self {
            config: AppConfig::from_env(),
            pi: PiPlatformClient::from_env(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        // Clear env vars for test
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("ENVIRONMENT");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(!config.is_production());
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: "test".to_string(),
            validation_key: String::new(),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_bind_address() {
        let config = AppConfig {
            host: "not a host".to_string(),
            port: 3000,
            environment: "test".to_string(),
            validation_key: String::new(),
        };

        let err = config.socket_addr().unwrap_err();
        assert!(matches!(err, RelayError::Configuration(_)));
    }
}
