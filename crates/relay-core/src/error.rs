//! # Relay Error Types
//!
//! Typed error handling for the payment relay.
//! All relay operations return `Result<T, RelayError>`.

use thiserror::Error;

/// Core error type for all relay operations.
///
/// The relay deliberately has a small failure surface: upstream error
/// *payloads* are not errors here — they are relayed verbatim to the
/// caller. Only transport failures and unparseable upstream bodies
/// surface as `RelayError`.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration errors (invalid bind address, malformed settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/HTTP error communicating with the payment platform
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream response body could not be parsed as JSON
    #[error("Upstream parse error: {0}")]
    UpstreamParse(String),
}

impl RelayError {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, RelayError::Network(_))
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Configuration(_) => 500,
            RelayError::Network(_) => 503,
            RelayError::UpstreamParse(_) => 502,
        }
    }
}

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(RelayError::Network("timeout".into()).is_retryable());
        assert!(!RelayError::UpstreamParse("not json".into()).is_retryable());
        assert!(!RelayError::Configuration("bad addr".into()).is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::Configuration("x".into()).status_code(), 500);
        assert_eq!(RelayError::Network("x".into()).status_code(), 503);
        assert_eq!(RelayError::UpstreamParse("x".into()).status_code(), 502);
    }
}
