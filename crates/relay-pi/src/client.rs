//! # Pi Platform Client
//!
//! HTTP client for the Pi Platform server-side payments API.
//! This is the only component that holds the secret credential.

use crate::config::PiConfig;
use relay_core::{PaymentAction, RelayError, RelayResult};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info, instrument};

/// Client for the Pi Platform payments API.
///
/// Approve/complete calls are pass-through: the upstream response body
/// is parsed and returned as-is, whatever the upstream HTTP status.
/// Lifecycle calls are state-changing on the platform side and are
/// never retried here.
#[derive(Clone)]
pub struct PiPlatformClient {
    config: PiConfig,
    client: Client,
}

impl PiPlatformClient {
    /// Create a new Pi Platform client
    pub fn new(config: PiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(PiConfig::from_env())
    }

    /// Approve a pending payment.
    ///
    /// Issues `POST /v2/payments/{payment_id}/approve` with an empty
    /// JSON object body, as the platform requires.
    pub async fn approve(&self, payment_id: &str) -> RelayResult<Value> {
        self.relay(payment_id, PaymentAction::Approve, json!({})).await
    }

    /// Report a payment as completed on the blockchain.
    ///
    /// Issues `POST /v2/payments/{payment_id}/complete` with the
    /// transaction id in the body.
    pub async fn complete(&self, payment_id: &str, txid: &str) -> RelayResult<Value> {
        self.relay(payment_id, PaymentAction::Complete, json!({ "txid": txid }))
            .await
    }

    /// Forward one lifecycle call to the platform and hand back its
    /// JSON response.
    #[instrument(skip(self, body), fields(payment_id = %payment_id, action = %action))]
    async fn relay(
        &self,
        payment_id: &str,
        action: PaymentAction,
        body: Value,
    ) -> RelayResult<Value> {
        let url = format!(
            "{}/v2/payments/{}/{}",
            self.config.api_base_url, payment_id, action
        );

        debug!("Relaying {} to {}", action, url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        info!("Pi Platform response: action={}, status={}", action, status);

        // The status is not translated: a platform-side rejection body
        // is a valid relay result and goes back to the caller verbatim.
        serde_json::from_str(&body)
            .map_err(|e| RelayError::UpstreamParse(format!("{} (upstream status {})", e, status)))
    }
}
