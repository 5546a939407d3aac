//! # Request Handlers
//!
//! Axum request handlers for the payment relay.
//!
//! The approve/complete handlers are pass-through: whatever JSON the
//! platform returns is what the browser client receives, rejections
//! included. Only transport-level failures produce a locally-generated
//! error body.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use relay_core::{ApproveRequest, CompleteRequest, RelayError};
use serde::Serialize;
use tracing::{error, info, instrument};

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn relay_error_to_response(err: RelayError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pi-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Landing page
pub async fn home() -> impl IntoResponse {
    Html(
        r#"
<!DOCTYPE html>
<html>
<head><title>Pi Payment Relay</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <div style="font-size: 60px;">&pi;</div>
        <h1>Pi Payment Relay</h1>
        <p style="color: #666;">Open this app in the Pi Browser to pay with Pi.</p>
    </div>
</body>
</html>
"#,
    )
}

/// Domain validation key for the platform's ownership check.
///
/// Served exactly as configured, no markup: the platform compares bytes.
pub async fn validation_key(State(state): State<AppState>) -> String {
    state.config.validation_key.clone()
}

/// Relay a payment approval to the Pi Platform
#[instrument(skip(state, request), fields(payment_id = ?request.payment_id))]
pub async fn approve(
    State(state): State<AppState>,
    Json(request): Json<ApproveRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let payment_id = request.payment_id.unwrap_or_default();

    info!("Payment approval requested: {}", payment_id);

    let body = state.pi.approve(&payment_id).await.map_err(|e| {
        error!("Approve relay failed: {}", e);
        relay_error_to_response(e)
    })?;

    Ok(Json(body))
}

/// Relay a payment completion to the Pi Platform
#[instrument(skip(state, request), fields(payment_id = ?request.payment_id))]
pub async fn complete(
    State(state): State<AppState>,
    Json(request): Json<CompleteRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let payment_id = request.payment_id.unwrap_or_default();
    let txid = request.txid.unwrap_or_default();

    info!("Payment completion requested: {}, txid: {}", payment_id, txid);

    let body = state.pi.complete(&payment_id, &txid).await.map_err(|e| {
        error!("Complete relay failed: {}", e);
        relay_error_to_response(e)
    })?;

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 503);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 503);
    }

    #[test]
    fn test_relay_error_conversion() {
        let err = RelayError::Network("connection refused".to_string());
        let (status, _json) = relay_error_to_response(err);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let err = RelayError::UpstreamParse("not json".to_string());
        let (status, _json) = relay_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
