//! # Payment Wire Types
//!
//! Request types for the browser-facing relay endpoints and the
//! lifecycle actions they map to on the payment platform.
//!
//! Field presence is deliberately not validated: a missing identifier
//! deserializes to `None` and is forwarded upstream as-is, where the
//! platform rejects it with its own error payload. The relay stays out
//! of that contract.

use serde::Deserialize;

/// Body of `POST /approve` from the browser client.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveRequest {
    /// Payment identifier issued by the Pi SDK on the client
    #[serde(rename = "paymentId", default)]
    pub payment_id: Option<String>,
}

/// Body of `POST /complete` from the browser client.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteRequest {
    /// Payment identifier issued by the Pi SDK on the client
    #[serde(rename = "paymentId", default)]
    pub payment_id: Option<String>,
    /// Blockchain transaction id reported by the client
    #[serde(default)]
    pub txid: Option<String>,
}

/// Payment lifecycle actions exposed by the platform's payments API.
///
/// Each action is a path segment under `/v2/payments/{payment_id}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAction {
    /// Server-side approval of a pending payment
    Approve,
    /// Completion report after the blockchain transaction is submitted
    Complete,
}

impl PaymentAction {
    /// The upstream path segment for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentAction::Approve => "approve",
            PaymentAction::Complete => "complete",
        }
    }
}

impl std::fmt::Display for PaymentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_request_wire_name() {
        let request: ApproveRequest =
            serde_json::from_str(r#"{"paymentId":"abc123"}"#).unwrap();
        assert_eq!(request.payment_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        // The relay forwards absent identifiers instead of rejecting them
        let request: ApproveRequest = serde_json::from_str("{}").unwrap();
        assert!(request.payment_id.is_none());

        let request: CompleteRequest =
            serde_json::from_str(r#"{"paymentId":"abc123"}"#).unwrap();
        assert_eq!(request.payment_id.as_deref(), Some("abc123"));
        assert!(request.txid.is_none());
    }

    #[test]
    fn test_complete_request() {
        let request: CompleteRequest =
            serde_json::from_str(r#"{"paymentId":"abc123","txid":"tx789"}"#).unwrap();
        assert_eq!(request.payment_id.as_deref(), Some("abc123"));
        assert_eq!(request.txid.as_deref(), Some("tx789"));
    }

    #[test]
    fn test_action_path_segments() {
        assert_eq!(PaymentAction::Approve.as_str(), "approve");
        assert_eq!(PaymentAction::Complete.as_str(), "complete");
        assert_eq!(PaymentAction::Complete.to_string(), "complete");
    }
}
