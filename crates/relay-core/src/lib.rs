//! # relay-core
//!
//! Core types and errors for the pi-relay payment relay.
//!
//! This crate provides:
//! - `ApproveRequest` and `CompleteRequest` wire types for the browser-facing API
//! - `PaymentAction` for the upstream payment lifecycle endpoints
//! - `RelayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use relay_core::{ApproveRequest, PaymentAction};
//!
//! let request: ApproveRequest = serde_json::from_str(r#"{"paymentId":"abc123"}"#)?;
//!
//! // Build the upstream path segment for this lifecycle step
//! let action = PaymentAction::Approve;
//! let url = format!("https://api.minepi.com/v2/payments/{}/{}",
//!     request.payment_id.unwrap_or_default(), action.as_str());
//! ```

pub mod error;
pub mod payment;

// Re-exports for convenience
pub use error::{RelayError, RelayResult};
pub use payment::{ApproveRequest, CompleteRequest, PaymentAction};
