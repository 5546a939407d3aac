//! # relay-pi
//!
//! Pi Platform API client for the pi-relay payment relay.
//!
//! The platform's server-side payments API exposes one endpoint per
//! payment lifecycle step under `/v2/payments/{payment_id}/`. The relay
//! calls exactly two of them:
//!
//! 1. **approve** - confirms the payment server-side before the user
//!    signs the transaction. Empty JSON body.
//! 2. **complete** - reports the blockchain transaction id once the
//!    user has submitted it. Body: `{"txid": "..."}`.
//!
//! Both calls carry the developer's secret credential in the
//! `Authorization` header and must never be issued from the browser.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_pi::PiPlatformClient;
//!
//! // Create client from environment (reads PI_API_KEY)
//! let client = PiPlatformClient::from_env();
//!
//! // Approve, then later complete, a payment
//! let approved = client.approve("abc123").await?;
//! let completed = client.complete("abc123", "tx789").await?;
//! ```
//!
//! The upstream response body is returned as parsed JSON with no
//! interpretation: a platform-side rejection comes back as the
//! platform's own error payload, not as a client error.

pub mod client;
pub mod config;

// Re-exports
pub use client::PiPlatformClient;
pub use config::PiConfig;
