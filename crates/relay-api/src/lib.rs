//! # relay-api
//!
//! HTTP API layer for the pi-relay payment relay.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Relay endpoints for the Pi payment lifecycle
//! - Static home page and domain-validation file
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Landing page |
//! | GET | `/health` | Health check |
//! | GET | `/validation-key.txt` | Domain validation key |
//! | POST | `/approve` | Relay payment approval upstream |
//! | POST | `/complete` | Relay payment completion upstream |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
