//! # Pi-Relay RS
//!
//! Server-side relay between a web client and the Pi Platform payments API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PI_API_KEY="Key q234..."
//! export PI_VALIDATION_KEY="0123abcd..."
//!
//! # Run the server
//! pi-relay
//! ```

use relay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new();

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!(
        "Validation key configured: {}",
        !state.config.validation_key.is_empty()
    );

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("π Pi-Relay starting on http://{}", addr);

    if !is_prod {
        info!("🏠 Home: http://{}/", addr);
        info!("💳 Approve: POST http://{}/approve", addr);
        info!("✅ Complete: POST http://{}/complete", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  π Pi-Relay RS π
  ━━━━━━━━━━━━━━━━━━━━━━━
  Pi Platform payment relay
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
