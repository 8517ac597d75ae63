//! # create-payment-intent
//!
//! Serves the payment-intent function over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//!
//! # Optional
//! export STRIPE_TIMEOUT_SECS=30
//! export LOG_FORMAT=json
//!
//! # Run the server
//! create-payment-intent
//! ```

use intent_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider.provider_name());

    // Create router
    let app = routes::create_router(state);

    info!("create-payment-intent v{} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);

    if !is_prod {
        info!("Health: GET http://{}/health", addr);
        info!(
            "Try: curl -X POST http://{} -H 'content-type: application/json' -d '{{\"amount\": 500}}'",
            addr
        );
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `LOG_FORMAT=json` switches to structured JSON lines
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
