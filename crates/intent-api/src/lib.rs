//! # intent-api
//!
//! HTTP layer for the payment-intent function.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The intent creation handler with its fixed CORS headers
//! - Startup configuration
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | OPTIONS | any | CORS pre-flight, body `ok` |
//! | POST | any | Create a payment intent, returns `{ "clientSecret": ... }` |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
