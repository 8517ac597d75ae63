//! # Routes
//!
//! Axum router configuration for the payment-intent function.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue,
    },
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Value of `Access-Control-Allow-Origin` on every response
pub const CORS_ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Headers` on every response
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
/// Value of `Access-Control-Allow-Methods` on every response
pub const CORS_ALLOW_METHODS: &str = "POST";

/// Create the main application router
///
/// Routes:
/// - GET /health - Health check (other methods on /health reach the function)
/// - anything else - the payment-intent function
///   (OPTIONS answers the pre-flight, every other method creates an intent)
///
/// The fixed CORS headers are set on every response, errors included.
pub fn create_router(state: AppState) -> Router {
    // tower_http's CorsLayer answers pre-flights itself with an empty body,
    // so the headers are set directly instead
    let cors_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ));

    Router::new()
        // Health check
        .route(
            "/health",
            get(handlers::health).fallback(handlers::payment_intent),
        )
        // The function itself
        .fallback(handlers::payment_intent)
        // Middleware
        .layer(cors_headers)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_header_values_are_valid() {
        for value in [CORS_ALLOW_ORIGIN, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS] {
            assert!(HeaderValue::from_str(value).is_ok());
        }
    }
}
