//! # Request Handlers
//!
//! Axum request handlers for the payment-intent function.
//! Pre-flight requests are answered directly; every other method goes through
//! the intent creation path, whose errors are caught at a single boundary.

use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use intent_core::{IntentError, IntentRequest, IntentResult};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

/// Largest request body read on the create path
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create payment intent response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    /// Omitted when the provider returned no secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl From<&IntentError> for ErrorResponse {
    fn from(err: &IntentError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
            upstream_status: err.upstream_status(),
        }
    }
}

fn intent_error_to_response(err: IntentError) -> (StatusCode, Json<ErrorResponse>) {
    error!(kind = err.kind(), "Error: {}", err);
    if let IntentError::UpstreamFailure { status, body, .. } = &err {
        debug!("Upstream response: status={}, body={}", status, body);
    }
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(ErrorResponse::from(&err)))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "create-payment-intent",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.provider.provider_name()
    }))
}

/// CORS pre-flight
pub async fn preflight() -> &'static str {
    "ok"
}

/// The payment-intent function: answers any method on any path
///
/// The body is only read after the pre-flight check.
#[instrument(skip_all, fields(method = %request.method(), request_id = %uuid::Uuid::new_v4()))]
pub async fn payment_intent(State(state): State<AppState>, request: Request) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight().await.into_response();
    }

    match create_payment_intent(&state, request.into_body()).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => intent_error_to_response(err).into_response(),
    }
}

async fn read_body(body: Body) -> IntentResult<axum::body::Bytes> {
    axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| {
            IntentError::BadInput(format!(
                "Failed to read request body (limit {} bytes): {}",
                MAX_BODY_BYTES, e
            ))
        })
}

async fn create_payment_intent(state: &AppState, body: Body) -> IntentResult<CreateIntentResponse> {
    let body = read_body(body).await?;
    let request = IntentRequest::from_json(&body)?;

    info!(
        "Creating payment intent: {} via {}",
        request.currency.display_amount(request.amount),
        state.provider.provider_name()
    );

    let intent = state.provider.create_intent(&request).await?;
    let intent_id = intent.id.as_deref().unwrap_or("unknown");

    match intent.created_at {
        Some(created_at) => info!("Payment intent {} created at {}", intent_id, created_at.to_rfc3339()),
        None => info!("Payment intent {} created", intent_id),
    }

    if intent.client_secret.is_none() {
        warn!("Provider returned no client secret for intent {}", intent_id);
    }

    Ok(CreateIntentResponse {
        client_secret: intent.client_secret,
    })
}
