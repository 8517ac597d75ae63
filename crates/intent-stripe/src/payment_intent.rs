//! # Stripe Payment Intents
//!
//! Implementation of the Stripe Payment Intents API.
//! One form-encoded `POST /v1/payment_intents` per request, no retries.

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::DateTime;
use intent_core::{
    CreatedIntent, IntentError, IntentProvider, IntentRequest, IntentResult, PAYMENT_METHOD_CARD,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Stripe Payment Intents provider
///
/// Creates an intent server-side and hands its client secret to the browser,
/// which confirms the payment with Stripe.js.
pub struct StripePaymentIntents {
    config: StripeConfig,
    client: Client,
}

impl StripePaymentIntents {
    /// Create a new provider from injected configuration
    pub fn new(config: StripeConfig) -> IntentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IntentError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> IntentResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    /// The configuration this provider was built with
    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Build form data for the Stripe API, in wire order
    fn form_params(request: &IntentRequest) -> Vec<(&'static str, String)> {
        vec![
            ("amount", request.amount.to_string()),
            ("currency", request.currency.as_str().to_string()),
            ("payment_method_types[]", PAYMENT_METHOD_CARD.to_string()),
        ]
    }

    fn map_send_error(&self, err: reqwest::Error) -> IntentError {
        if err.is_timeout() {
            IntentError::Transport(format!(
                "Stripe did not answer within {:?}",
                self.config.timeout
            ))
        } else {
            IntentError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl IntentProvider for StripePaymentIntents {
    #[instrument(skip(self, request), fields(amount = request.amount, currency = %request.currency))]
    async fn create_intent(&self, request: &IntentRequest) -> IntentResult<CreatedIntent> {
        let auth_header = self.config.auth_header()?;
        let form_params = Self::form_params(request);

        debug!(
            "Creating Stripe payment intent: {}",
            request.currency.display_amount(request.amount)
        );

        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        let mut builder = self
            .client
            .post(&url)
            .header("Authorization", auth_header)
            .form(&form_params);

        if let Some(version) = &self.config.api_version {
            builder = builder.header("Stripe-Version", version);
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            debug!("Stripe API error: status={}", status);

            // Parse Stripe error
            let message = match serde_json::from_str::<StripeErrorResponse>(&body) {
                Ok(error_response) => error_response.error.describe(),
                Err(_) => format!("HTTP {}: {}", status, body),
            };

            return Err(IntentError::UpstreamFailure {
                status: status.as_u16(),
                message,
                body,
            });
        }

        let intent: StripePaymentIntentResponse = serde_json::from_str(&body).map_err(|e| {
            IntentError::MalformedResponse(format!("Failed to parse Stripe response: {}", e))
        })?;

        info!(
            "Created Stripe payment intent: id={}, status={}",
            intent.id.as_deref().unwrap_or("unknown"),
            intent.status.as_deref().unwrap_or("unknown")
        );

        Ok(CreatedIntent {
            id: intent.id,
            client_secret: intent.client_secret,
            status: intent.status,
            created_at: intent.created.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl StripeError {
    fn describe(&self) -> String {
        match (&self.message, &self.code, &self.error_type) {
            (Some(message), _, _) => message.clone(),
            (None, Some(code), _) => code.clone(),
            (None, None, Some(error_type)) => error_type.clone(),
            (None, None, None) => "Unknown Stripe error".to_string(),
        }
    }
}
