//! # Intent Types
//!
//! The validated request payload and the provider's answer.

use crate::currency::Currency;
use crate::error::{IntentError, IntentResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Payment method type requested for every intent
pub const PAYMENT_METHOD_CARD: &str = "card";

/// Request payload as it arrives on the wire, before validation
#[derive(Debug, Deserialize)]
struct RawIntentRequest {
    #[serde(default)]
    amount: Option<serde_json::Value>,
    #[serde(default)]
    currency: Option<String>,
}

/// A validated request to create a payment intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRequest {
    /// Amount in the smallest currency unit (cents for USD)
    pub amount: u64,
    /// Currency, `usd` when the caller sent none
    pub currency: Currency,
}

impl IntentRequest {
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Parse and validate a JSON request body.
    ///
    /// The body must be an object with a positive integer `amount` and an
    /// optional three-letter `currency` (`null` counts as absent).
    pub fn from_json(body: &[u8]) -> IntentResult<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| IntentError::BadInput(format!("Invalid JSON body: {}", e)))?;

        if !value.is_object() {
            return Err(IntentError::BadInput(
                "Request body must be a JSON object".to_string(),
            ));
        }

        let raw: RawIntentRequest = serde_json::from_value(value)
            .map_err(|e| IntentError::BadInput(format!("Invalid request body: {}", e)))?;

        let amount = match raw.amount {
            None | Some(serde_json::Value::Null) => {
                return Err(IntentError::BadInput("amount is required".to_string()));
            }
            Some(serde_json::Value::Number(n)) => n.as_u64().filter(|a| *a > 0).ok_or_else(|| {
                IntentError::BadInput(format!(
                    "amount must be a positive integer in the smallest currency unit, got {}",
                    n
                ))
            })?,
            Some(other) => {
                return Err(IntentError::BadInput(format!(
                    "amount must be a number, got {}",
                    other
                )));
            }
        };

        let currency = match raw.currency {
            Some(code) => Currency::parse(&code)?,
            None => Currency::default(),
        };

        Ok(Self { amount, currency })
    }
}

/// A payment intent as created by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedIntent {
    /// Provider-side intent ID (pi_...)
    pub id: Option<String>,
    /// Secret the client uses to confirm the payment
    pub client_secret: Option<String>,
    /// Provider status (e.g. "requires_payment_method")
    pub status: Option<String>,
    /// Creation time reported by the provider
    pub created_at: Option<DateTime<Utc>>,
}
