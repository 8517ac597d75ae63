//! # intent-core
//!
//! Core types and traits for the payment-intent function.
//!
//! This crate provides:
//! - `IntentRequest` for the validated inbound payload
//! - `Currency` for ISO 4217 currency codes
//! - `CreatedIntent` for what the provider hands back
//! - `IntentProvider` trait for implementing payment providers
//! - `IntentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use intent_core::{IntentProvider, IntentRequest};
//!
//! // Parse and validate the raw request body
//! let request = IntentRequest::from_json(br#"{"amount": 1200, "currency": "eur"}"#)?;
//!
//! // Create the intent with any provider
//! let intent = provider.create_intent(&request).await?;
//!
//! // Hand intent.client_secret to the browser
//! ```

pub mod currency;
pub mod error;
pub mod intent;
pub mod provider;

// Re-exports for convenience
pub use currency::Currency;
pub use error::{IntentError, IntentResult};
pub use intent::{CreatedIntent, IntentRequest, PAYMENT_METHOD_CARD};
pub use provider::{BoxedIntentProvider, IntentProvider};
