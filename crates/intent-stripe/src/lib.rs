//! # intent-stripe
//!
//! Stripe payment-intent provider for the payment-intent function.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intent_core::{IntentProvider, IntentRequest};
//! use intent_stripe::{StripeConfig, StripePaymentIntents};
//!
//! // Build the provider once at startup
//! let provider = StripePaymentIntents::new(StripeConfig::from_env()?)?;
//!
//! // Per request
//! let request = IntentRequest::from_json(body)?;
//! let intent = provider.create_intent(&request).await?;
//! ```

pub mod config;
pub mod payment_intent;

// Re-exports
pub use config::{StripeConfig, MISSING_SECRET_KEY};
pub use payment_intent::StripePaymentIntents;
