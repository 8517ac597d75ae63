//! # Intent Provider Trait
//!
//! Strategy trait for payment providers that can create payment intents.
//! The HTTP layer only ever talks to `dyn IntentProvider`, so a provider can
//! be swapped (or faked in tests) without touching the handler.

use crate::error::IntentResult;
use crate::intent::{CreatedIntent, IntentRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait IntentProvider: Send + Sync {
    /// Create a payment intent for the given amount and currency.
    ///
    /// Issues exactly one outbound call. No retries.
    async fn create_intent(&self, request: &IntentRequest) -> IntentResult<CreatedIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedIntentProvider = Arc<dyn IntentProvider>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Currency, IntentError};

    struct Declining;

    #[async_trait]
    impl IntentProvider for Declining {
        async fn create_intent(&self, _request: &IntentRequest) -> IntentResult<CreatedIntent> {
            Err(IntentError::Transport("connection refused".into()))
        }

        fn provider_name(&self) -> &'static str {
            "declining"
        }
    }

    #[tokio::test]
    async fn test_provider_is_object_safe() {
        let provider: BoxedIntentProvider = Arc::new(Declining);
        let request = IntentRequest::new(100, Currency::usd());

        let err = provider.create_intent(&request).await.unwrap_err();
        assert_eq!(err.kind(), "transport");
        assert_eq!(provider.provider_name(), "declining");
    }
}
