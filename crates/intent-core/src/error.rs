//! # Intent Error Types
//!
//! Typed error handling for the payment-intent function.
//! All intent operations return `Result<T, IntentError>`.

use thiserror::Error;

/// Core error type for all intent operations
#[derive(Debug, Error)]
pub enum IntentError {
    /// Provider credentials are not configured
    #[error("{0}")]
    ConfigMissing(String),

    /// A configuration value is present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Request body is not valid JSON or fails the request schema
    #[error("{0}")]
    BadInput(String),

    /// Provider answered with a non-success status
    #[error("Provider error (HTTP {status}): {message}")]
    UpstreamFailure {
        status: u16,
        message: String,
        body: String,
    },

    /// Network/HTTP error communicating with the provider, including timeouts
    #[error("Network error: {0}")]
    Transport(String),

    /// Provider answered 2xx but the body could not be parsed
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl IntentError {
    /// Stable machine-readable tag for this error
    pub fn kind(&self) -> &'static str {
        match self {
            IntentError::ConfigMissing(_) => "config_missing",
            IntentError::InvalidConfig(_) => "invalid_config",
            IntentError::BadInput(_) => "bad_input",
            IntentError::UpstreamFailure { .. } => "upstream_failure",
            IntentError::Transport(_) => "transport",
            IntentError::MalformedResponse(_) => "malformed_response",
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// The function answers every failure with 400 Bad Request; the cause is
    /// carried by [`IntentError::kind`] instead.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Status reported by the provider, when the provider answered at all
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            IntentError::UpstreamFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for intent operations
pub type IntentResult<T> = Result<T, IntentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_missing_message_is_verbatim() {
        let err = IntentError::ConfigMissing("Stripe secret key not set".into());
        assert_eq!(err.to_string(), "Stripe secret key not set");
        assert_eq!(err.kind(), "config_missing");
    }

    #[test]
    fn test_invalid_config_is_distinct_from_missing() {
        let err = IntentError::InvalidConfig("STRIPE_TIMEOUT_SECS must be positive".into());
        assert_eq!(err.kind(), "invalid_config");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: STRIPE_TIMEOUT_SECS must be positive"
        );
    }

    #[test]
    fn test_upstream_failure() {
        let err = IntentError::UpstreamFailure {
            status: 402,
            message: "Your card was declined.".into(),
            body: "{}".into(),
        };
        assert_eq!(
            err.to_string(),
            "Provider error (HTTP 402): Your card was declined."
        );
        assert_eq!(err.upstream_status(), Some(402));
        assert_eq!(err.kind(), "upstream_failure");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(IntentError::BadInput("x".into()).status_code(), 400);
        assert_eq!(IntentError::Transport("timeout".into()).status_code(), 400);
        assert_eq!(
            IntentError::MalformedResponse("eof".into()).status_code(),
            400
        );
        assert_eq!(IntentError::Transport("reset".into()).upstream_status(), None);
    }
}
