//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! Loaded once at startup and injected into [`StripePaymentIntents`](crate::StripePaymentIntents).

use intent_core::{IntentError, IntentResult};
use std::env;
use std::time::Duration;

/// Message reported on every request while no secret key is configured
pub const MISSING_SECRET_KEY: &str = "Stripe secret key not set";

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...). `None` until configured.
    pub secret_key: Option<String>,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Pinned API version; the account default applies when unset
    pub api_version: Option<String>,

    /// Upper bound on a single call to Stripe
    pub timeout: Duration,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Env vars:
    /// - `STRIPE_SECRET_KEY` (a missing key is reported per request, not here)
    /// - `STRIPE_API_BASE_URL`
    /// - `STRIPE_API_VERSION`
    /// - `STRIPE_TIMEOUT_SECS`
    pub fn from_env() -> IntentResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> IntentResult<Self> {
        let secret_key = lookup("STRIPE_SECRET_KEY").filter(|k| !k.is_empty());

        let api_base_url = lookup("STRIPE_API_BASE_URL")
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_version = lookup("STRIPE_API_VERSION").filter(|v| !v.is_empty());

        let timeout = match lookup("STRIPE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    IntentError::InvalidConfig(format!(
                        "STRIPE_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                        raw
                    ))
                })?;
                if secs == 0 {
                    return Err(IntentError::InvalidConfig(
                        "STRIPE_TIMEOUT_SECS must be at least 1".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            secret_key,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_version,
            timeout,
        })
    }

    /// Create config with an explicit secret key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: Some(secret_key.into()).filter(|k: &String| !k.is_empty()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Config with no secret key; every request fails with `ConfigMissing`
    pub fn unconfigured() -> Self {
        Self {
            secret_key: None,
            ..Self::new("")
        }
    }

    /// Check if a secret key is present
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key
            .as_deref()
            .is_some_and(|k| k.starts_with("sk_test_"))
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> IntentResult<String> {
        self.secret_key
            .as_deref()
            .map(|key| format!("Bearer {}", key))
            .ok_or_else(|| IntentError::ConfigMissing(MISSING_SECRET_KEY.to_string()))
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set the outbound timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StripeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(!config.has_secret_key());
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert_eq!(config.api_version, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let config =
            StripeConfig::from_lookup(lookup_from(&[("STRIPE_SECRET_KEY", "")])).unwrap();
        assert!(!config.has_secret_key());

        let err = config.auth_header().unwrap_err();
        assert_eq!(err.to_string(), "Stripe secret key not set");
        assert_eq!(err.kind(), "config_missing");
    }

    #[test]
    fn test_overrides() {
        let config = StripeConfig::from_lookup(lookup_from(&[
            ("STRIPE_SECRET_KEY", "sk_test_abc123"),
            ("STRIPE_API_BASE_URL", "http://localhost:12111/"),
            ("STRIPE_API_VERSION", "2024-12-18.acacia"),
            ("STRIPE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert!(config.is_test_mode());
        assert_eq!(config.api_base_url, "http://localhost:12111");
        assert_eq!(config.api_version.as_deref(), Some("2024-12-18.acacia"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout() {
        for raw in ["soon", "0", "-1"] {
            let err = StripeConfig::from_lookup(lookup_from(&[("STRIPE_TIMEOUT_SECS", raw)]))
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_config", "timeout {:?}", raw);
        }
    }

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header().unwrap(), "Bearer sk_test_abc123");
        assert!(StripeConfig::unconfigured().auth_header().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", StripeConfig::new("sk_live_topsecret"));
        assert!(!rendered.contains("topsecret"));
    }
}
