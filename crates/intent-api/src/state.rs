//! # Application State
//!
//! Shared state for the Axum application.
//! Configuration is resolved once at startup and injected here; request
//! handling never reads the process environment.

use intent_core::BoxedIntentProvider;
use intent_stripe::StripePaymentIntents;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Default locations searched for the optional TOML config file
const CONFIG_PATHS: [&str; 2] = ["config/function.toml", "../config/function.toml"];

/// Optional overrides read from `config/function.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    environment: Option<String>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from the optional config file, then environment variables.
    ///
    /// Environment variables win over file values.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let explicit = std::env::var("FUNCTION_CONFIG").ok().map(PathBuf::from);
        let file = load_file_config(explicit.as_deref())?;

        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    fn resolve(file: FileConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST")
                .or(file.host)
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .or(file.port)
                .unwrap_or(8080),
            environment: lookup("ENVIRONMENT")
                .or(file.environment)
                .unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Provider that creates the payment intents
    pub provider: BoxedIntentProvider,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by Stripe
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let stripe = StripePaymentIntents::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        if !stripe.config().has_secret_key() {
            warn!("STRIPE_SECRET_KEY is not set; every request will be rejected");
        } else if !stripe.config().is_test_mode() {
            info!("Stripe is running with a live key");
        }

        Ok(Self::with_provider(config, Arc::new(stripe)))
    }

    /// Create state around an explicit provider
    pub fn with_provider(config: AppConfig, provider: BoxedIntentProvider) -> Self {
        Self { provider, config }
    }
}

/// Load the TOML config file.
///
/// An explicitly named file must exist; the default paths are optional.
fn load_file_config(explicit: Option<&Path>) -> anyhow::Result<FileConfig> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        return parse_file_config(&content, &path.display().to_string());
    }

    for path in CONFIG_PATHS {
        if let Ok(content) = std::fs::read_to_string(path) {
            return parse_file_config(&content, path);
        }
    }

    Ok(FileConfig::default())
}

fn parse_file_config(content: &str, origin: &str) -> anyhow::Result<FileConfig> {
    let file: FileConfig = toml::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", origin, e))?;
    info!("Loaded function config from {}", origin);
    Ok(file)
}
