//! # Currency
//!
//! ISO 4217 currency codes as accepted by payment providers.
//! Codes are shape-checked and normalised to lowercase; the provider decides
//! which currencies it actually supports.

use crate::error::{IntentError, IntentResult};

/// Currencies without a minor unit (amounts are whole units)
const ZERO_DECIMAL: &[&str] = &[
    "bif", "clp", "djf", "gnf", "jpy", "kmf", "krw", "mga", "pyg", "rwf", "ugx", "vnd", "vuv",
    "xaf", "xof", "xpf",
];

/// Lowercase three-letter currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency(String);

impl Currency {
    /// Parse and normalise a currency code (`"EUR"` -> `eur`)
    pub fn parse(code: &str) -> IntentResult<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(IntentError::BadInput(format!(
                "currency must be a three-letter ISO 4217 code, got {:?}",
                code
            )));
        }
        Ok(Self(code.to_ascii_lowercase()))
    }

    /// US dollars, the default when the caller sends no currency
    pub fn usd() -> Self {
        Self("usd".to_string())
    }

    /// Returns the lowercase ISO 4217 code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u8 {
        if ZERO_DECIMAL.contains(&self.as_str()) {
            0
        } else {
            2
        }
    }

    /// Format an amount in the smallest currency unit for display (e.g. "12.00 EUR")
    pub fn display_amount(&self, amount: u64) -> String {
        match self.decimal_places() {
            0 => format!("{} {}", amount, self),
            _ => format!("{}.{:02} {}", amount / 100, amount % 100, self),
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::usd()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_uppercase())
    }
}
