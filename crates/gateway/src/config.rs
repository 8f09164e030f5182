//! Startup configuration for the gateway.
//!
//! Only two public client keys are required: the backend project URL and
//! its anon key. The payment publishable key is optional; without it the
//! billing service refuses checkout locally instead of attempting a call.

use smartplan_core::errors::{ConfigError, Result};
use std::env;

pub const API_URL_VAR: &str = "SMARTPLAN_API_URL";
pub const ANON_KEY_VAR: &str = "SMARTPLAN_ANON_KEY";
pub const STRIPE_PUBLISHABLE_KEY_VAR: &str = "SMARTPLAN_STRIPE_PUBLISHABLE_KEY";

/// Prefix left behind by unfilled template values.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Public client configuration consumed at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_url: String,
    pub anon_key: String,
    pub stripe_publishable_key: Option<String>,
}

impl GatewayConfig {
    pub fn new(
        api_url: impl Into<String>,
        anon_key: impl Into<String>,
        stripe_publishable_key: Option<String>,
    ) -> Self {
        GatewayConfig {
            api_url: api_url.into(),
            anon_key: anon_key.into(),
            stripe_publishable_key,
        }
    }

    /// Reads the configuration from the environment, rejecting missing
    /// or placeholder values before any call is attempted.
    pub fn from_env() -> Result<Self> {
        let api_url = require(API_URL_VAR)?;
        let anon_key = require(ANON_KEY_VAR)?;
        let stripe_publishable_key = env::var(STRIPE_PUBLISHABLE_KEY_VAR)
            .ok()
            .filter(|v| !v.is_empty());

        Ok(GatewayConfig {
            api_url,
            anon_key,
            stripe_publishable_key,
        })
    }
}

fn require(key: &str) -> Result<String> {
    let value = env::var(key).map_err(|_| ConfigError::MissingKey(key.to_string()))?;
    if value.is_empty() {
        return Err(ConfigError::MissingKey(key.to_string()).into());
    }
    if value.starts_with(PLACEHOLDER_PREFIX) {
        return Err(ConfigError::Placeholder(key.to_string()).into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_construction_keeps_values() {
        let config = GatewayConfig::new(
            "https://project.example.co",
            "anon-key",
            Some("pk_test_abc".to_string()),
        );
        assert_eq!(config.api_url, "https://project.example.co");
        assert_eq!(config.stripe_publishable_key.as_deref(), Some("pk_test_abc"));
    }
}
