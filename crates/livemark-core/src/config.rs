//! Runtime configuration for the retrievers.
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `LIVEMARK_QUOTE_ENDPOINT` | `https://query1.finance.yahoo.com/v8/finance/chart/{symbol}` |
//! | `LIVEMARK_TIMEOUT_MS` | `10000` |
//! | `LIVEMARK_USER_AGENT` | `livemark/<version>` |

use thiserror::Error;
use tracing::warn;

/// Placeholder replaced by the upper-cased symbol in the quote endpoint.
pub const SYMBOL_PLACEHOLDER: &str = "{symbol}";

pub const DEFAULT_QUOTE_ENDPOINT: &str =
    "https://query1.finance.yahoo.com/v8/finance/chart/{symbol}";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USER_AGENT: &str = concat!("livemark/", env!("CARGO_PKG_VERSION"));

const ENV_QUOTE_ENDPOINT: &str = "LIVEMARK_QUOTE_ENDPOINT";
const ENV_TIMEOUT_MS: &str = "LIVEMARK_TIMEOUT_MS";
const ENV_USER_AGENT: &str = "LIVEMARK_USER_AGENT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("quote endpoint '{endpoint}' must contain the {{symbol}} placeholder")]
    MissingPlaceholder { endpoint: String },
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Settings shared by both retrievers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub quote_endpoint: String,
    /// Deadline applied to the single outbound request of a `retrieve` call.
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            quote_endpoint: String::from(DEFAULT_QUOTE_ENDPOINT),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl FetchConfig {
    /// Build from `LIVEMARK_*` environment variables on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FetchConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_QUOTE_ENDPOINT) {
            config = config.with_quote_endpoint(endpoint)?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(timeout_ms) => config = config.with_timeout_ms(timeout_ms)?,
                Err(error) => warn!(
                    variable = ENV_TIMEOUT_MS,
                    value = %raw,
                    %error,
                    "ignoring unparseable timeout, keeping default"
                ),
            }
        }

        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }

        Ok(config)
    }

    pub fn with_quote_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        if !endpoint.contains(SYMBOL_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder { endpoint });
        }
        self.quote_endpoint = endpoint;
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = FetchConfig::from_lookup(lookup_from(&[])).expect("defaults are valid");
        assert_eq!(config, FetchConfig::default());
        assert!(config.quote_endpoint.contains(SYMBOL_PLACEHOLDER));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = FetchConfig::from_lookup(lookup_from(&[
            ("LIVEMARK_QUOTE_ENDPOINT", "http://localhost:9000/chart/{symbol}"),
            ("LIVEMARK_TIMEOUT_MS", "2500"),
            ("LIVEMARK_USER_AGENT", "desk-probe/1.0"),
        ]))
        .expect("overrides are valid");

        assert_eq!(config.quote_endpoint, "http://localhost:9000/chart/{symbol}");
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.user_agent, "desk-probe/1.0");
    }

    #[test]
    fn unparseable_timeout_keeps_default() {
        let config = FetchConfig::from_lookup(lookup_from(&[("LIVEMARK_TIMEOUT_MS", "soon")]))
            .expect("bad timeout is ignored");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn endpoint_without_placeholder_is_rejected() {
        let error = FetchConfig::from_lookup(lookup_from(&[(
            "LIVEMARK_QUOTE_ENDPOINT",
            "http://localhost:9000/chart/AAPL",
        )]))
        .expect_err("placeholder is mandatory");
        assert!(matches!(error, ConfigError::MissingPlaceholder { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let error = FetchConfig::default()
            .with_timeout_ms(0)
            .expect_err("zero timeout must fail");
        assert_eq!(error, ConfigError::ZeroTimeout);
    }
}
