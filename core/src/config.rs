//! Client configuration.
//!
//! Defaults target the public v2 API. `from_env` lets deployments point the
//! client at a mirror or a local mock server without code changes.

use std::time::Duration;

use crate::error::ApiError;

/// Base URL of the public countries API.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v2";

pub const BASE_URL_ENV: &str = "COUNTRIES_API_URL";
pub const TIMEOUT_ENV: &str = "COUNTRIES_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Read `COUNTRIES_API_URL` and `COUNTRIES_API_TIMEOUT_SECS`, falling back
    /// to the defaults for unset variables. A timeout of `0` disables it.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::InvalidConfig(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn env_overrides_base_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV, "http://127.0.0.1:3000"),
            (TIMEOUT_ENV, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "0")])).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(_)));
    }

    #[test]
    fn from_env_reads_process_environment() {
        // Only test in this binary that touches these variables.
        std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:4000/");
        std::env::set_var(TIMEOUT_ENV, "7");
        let config = ClientConfig::from_env();
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);

        let config = config.unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:4000/");
        assert_eq!(config.timeout, Some(Duration::from_secs(7)));
    }

    #[test]
    fn blank_base_url_keeps_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[(BASE_URL_ENV, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
