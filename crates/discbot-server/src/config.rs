//! Server configuration
//!
//! Built once at startup from Shuttle secrets, falling back to the process
//! environment (populated from `.env` by dotenvy). Read-only afterwards.

use anyhow::{Context, Result};
use std::time::Duration;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini credential; `None` disables remote calls
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Upper bound on a single remote call
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load from Shuttle secrets, then the environment
    pub fn load(secrets: &shuttle_runtime::SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }

    /// Build from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let request_timeout = match value(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.parse().with_context(|| {
                    format!("{} must be a whole number of seconds, got {:?}", TIMEOUT_VAR, raw)
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            gemini_api_key: value(API_KEY_VAR),
            gemini_model: value(MODEL_VAR).unwrap_or(defaults.gemini_model),
            gemini_base_url: value(BASE_URL_VAR).unwrap_or(defaults.gemini_base_url),
            request_timeout,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_values() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert!(!config.has_api_key());
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = AppConfig::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap();
        assert_eq!(config.gemini_api_key, None);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (API_KEY_VAR, " secret-key "),
            (MODEL_VAR, "gemini-2.0-flash"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret-key"));
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_malformed_timeout_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_VAR));
    }
}
