use config::{Config, Environment};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{CollectError, Result};
use crate::utils::constants::{DEFAULT_RATE_LIMIT_MS, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Runtime settings for the collection loop. Defaults are overridable
/// through `UHI_`-prefixed environment variables (e.g.
/// `UHI_RATE_LIMIT_MS=500`); CLI flags win over both.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    pub request_timeout_secs: u64,
    pub rate_limit_ms: u64,
    pub user_agent: String,
    pub output_dir: PathBuf,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            rate_limit_ms: DEFAULT_RATE_LIMIT_MS,
            user_agent: format!("uhi-collector/{}", env!("CARGO_PKG_VERSION")),
            output_dir: PathBuf::from("data/processed"),
        }
    }
}

impl CollectorConfig {
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("request_timeout_secs", defaults.request_timeout_secs)
            .and_then(|b| b.set_default("rate_limit_ms", defaults.rate_limit_ms))
            .and_then(|b| b.set_default("user_agent", defaults.user_agent.clone()))
            .and_then(|b| {
                b.set_default("output_dir", defaults.output_dir.to_string_lossy().to_string())
            })
            .map_err(|e| CollectError::Config(e.to_string()))?
            .add_source(Environment::with_prefix("UHI").try_parsing(true))
            .build()
            .map_err(|e| CollectError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| CollectError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CollectorConfig::default();
        assert_eq!(config.rate_limit_ms, 1500);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.user_agent.starts_with("uhi-collector/"));
    }

    #[test]
    fn test_load_uses_defaults_without_env() {
        let config = CollectorConfig::load().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("data/processed"));
    }
}
