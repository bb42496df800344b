//! Engine configuration
//!
//! Defines all configurable parameters for a modeling run including
//! the service endpoint, credentials, and polling policy.

use std::time::Duration;

/// Default base URL of the modeling service
pub const DEFAULT_BASE_URL: &str = "https://swissmodel.expasy.org";

/// Engine configuration
///
/// The API token is opaque configuration injected by the caller; it is
/// never a source literal. Polling is bounded either by `max_poll_attempts`
/// or, when that is `None`, only by caller-side cancellation.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the modeling service (e.g., "https://swissmodel.expasy.org")
    pub base_url: String,

    /// API token sent as the authorization credential on every request
    pub api_token: String,

    /// Fixed delay between status polls (no backoff)
    pub poll_interval: Duration,

    /// Maximum number of status polls before giving up; `None` polls
    /// until a terminal state or cancellation
    pub max_poll_attempts: Option<u32>,

    /// Consecutive status-fetch failures (or unrecognized statuses)
    /// tolerated before the run is abandoned
    pub max_consecutive_failures: u32,
}

impl EngineConfig {
    /// Creates a new configuration with default polling policy
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            poll_interval: Duration::from_secs(10),
            max_poll_attempts: None,
            max_consecutive_failures: 3,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - HOMOLOG_API_TOKEN (required)
    /// - HOMOLOG_BASE_URL (optional, default: the public service URL)
    /// - HOMOLOG_POLL_INTERVAL (optional, seconds, default: 10)
    /// - HOMOLOG_MAX_POLL_ATTEMPTS (optional, default: unbounded)
    /// - HOMOLOG_MAX_CONSECUTIVE_FAILURES (optional, default: 3)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_token = std::env::var("HOMOLOG_API_TOKEN")
            .map_err(|_| anyhow::anyhow!("HOMOLOG_API_TOKEN environment variable not set"))?;

        let base_url =
            std::env::var("HOMOLOG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let poll_interval = std::env::var("HOMOLOG_POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let max_poll_attempts = std::env::var("HOMOLOG_MAX_POLL_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok());

        let max_consecutive_failures = std::env::var("HOMOLOG_MAX_CONSECUTIVE_FAILURES")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(3);

        Ok(Self {
            base_url,
            api_token,
            poll_interval,
            max_poll_attempts,
            max_consecutive_failures,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_token.is_empty() {
            anyhow::bail!("api_token cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.max_consecutive_failures == 0 {
            anyhow::bail!("max_consecutive_failures must be greater than 0");
        }

        if let Some(0) = self.max_poll_attempts {
            anyhow::bail!("max_poll_attempts must be greater than 0 when set");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = EngineConfig::new(DEFAULT_BASE_URL, "tok");
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.max_poll_attempts, None);
        assert_eq!(config.max_consecutive_failures, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = EngineConfig::new(DEFAULT_BASE_URL, "tok");
        assert!(config.validate().is_ok());

        // Empty token should fail
        config.api_token = String::new();
        assert!(config.validate().is_err());

        config.api_token = "tok".to_string();

        // Invalid URL should fail
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = DEFAULT_BASE_URL.to_string();

        // Zero interval should fail
        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());

        config.poll_interval = Duration::from_secs(10);

        // Zero bounds should fail
        config.max_consecutive_failures = 0;
        assert!(config.validate().is_err());

        config.max_consecutive_failures = 3;
        config.max_poll_attempts = Some(0);
        assert!(config.validate().is_err());

        config.max_poll_attempts = Some(5);
        assert!(config.validate().is_ok());
    }
}
