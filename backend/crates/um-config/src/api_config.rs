use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS,
    MAX_API_TIMEOUT_SECS, MIN_API_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the user administration API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server URL, e.g. "https://cms.example.com"
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer_token: Option<String>,
    /// Per-request timeout enforced by the HTTP client
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            bearer_token: None,
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_API_TIMEOUT_SECS || self.timeout_secs > MAX_API_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
