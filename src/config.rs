//! Runtime configuration for the weather service and log output

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key: pass --api-key or set WEATHERAPI_KEY")]
    MissingApiKey,

    #[error("invalid API base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),

    #[error("no default log directory on this platform: pass --log-file")]
    NoLogDir,
}

/// Connection settings for the WeatherAPI.com client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            base_url,
            api_key,
            timeout_secs: timeout_secs.max(1),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Log file location: explicit path, else `<data_local_dir>/solar/solar.log`
pub fn log_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    dirs_next::data_local_dir()
        .map(|dir| dir.join("solar").join("solar.log"))
        .ok_or(ConfigError::NoLogDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_requires_key() {
        assert!(matches!(
            ApiConfig::new(DEFAULT_API_BASE, None, 10),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            ApiConfig::new(DEFAULT_API_BASE, Some("   ".into()), 10),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_api_config_rejects_bad_base() {
        assert!(matches!(
            ApiConfig::new("api.weatherapi.com", Some("key".into()), 10),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_api_config_clamps_timeout() {
        let config = ApiConfig::new(DEFAULT_API_BASE, Some(" key ".into()), 0)
            .unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_explicit_log_path_wins() {
        let path = PathBuf::from("/tmp/solar-test.log");
        assert_eq!(log_path(Some(path.clone())).unwrap(), path);
    }
}
