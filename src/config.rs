//! Configuration management for the Skycast dashboard
//!
//! The defaults work out of the box against the public endpoints.
//! Individual settings can be overridden through SKYCAST_* environment
//! variables, which is also how tests point the clients at a local mock
//! server.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure for the Skycast dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkycastConfig {
    /// Weather provider settings
    pub provider: ProviderConfig,
    /// IP geolocation settings
    pub locator: LocatorConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for the weather service
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
}

/// IP geolocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Base URL for the IP geolocation service
    #[serde(default = "default_locator_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_locator_timeout")]
    pub timeout_seconds: u32,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_provider_base_url() -> String {
    "https://wttr.in".to_string()
}

fn default_provider_timeout() -> u32 {
    10
}

fn default_locator_base_url() -> String {
    "http://ip-api.com".to_string()
}

fn default_locator_timeout() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SkycastConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                base_url: default_provider_base_url(),
                timeout_seconds: default_provider_timeout(),
            },
            locator: LocatorConfig {
                base_url: default_locator_base_url(),
                timeout_seconds: default_locator_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

impl SkycastConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SKYCAST_PROVIDER_URL") {
            config.provider.base_url = url;
        }
        if let Ok(raw) = std::env::var("SKYCAST_PROVIDER_TIMEOUT") {
            config.provider.timeout_seconds = parse_seconds("SKYCAST_PROVIDER_TIMEOUT", &raw)?;
        }
        if let Ok(url) = std::env::var("SKYCAST_LOCATOR_URL") {
            config.locator.base_url = url;
        }
        if let Ok(raw) = std::env::var("SKYCAST_LOCATOR_TIMEOUT") {
            config.locator.timeout_seconds = parse_seconds("SKYCAST_LOCATOR_TIMEOUT", &raw)?;
        }
        if let Ok(level) = std::env::var("SKYCAST_LOG") {
            config.logging.level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Request timeout for the weather provider client
    #[must_use]
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider.timeout_seconds.into())
    }

    /// Request timeout for the geolocation client
    #[must_use]
    pub fn locator_timeout(&self) -> Duration {
        Duration::from_secs(self.locator.timeout_seconds.into())
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url("provider", &self.provider.base_url)?;
        validate_base_url("locator", &self.locator.base_url)?;
        validate_timeout("provider", self.provider.timeout_seconds)?;
        validate_timeout("locator", self.locator.timeout_seconds)?;

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::invalid(format!(
                "invalid log level '{}', must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        Ok(())
    }
}

fn validate_base_url(name: &str, url: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::invalid(format!(
            "{name} base URL must be an HTTP or HTTPS URL, got {url:?}"
        )));
    }
    Ok(())
}

fn validate_timeout(name: &str, seconds: u32) -> Result<(), ConfigError> {
    if seconds == 0 {
        return Err(ConfigError::invalid(format!(
            "{name} timeout must be at least 1 second"
        )));
    }
    if seconds > 300 {
        return Err(ConfigError::invalid(format!(
            "{name} timeout cannot exceed 300 seconds"
        )));
    }
    Ok(())
}

fn parse_seconds(variable: &'static str, raw: &str) -> Result<u32, ConfigError> {
    raw.parse().map_err(|_| ConfigError::BadEnv {
        variable,
        value: raw.to_string(),
    })
}
