//! Environment configuration, read once at start-up.

use chrono::Duration;
use thiserror::Error;

use prodreg_observability::LogFormat;
use prodreg_products::default_notice_ttl;

pub const LOG_FORMAT_VAR: &str = "PRODUCT_FORM_LOG_FORMAT";
pub const NOTICE_SECS_VAR: &str = "PRODUCT_FORM_NOTICE_SECS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    pub notice_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            notice_ttl: default_notice_ttl(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            config.log_format = value.parse().map_err(|e| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                value: value.clone(),
                reason: format!("{e}"),
            })?;
        }

        if let Some(value) = lookup(NOTICE_SECS_VAR) {
            let secs: u32 = value.trim().parse().map_err(|e| ConfigError::Invalid {
                var: NOTICE_SECS_VAR,
                value: value.clone(),
                reason: format!("{e}"),
            })?;
            config.notice_ttl = Duration::seconds(i64::from(secs));
        }

        Ok(config)
    }
}
