//! Where the API lives.

use std::env::VarError;

use thiserror::Error;
use url::Url;

pub const BASE_URL_VAR: &str = "EMS_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid EMS_API_BASE_URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `EMS_API_BASE_URL`, falling back to the local backend when it
    /// is unset. A set but unusable value is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(std::env::var(BASE_URL_VAR))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => Self::with_base_url(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidBaseUrl {
                value: raw.to_string_lossy().into_owned(),
                reason: "not valid UTF-8".to_string(),
            }),
        }
    }

    /// Accepts absolute http(s) URLs only.
    pub fn with_base_url(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason,
        };
        let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        Ok(Self {
            base_url: value.trim_end_matches('/').to_string(),
        })
    }
}
