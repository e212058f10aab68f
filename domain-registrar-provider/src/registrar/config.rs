use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 默认 API 地址
pub const DEFAULT_API_URL: &str = "https://api.scaleway.com";
/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HttpRegistrar`](super::HttpRegistrar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarConfig {
    pub secret_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Why a flat settings map could not become a [`RegistrarConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConfigValidationError {
    /// A required field is missing entirely.
    MissingField { field: String, label: String },
    /// A field is present but blank.
    EmptyField { field: String, label: String },
    /// A field holds something that cannot be used.
    InvalidFormat {
        field: String,
        label: String,
        reason: String,
    },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

impl RegistrarConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_url: default_api_url(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Builds a config from flat, camelCase string settings.
    ///
    /// `secretKey` is required; `apiUrl`, `connectTimeoutSecs` and `requestTimeoutSecs`
    /// fall back to their defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] if `secretKey` is missing or blank, or a timeout
    /// is not a whole number of seconds.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, ConfigValidationError> {
        let secret_key = match map.get("secretKey") {
            None => {
                return Err(ConfigValidationError::MissingField {
                    field: "secretKey".to_string(),
                    label: "Secret Key".to_string(),
                });
            }
            Some(v) if v.trim().is_empty() => {
                return Err(ConfigValidationError::EmptyField {
                    field: "secretKey".to_string(),
                    label: "Secret Key".to_string(),
                });
            }
            Some(v) => v.clone(),
        };

        let api_url = map
            .get("apiUrl")
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map_or_else(default_api_url, str::to_string);

        Ok(Self {
            secret_key,
            api_url,
            connect_timeout_secs: parse_secs(
                map,
                "connectTimeoutSecs",
                "Connect Timeout",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            request_timeout_secs: parse_secs(
                map,
                "requestTimeoutSecs",
                "Request Timeout",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
        })
    }
}

fn parse_secs(
    map: &HashMap<String, String>,
    key: &str,
    label: &str,
    default: u64,
) -> Result<u64, ConfigValidationError> {
    let Some(raw) = map.get(key) else {
        return Ok(default);
    };
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ConfigValidationError::InvalidFormat {
            field: key.to_string(),
            label: label.to_string(),
            reason: e.to_string(),
        })
}
