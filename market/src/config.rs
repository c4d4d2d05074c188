//! HTTP client configuration parsed from environment variables.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Errors produced while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown auth scheme '{0}' (expected 'token' or 'bearer')")]
    UnknownAuthScheme(String),

    #[error("invalid value for {key}: '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("base URL must start with http:// or https://: '{0}'")]
    InvalidBaseUrl(String),
}

/// Prefix placed before the session token in the `Authorization` header.
/// A client uses exactly one scheme for every authenticated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    #[default]
    Token,
    Bearer,
}

impl AuthScheme {
    #[must_use]
    pub fn header_value(self, token: &str) -> String {
        match self {
            Self::Token => format!("Token {token}"),
            Self::Bearer => format!("Bearer {token}"),
        }
    }
}

impl FromStr for AuthScheme {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(Self::Token),
            "bearer" => Ok(Self::Bearer),
            other => Err(ConfigError::UnknownAuthScheme(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeouts {
    /// Whole-request timeout. `None` leaves the HTTP client default (unbounded).
    pub request: Option<Duration>,
    pub connect: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_scheme: AuthScheme,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Config for `base_url` with the default scheme and no timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, auth_scheme: AuthScheme::default(), timeouts: Timeouts::default() })
    }

    #[must_use]
    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `HIRETEACH_API_URL`: default `http://127.0.0.1:8000`
    /// - `HIRETEACH_AUTH_SCHEME`: `token` (default) or `bearer`
    /// - `HIRETEACH_REQUEST_TIMEOUT_SECS`: unbounded when absent or `0`
    /// - `HIRETEACH_CONNECT_TIMEOUT_SECS`: unbounded when absent or `0`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any present variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("HIRETEACH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let auth_scheme = match std::env::var("HIRETEACH_AUTH_SCHEME") {
            Ok(raw) => raw.parse()?,
            Err(_) => AuthScheme::default(),
        };
        let timeouts = Timeouts {
            request: env_secs("HIRETEACH_REQUEST_TIMEOUT_SECS")?,
            connect: env_secs("HIRETEACH_CONNECT_TIMEOUT_SECS")?,
        };

        Ok(Self::new(&base_url)?.with_auth_scheme(auth_scheme).with_timeouts(timeouts))
    }
}

fn env_secs(key: &'static str) -> Result<Option<Duration>, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(timeout_secs)
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}

/// Timeout of `secs` seconds; `0` means unbounded.
#[must_use]
pub fn timeout_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
