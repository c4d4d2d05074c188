//! Request errors and their view-facing summary.
//!
//! ERROR HANDLING
//! ==============
//! [`ApiError`] keeps the transport/server/client distinction for logging and
//! for the CLI. Views never see it directly: slices convert it into an
//! [`ErrorInfo`] `{message, code}`, which is the only error shape rendered.

use serde::{Deserialize, Serialize};

use crate::session::StoreError;

/// Code used whenever neither the server nor the transport supplies one.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
/// Message shown when no response reached the client at all.
pub const NO_RESPONSE_MESSAGE: &str = "Unable to connect to the server.";
/// Last-resort message when nothing more specific is available.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

// =============================================================================
// API ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout, reset).
    #[error("no response from server: {0}")]
    NoResponse(String),

    /// The server answered with a non-success status.
    #[error("request failed with status code {status}")]
    Rejected { status: u16, body: Option<ErrorBody> },

    /// A success response whose body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request could not be built (bad URL, unserializable body).
    #[error("request build failed: {0}")]
    Request(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    /// HTTP status for server rejections.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::NoResponse(err.to_string())
        }
    }
}

// =============================================================================
// ERROR BODY
// =============================================================================

/// Error payload as returned by the backend. Different endpoints use
/// different field names, so all of them are optional. A field holding a
/// number or boolean is kept as its text; objects and arrays are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    })
}

impl ErrorBody {
    /// Parse a rejection body; anything that is not a JSON object yields `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// First non-blank message field, in `message`, `detail`, `error` order.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        [&self.message, &self.detail, &self.error]
            .into_iter()
            .filter_map(Option::as_deref)
            .find(|m| !m.trim().is_empty())
    }
}

// =============================================================================
// ERROR INFO
// =============================================================================

/// The `{message, code}` pair stored on a failed resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ErrorInfo {
    pub message: String,
    pub code: String,
}

impl ErrorInfo {
    #[must_use]
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self { message: message.into(), code: code.into() }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_MESSAGE, UNKNOWN_ERROR)
    }
}

impl From<&ApiError> for ErrorInfo {
    fn from(err: &ApiError) -> Self {
        let (message, code) = match err {
            ApiError::Rejected { body: Some(body), .. } => {
                (body.message().map(str::to_owned), body.code.clone())
            }
            ApiError::NoResponse(_) => (Some(NO_RESPONSE_MESSAGE.to_owned()), None),
            _ => (None, None),
        };
        let message = message
            .or_else(|| Some(err.to_string()).filter(|m| !m.trim().is_empty()))
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned());
        let code = code.filter(|c| !c.trim().is_empty()).unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
        Self { message, code }
    }
}

impl From<ApiError> for ErrorInfo {
    fn from(err: ApiError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
