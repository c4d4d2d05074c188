//! Shared REST client.
//!
//! ARCHITECTURE
//! ============
//! One [`ApiClient`] is built at the composition root from a
//! [`ClientConfig`] and the injected [`Session`], then cloned wherever
//! requests are made. The `Authorization` header is attached here and
//! nowhere else, using the single configured [`AuthScheme`].
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-success statuses and undecodable bodies are
//! classified into [`ApiError`] variants; the body of a rejection is kept so
//! the server's own message can reach the view.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::{AuthScheme, ClientConfig};
use crate::error::{ApiError, ErrorBody};
use crate::session::Session;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    scheme: AuthScheme,
    session: Session,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("scheme", &self.scheme)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ApiError> {
        let http = build_http(config)?;
        Ok(Self { http, base_url: config.base_url.clone(), scheme: config.auth_scheme, session })
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request carrying the session token, when there is one.
    pub(crate) fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.anonymous(method, path);
        match self.session.token() {
            Some(token) => builder.header(AUTHORIZATION, self.scheme.header_value(&token)),
            None => builder,
        }
    }

    /// Request without credentials, for login and registration.
    pub(crate) fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        self.http.request(method, self.endpoint(path))
    }

    /// Send and decode a JSON response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let text = self.send_text(builder).await?;
        decode_body(&text)
    }

    /// Send and ignore any response body (e.g. `204 No Content`).
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send_text(builder).await.map(drop)
    }

    async fn send_text(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| {
            let err = ApiError::from(e);
            tracing::warn!(error = %err, "api request failed");
            err
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::NoResponse(e.to_string()))?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "api request rejected");
            return Err(ApiError::Rejected { status: status.as_u16(), body: ErrorBody::parse(&text) });
        }
        Ok(text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &ClientConfig) -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeouts.request {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.timeouts.connect {
        builder = builder.connect_timeout(timeout);
    }
    builder.build().map_err(|e| ApiError::Request(e.to_string()))
}

// The browser's fetch owns timeouts on wasm.
#[cfg(target_arch = "wasm32")]
fn build_http(_config: &ClientConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder().build().map_err(|e| ApiError::Request(e.to_string()))
}

pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
