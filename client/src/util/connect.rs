//! Composition-root wiring for the browser: base URL, session and client.

use market::config::{DEFAULT_API_URL, Timeouts};
use market::{ApiClient, ApiError, AuthScheme, ClientConfig, Session};

use super::browser_store::BrowserStore;

/// Build-time override for the backend location.
const COMPILED_API_URL: Option<&str> = option_env!("HIRETEACH_API_URL");

/// Pick the first usable base URL: build-time value, page origin, default.
pub fn resolve_config(compiled: Option<&str>, origin: Option<&str>) -> ClientConfig {
    for candidate in [compiled, origin].into_iter().flatten() {
        match ClientConfig::new(candidate) {
            Ok(config) => return config,
            Err(e) => leptos::logging::warn!("ignoring API base URL: {e}"),
        }
    }
    ClientConfig {
        base_url: DEFAULT_API_URL.to_owned(),
        auth_scheme: AuthScheme::default(),
        timeouts: Timeouts::default(),
    }
}

/// The `ApiClient` every page shares, backed by `localStorage`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the HTTP client cannot be built.
pub fn browser_client() -> Result<ApiClient, ApiError> {
    let origin = page_origin();
    let config = resolve_config(COMPILED_API_URL, origin.as_deref());
    leptos::logging::log!("using API at {}", config.base_url);
    ApiClient::new(&config, Session::new(BrowserStore))
}

#[cfg(feature = "csr")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(feature = "csr"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
#[path = "connect_test.rs"]
mod connect_test;
