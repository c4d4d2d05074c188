use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`lock_env`] so no other test touches the environment.
unsafe fn clear_env() {
    unsafe {
        std::env::remove_var("HIRETEACH_API_URL");
        std::env::remove_var("HIRETEACH_AUTH_SCHEME");
        std::env::remove_var("HIRETEACH_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("HIRETEACH_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults() {
    let _env = lock_env();
    unsafe { clear_env() };

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_URL);
    assert_eq!(cfg.auth_scheme, AuthScheme::Token);
    assert_eq!(cfg.timeouts, Timeouts::default());
}

#[test]
fn from_env_parses_overrides() {
    let _env = lock_env();
    unsafe {
        clear_env();
        std::env::set_var("HIRETEACH_API_URL", "https://api.example.test/");
        std::env::set_var("HIRETEACH_AUTH_SCHEME", "Bearer");
        std::env::set_var("HIRETEACH_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("HIRETEACH_CONNECT_TIMEOUT_SECS", "5");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://api.example.test");
    assert_eq!(cfg.auth_scheme, AuthScheme::Bearer);
    assert_eq!(cfg.timeouts.request, Some(Duration::from_secs(30)));
    assert_eq!(cfg.timeouts.connect, Some(Duration::from_secs(5)));

    unsafe { clear_env() };
}

#[test]
fn from_env_rejects_bad_timeout() {
    let _env = lock_env();
    unsafe {
        clear_env();
        std::env::set_var("HIRETEACH_REQUEST_TIMEOUT_SECS", "soon");
    }

    let err = ClientConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { key: "HIRETEACH_REQUEST_TIMEOUT_SECS", .. }));

    unsafe { clear_env() };
}

#[test]
fn from_env_treats_zero_timeout_as_unbounded() {
    let _env = lock_env();
    unsafe {
        clear_env();
        std::env::set_var("HIRETEACH_REQUEST_TIMEOUT_SECS", "0");
        std::env::set_var("HIRETEACH_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request, None);
    assert_eq!(cfg.timeouts.connect, Some(Duration::from_secs(2)));

    unsafe { clear_env() };
}

#[test]
fn auth_scheme_parse_and_header() {
    assert_eq!("token".parse::<AuthScheme>().unwrap(), AuthScheme::Token);
    assert_eq!(" BEARER ".parse::<AuthScheme>().unwrap(), AuthScheme::Bearer);
    assert!("basic".parse::<AuthScheme>().is_err());
    assert_eq!(AuthScheme::Token.header_value("abc"), "Token abc");
    assert_eq!(AuthScheme::Bearer.header_value("abc"), "Bearer abc");
}

#[test]
fn base_url_requires_http_scheme() {
    assert!(matches!(ClientConfig::new("api.example.test"), Err(ConfigError::InvalidBaseUrl(_))));
    assert_eq!(ClientConfig::new("http://localhost:8000//").unwrap().base_url, "http://localhost:8000");
}
