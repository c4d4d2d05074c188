//! `localStorage`-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the session token where the rest of the site expects it:
//! plain `localStorage` keys. The store holds no handle of its own; every
//! call looks the storage up again so the value stays `Send + Sync`.

use market::{KeyValueStore, StoreError};

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        storage()?.get_item(key).map_err(|e| js_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        storage()?.set_item(key, value).map_err(|e| js_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        storage()?.remove_item(key).map_err(|e| js_error(&e))
    }
}

#[cfg(not(feature = "csr"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("localStorage requires the csr feature".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("localStorage requires the csr feature".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("localStorage requires the csr feature".to_owned()))
    }
}
