//! Session provider: the one read/write surface for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token, email and display name live in durable client storage (browser
//! `localStorage`, a JSON file for the CLI, memory in tests). Role is never
//! stored; the route guard re-derives it from the backend on every
//! evaluation.
//!
//! DESIGN
//! ======
//! A [`Session`] is built once at the composition root and handed to the
//! [`crate::ApiClient`] constructor. Nothing else reads storage directly.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "access_token";
/// Older builds stored the token under this key; read-only fallback.
pub const LEGACY_TOKEN_KEY: &str = "token";
pub const EMAIL_KEY: &str = "email";
pub const NAME_KEY: &str = "name";

const ALL_KEYS: [&str; 4] = [TOKEN_KEY, LEGACY_TOKEN_KEY, EMAIL_KEY, NAME_KEY];

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    #[error("session file io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

// =============================================================================
// STORES
// =============================================================================

/// Durable string key/value storage backing a [`Session`].
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// JSON-object file store. A missing file reads as empty; the file is
/// rewritten whole on every change and deleted once it becomes empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// What a successful login or registration hands to [`Session::begin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionGrant {
    pub token: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Non-secret identity details kept alongside the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionProfile {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("authenticated", &self.is_authenticated()).finish()
    }
}

impl Session {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Current token, if any. Storage failures read as "signed out".
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let read = |key| match self.store.get(key) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, key, "session storage read failed");
                None
            }
        };
        read(TOKEN_KEY).or_else(|| read(LEGACY_TOKEN_KEY))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    #[must_use]
    pub fn profile(&self) -> SessionProfile {
        SessionProfile {
            email: self.store.get(EMAIL_KEY).ok().flatten(),
            name: self.store.get(NAME_KEY).ok().flatten(),
        }
    }

    /// Persist a freshly issued token and its identity details.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store rejects the write.
    pub fn begin(&self, grant: &SessionGrant) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, &grant.token)?;
        self.store.remove(LEGACY_TOKEN_KEY)?;
        for (key, value) in [(EMAIL_KEY, &grant.email), (NAME_KEY, &grant.name)] {
            match value {
                Some(value) => self.store.set(key, value)?,
                None => self.store.remove(key)?,
            }
        }
        Ok(())
    }

    /// Clear every session key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store rejects a removal.
    pub fn end(&self) -> Result<(), StoreError> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
