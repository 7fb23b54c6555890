//! Key/value persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token, dashboard widget order and the cross-tab refresh
//! beacon all live in `localStorage`. Code that needs storage takes a
//! `KeyValueStore` so unit tests can run against `MemoryStore` while the
//! app uses `BrowserStorage`. Outside the browser `BrowserStorage` reads
//! nothing and drops writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const TOKEN_KEY: &str = "paybord.token";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage()
                && storage.set_item(key, value).is_err()
            {
                log::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Shared in-memory store. Clones see the same entries, which lets tests
/// stand in for two tabs sharing one `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

// =============================================================================
// JSON HELPERS
// =============================================================================

/// Load a JSON value stored under `key`. Missing or corrupt entries read as
/// `None`.
pub fn load_json_from<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring corrupt stored value for {key}: {e}");
            None
        }
    }
}

pub fn save_json_to<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => log::warn!("could not serialize value for {key}: {e}"),
    }
}

/// Load a JSON value from `localStorage`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    load_json_from(&BrowserStorage, key)
}

/// Save a JSON value to `localStorage`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    save_json_to(&BrowserStorage, key, value);
}

// =============================================================================
// SESSION TOKEN
// =============================================================================

/// Bearer token persisted by the last successful sign-in.
pub fn load_token() -> Option<String> {
    BrowserStorage.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn store_token(token: &str) {
    BrowserStorage.set(TOKEN_KEY, token);
}

pub fn clear_token() {
    BrowserStorage.remove(TOKEN_KEY);
}
