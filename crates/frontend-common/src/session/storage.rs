//! Durable key/value backends for the session

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// A failed write to the backing store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to write storage key {key}: {message}")]
pub struct StorageError {
    pub key: String,
    pub message: String,
}

/// String key/value storage the session is mirrored into.
///
/// Reads never fail: an unavailable backend reads as empty.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-process storage for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, e.g. to simulate what a previous page load left behind
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`
///
/// Values are stored raw (no JSON quoting) so the token entry stays a plain
/// string.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let error = |message: String| StorageError {
            key: key.to_string(),
            message,
        };

        Self::raw()
            .ok_or_else(|| error("localStorage is unavailable".to_string()))?
            .set_item(key, value)
            .map_err(|err| error(format!("{err:?}")))
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::raw() else {
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            tracing::warn!(key, error = ?err, "Failed to remove storage key");
        }
    }
}

/// Local storage in the browser, memory elsewhere
pub fn default_storage() -> Rc<dyn SessionStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::with_entries([("token", "abc")]);
        assert_eq!(storage.get("token").as_deref(), Some("abc"));
        assert_eq!(storage.get("user"), None);

        storage.set("user", "{}").unwrap();
        assert_eq!(storage.len(), 2);

        storage.remove("token");
        storage.remove("token");
        assert_eq!(storage.get("token"), None);
        assert_eq!(storage.len(), 1);
    }
}
