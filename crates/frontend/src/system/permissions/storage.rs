use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;
use web_sys::window;

/// Key under which the current user's permissions are kept
pub const PERMISSIONS_STORAGE_KEY: &str = "user_permissions";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// String key-value store with localStorage semantics
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(&self) -> Result<web_sys::Storage, StoreError> {
        window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|e| StoreError::Operation(format!("{:?}", e)))?
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Operation(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Operation(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.local_storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Operation(format!("{:?}", e)))
    }
}

/// In-process store for tests and hosts without a browser
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);

        store.set_item("k", "v1").unwrap();
        store.set_item("k", "v2").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);

        store.remove_item("k").unwrap();
        assert!(store.is_empty());
        // removing a missing key is fine
        store.remove_item("k").unwrap();
    }
}
