use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::domain::{errors::StorageError, history::KeyValueStore, logging::LogComponent};
use crate::log_warn;

/// `window.localStorage`
pub struct BrowserLocalStorage {
    storage: Storage,
}

impl BrowserLocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window not available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }

    /// Remove `key`; used to reset pages between browser tests.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Write(js_error_message(&e)))
    }
}

impl KeyValueStore for BrowserLocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(js_error_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_error_message(&e)))
    }
}

/// Process-local map; stands in for `localStorage` in tests and when the
/// browser refuses storage access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `localStorage` when the browser grants it, otherwise an in-memory map so
/// the page keeps working without persistence.
pub fn open_page_storage() -> Box<dyn KeyValueStore> {
    match BrowserLocalStorage::new() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log_warn!(
                LogComponent::Infrastructure("Storage"),
                "falling back to in-memory history: {}",
                e
            );
            Box::new(InMemoryStore::new())
        }
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
