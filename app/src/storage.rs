//! `localStorage`-backed key-value store.

use encounters_types::{KeyValueStore, StoreError};
use web_sys::Storage;

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the window's `localStorage`.
    ///
    /// Returns `None` when storage is disabled (private mode, sandboxed frame).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
            })
    }
}
