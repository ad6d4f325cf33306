//! Key-value persistence and the banner dismissal flag built on it.
//!
//! The browser build backs [`KeyValueStore`] with `localStorage`; tests and
//! browsers with storage disabled use [`MemoryStore`].

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("failed to write key {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn has(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory store, lost when the page goes away.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One-shot "banner dismissed" flag.
///
/// Only the presence of the key matters; the stored value is ignored.
pub struct BannerDismissal<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BannerDismissal<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Whether the banner was dismissed on an earlier visit.
    ///
    /// A store that cannot be read counts as "not dismissed".
    pub fn is_dismissed(&self) -> bool {
        self.store.has(&self.key).unwrap_or(false)
    }

    /// Persist the dismissal. Repeated calls leave the store as after the first.
    pub fn dismiss(&mut self) -> Result<(), StoreError> {
        if self.is_dismissed() {
            return Ok(());
        }
        self.store.set(&self.key, "true")
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "patreon-banner-dismissed";

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        assert!(!store.has("a").unwrap());

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
        assert!(store.has("a").unwrap());
    }

    #[test]
    fn test_fresh_banner_is_not_dismissed() {
        let banner = BannerDismissal::new(MemoryStore::new(), KEY);
        assert!(!banner.is_dismissed());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut banner = BannerDismissal::new(MemoryStore::new(), KEY);
        banner.dismiss().unwrap();
        banner.dismiss().unwrap();

        assert!(banner.is_dismissed());
        assert_eq!(banner.store().get(KEY).unwrap(), Some("true".to_string()));
    }

    #[test]
    fn test_any_value_counts_as_dismissed() {
        let mut store = MemoryStore::new();
        store.set(KEY, "").unwrap();
        let banner = BannerDismissal::new(store, KEY);
        assert!(banner.is_dismissed());
    }

    #[test]
    fn test_broken_store() {
        let mut banner = BannerDismissal::new(BrokenStore, KEY);
        assert!(!banner.is_dismissed());
        assert!(matches!(banner.dismiss(), Err(StoreError::Write { .. })));
    }
}
