//! Key/value persistence used by the widgets' caches.
//!
//! The store contract mirrors browser `localStorage`: string keys, string
//! values, no atomicity. Two backends are provided:
//! - [`MemoryStore`] — always available; used natively and in tests.
//! - [`LocalStorage`] — `web_sys::Storage` (feature `storage-wasm`).

use std::collections::HashMap;

use crate::error::StorageError;

/// A string key/value store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

#[cfg(feature = "storage-wasm")]
pub use local::LocalStorage;

#[cfg(feature = "storage-wasm")]
mod local {
    use wasm_bindgen::JsValue;
    use web_sys::Storage;

    use super::KeyValueStore;
    use crate::error::StorageError;

    fn js_reason(value: JsValue) -> String {
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value))
    }

    /// Browser `window.localStorage`.
    pub struct LocalStorage {
        storage: Storage,
    }

    impl LocalStorage {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            let storage = window
                .local_storage()
                .map_err(|e| StorageError::Unavailable(js_reason(e)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage unavailable".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: js_reason(e),
            })
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: js_reason(e),
                })
        }

        fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
            self.storage.remove_item(key).map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: js_reason(e),
            })
        }
    }
}

/// Store that serves reads from a [`MemoryStore`] and rejects every write.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ReadOnlyStore(pub MemoryStore);

#[cfg(test)]
impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get_item(key)
    }

    fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v1").unwrap();
        store.set_item("k", "v2").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
        store.remove_item("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write_through<S: KeyValueStore>(mut store: S) {
            store.set_item("a", "1").unwrap();
        }

        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("1"));
    }
}
