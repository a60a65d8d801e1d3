//! In-memory store implementation.
//!
//! Useful for unit tests and ephemeral sessions. The whole store lives in a
//! `BTreeMap<String, String>`.

use std::collections::BTreeMap;

use startpage_types::error::Result;

use crate::KeyValueStore;

/// A fully in-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("quickLinks"), None);
    }

    #[test]
    fn set_and_get() {
        let mut store = MemoryStore::new();
        store.set("background", "#202030").unwrap();
        assert_eq!(store.get("background").as_deref(), Some("#202030"));
    }

    #[test]
    fn set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("k", "old").unwrap();
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("new"));
    }

    #[test]
    fn remove_key() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn remove_absent_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("ghost").is_ok());
    }

    #[test]
    fn keys_sorted() {
        let mut store = MemoryStore::new();
        store.set("b", "2").unwrap();
        store.set("a", "1").unwrap();
        assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn empty_value_is_stored() {
        let mut store = MemoryStore::new();
        store.set("k", "").unwrap();
        assert_eq!(store.get("k").as_deref(), Some(""));
    }

    #[test]
    fn unicode_values() {
        let mut store = MemoryStore::new();
        store.set("k", "\u{1F600} émoji").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("\u{1F600} émoji"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn set_then_get_roundtrips(key in "[a-zA-Z]{1,16}", value in ".{0,64}") {
                let mut store = MemoryStore::new();
                store.set(&key, &value).unwrap();
                prop_assert_eq!(store.get(&key), Some(value));
            }

            #[test]
            fn remove_then_absent(key in "[a-zA-Z]{1,16}") {
                let mut store = MemoryStore::new();
                store.set(&key, "x").unwrap();
                store.remove(&key).unwrap();
                prop_assert_eq!(store.get(&key), None);
            }
        }
    }
}
