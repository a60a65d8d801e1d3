//! Quick-link persistence.
//!
//! Custom links live under one store key as a JSON array. Reads are
//! fail-soft: a corrupt value is logged and treated as empty so the page
//! always comes up.

use log::warn;
use serde::{Deserialize, Serialize};
use startpage_types::error::Result;

use crate::store::KeyValueStore;

/// Store key for user-added links.
pub const QUICK_LINKS_KEY: &str = "quickLinks";

/// One entry in the quick-link grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub title: String,
    pub url: String,
}

impl QuickLink {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// Load the custom link set. Missing or corrupt data yields an empty list.
pub fn load_links(store: &dyn KeyValueStore) -> Vec<QuickLink> {
    let Some(raw) = store.get(QUICK_LINKS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<QuickLink>>(&raw) {
        Ok(links) => links,
        Err(e) => {
            warn!("corrupt quick-link data: {e}; starting empty");
            Vec::new()
        }
    }
}

/// Persist the full custom link set.
pub fn save_links(store: &mut dyn KeyValueStore, links: &[QuickLink]) -> Result<()> {
    let raw = serde_json::to_string(links)?;
    store.set(QUICK_LINKS_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(load_links(&store).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let links = vec![
            QuickLink::new("Docs", "https://doc.rust-lang.org"),
            QuickLink::new("News", "https://news.ycombinator.com"),
        ];
        save_links(&mut store, &links).unwrap();
        assert_eq!(load_links(&store), links);
    }

    #[test]
    fn corrupt_json_is_treated_as_empty() {
        let mut store = MemoryStore::new();
        store.set(QUICK_LINKS_KEY, "{not json").unwrap();
        assert!(load_links(&store).is_empty());
    }

    #[test]
    fn wrong_shape_is_treated_as_empty() {
        let mut store = MemoryStore::new();
        store.set(QUICK_LINKS_KEY, r#"{"title":"x"}"#).unwrap();
        assert!(load_links(&store).is_empty());
    }

    #[test]
    fn saving_empty_list_clears_previous() {
        let mut store = MemoryStore::new();
        save_links(&mut store, &[QuickLink::new("A", "https://a.example")]).unwrap();
        save_links(&mut store, &[]).unwrap();
        assert!(load_links(&store).is_empty());
    }

    #[test]
    fn stored_form_is_a_json_array() {
        let mut store = MemoryStore::new();
        save_links(&mut store, &[QuickLink::new("A", "https://a.example")]).unwrap();
        let raw = store.get(QUICK_LINKS_KEY).unwrap();
        assert_eq!(
            raw,
            r#"[{"title":"A","url":"https://a.example"}]"#
        );
    }
}
