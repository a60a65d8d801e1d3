//! JSON-file-backed store implementation.
//!
//! The whole store is one JSON object on disk, loaded at open and rewritten
//! on every mutation. Values are small (two keys in practice), so the full
//! rewrite is cheap and keeps the on-disk state consistent at all times.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use startpage_types::error::Result;

use crate::KeyValueStore;

/// A key-value store persisted as a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, loading existing content if present.
    ///
    /// A missing file yields an empty store. A corrupt file also yields an
    /// empty store with a logged warning; the bad content is overwritten on
    /// the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!("corrupt store file {}: {e}; starting empty", path.display());
                    BTreeMap::new()
                },
            },
            Err(_) => BTreeMap::new(),
        };
        Ok(Self { path, entries })
    }

    /// The on-disk location of this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
