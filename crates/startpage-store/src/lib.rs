//! Local key-value storage abstraction.
//!
//! The page's persistent state is a small set of string-valued keys, the
//! analog of a browser's origin-scoped local storage. Implementations are
//! synchronous; callers treat reads and writes as immediate.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use startpage_types::error::Result;

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore {
    /// Read a value. `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write (or overwrite) a value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All keys present, in sorted order.
    fn keys(&self) -> Vec<String>;
}
