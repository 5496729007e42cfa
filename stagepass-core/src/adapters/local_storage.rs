//! Local storage emulation - a JSON file holding a string-to-string map
//!
//! A browser-`localStorage`-shaped store: string keys, string values,
//! whole-store snapshot semantics. Every operation re-reads the file and
//! every write re-serializes the full map. No locking or transactions:
//! two near-simultaneous writers can overwrite each other's snapshot,
//! an accepted limitation of this store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::result::{Error, Result};

/// A `localStorage`-shaped key-value store backed by one JSON file
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value stored under `key`, if any
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.read_map().remove(key)
    }

    /// Store `value` under `key`, rewriting the whole map
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    /// Remove `key`; removing an absent key is a no-op
    pub fn remove_item(&self, key: &str) -> Result<()> {
        let mut map = self.read_map();
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }

    /// Read the current snapshot. A missing or unparseable file yields an
    /// empty map; the parse failure is reported on stderr only.
    fn read_map(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("[stagepass] Unreadable storage file {:?}: {}", self.path, e);
                BTreeMap::new()
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, content).map_err(|e| {
            Error::storage(format!("failed to write {:?}: {}", self.path, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(&dir.path().join("storage.json"));

        assert_eq!(storage.get_item("stagepass.theme"), None);
        storage.set_item("stagepass.theme", "light").unwrap();
        assert_eq!(storage.get_item("stagepass.theme").as_deref(), Some("light"));

        storage.remove_item("stagepass.theme").unwrap();
        assert_eq!(storage.get_item("stagepass.theme"), None);
    }

    #[test]
    fn test_removing_absent_key_is_noop() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(&dir.path().join("storage.json"));
        storage.remove_item("never-set").unwrap();
        // Still no file needed
        assert_eq!(storage.get_item("never-set"), None);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json{{{").unwrap();

        let storage = LocalStorage::new(&path);
        assert_eq!(storage.get_item("anything"), None);

        // Writes recover the file
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_writes_keep_other_keys() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(&dir.path().join("storage.json"));
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        storage.remove_item("a").unwrap();
        assert_eq!(storage.get_item("b").as_deref(), Some("2"));
    }
}
