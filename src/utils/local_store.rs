use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PortalResult;

pub const HOLIDAYS_KEY: &str = "holidays_v1";
pub const CHAT_MESSAGES_KEY: &str = "chat_messages_v1";

/// Flat key → JSON blob store, one `<key>.json` file per key.
/// Single writer assumed; no locking and no transactions.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn open(dir: impl Into<PathBuf>) -> PortalResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Raw blob, `None` if the key was never written or can't be read.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read store key {}: {}", key, e);
                None
            }
        }
    }

    /// Decoded value, `None` when missing or malformed.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Discarding malformed store key {}: {}", key, e);
                None
            }
        }
    }

    /// Like [`load`](Self::load) but falls back to an empty collection.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load(key).unwrap_or_default()
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> PortalResult<()> {
        let raw = serde_json::to_string(value)?;
        fs::write(self.path_for(key), raw)?;
        log::debug!("Saved store key {}", key);
        Ok(())
    }

    pub fn remove(&self, key: &str) -> PortalResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_loads_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();

        let list: Vec<String> = store.load_or_default("nothing_here");
        assert!(list.is_empty());
        assert!(store.get_raw("nothing_here").is_none());
    }

    #[test]
    fn malformed_blob_is_replaced_by_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();
        fs::write(tmp.path().join("holidays_v1.json"), "{not json").unwrap();

        let list: Vec<u32> = store.load_or_default(HOLIDAYS_KEY);
        assert!(list.is_empty());
    }

    #[test]
    fn save_then_load_and_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalStore::open(tmp.path().join("nested")).unwrap();

        store.save("numbers", &vec![3, 1, 2]).unwrap();
        assert_eq!(store.load::<Vec<i32>>("numbers"), Some(vec![3, 1, 2]));

        store.remove("numbers").unwrap();
        store.remove("numbers").unwrap();
        assert_eq!(store.load::<Vec<i32>>("numbers"), None);
    }
}
