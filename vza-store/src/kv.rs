//! Key-value persistence for small named string lists.

use log::warn;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Durable storage of named string lists, the only persistence the app
/// needs. Implementations must make a completed `set_list` visible to a
/// fresh reader after a process restart.
pub trait KeyValue {
    fn get_list(&self, key: &str) -> io::Result<Vec<String>>;
    fn set_list(&self, key: &str, values: &[String]) -> io::Result<()>;
}

/// Single-file JSON backend: one object mapping keys to string arrays.
///
/// Writes rewrite the whole file, which is fine at this scale (tens of
/// entries). A missing file reads as empty; an unreadable one is replaced
/// on the next write rather than wedging every mutation.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> io::Result<BTreeMap<String, Vec<String>>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error),
        }
    }
}

impl KeyValue for JsonFileStore {
    fn get_list(&self, key: &str) -> io::Result<Vec<String>> {
        Ok(self.read_map()?.get(key).cloned().unwrap_or_default())
    }

    fn set_list(&self, key: &str, values: &[String]) -> io::Result<()> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(error) => {
                warn!(
                    "resetting unreadable list store {}: {}",
                    self.path.display(),
                    error
                );
                BTreeMap::new()
            }
        };
        map.insert(key.to_string(), values.to_vec());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)
    }
}

/// In-memory backend for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, mimicking state left by an earlier run.
    pub fn with_list(self, key: &str, values: &[&str]) -> Self {
        let owned = values.iter().map(|v| v.to_string()).collect();
        self.map
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), owned);
        self
    }
}

impl KeyValue for MemoryStore {
    fn get_list(&self, key: &str) -> io::Result<Vec<String>> {
        Ok(self
            .map
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .unwrap_or_default())
    }

    fn set_list(&self, key: &str, values: &[String]) -> io::Result<()> {
        self.map
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), values.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonFileStore, KeyValue, MemoryStore};

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("lists.json"));

        assert!(store.get_list("favorites").unwrap().is_empty());

        store
            .set_list("favorites", &["Budapest-Duna".to_string()])
            .unwrap();
        store.set_list("other", &["x".to_string()]).unwrap();

        assert_eq!(store.get_list("favorites").unwrap(), vec!["Budapest-Duna"]);
        // Writing one key leaves the others alone.
        assert_eq!(store.get_list("other").unwrap(), vec!["x"]);
    }

    #[test]
    fn json_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lists.json");

        JsonFileStore::new(&path)
            .set_list("favorites", &["Szeged-Tisza".to_string()])
            .unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get_list("favorites").unwrap(), vec!["Szeged-Tisza"]);
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new().with_list("favorites", &["a", "b"]);
        assert_eq!(store.get_list("favorites").unwrap(), vec!["a", "b"]);
        store.set_list("favorites", &[]).unwrap();
        assert!(store.get_list("favorites").unwrap().is_empty());
    }
}
