use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::StoreError;

/// File backed key-value store holding user preferences between runs.
///
/// This is the persisted analog of browser local storage: plain string keys
/// and values, no validation and no expiry. Every set is written through to
/// disk immediately so both later gets and later runs observe the value.
pub struct PrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PrefStore {
    /// Opens the store from the given file, an absent file yields an empty store
    ///
    /// # Arguments
    ///
    /// * 'store_file' - path to the store file
    pub fn open(store_file: &str) -> Result<PrefStore, StoreError> {
        let path = PathBuf::from(store_file);

        let values = if Path::new(store_file).exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json)?
        } else {
            BTreeMap::new()
        };

        Ok(PrefStore { path, values })
    }

    /// Returns the stored value for a key, or None when the key was never set
    ///
    /// # Arguments
    ///
    /// * 'key' - name of the preference key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    /// Stores a value under a key and writes the store file
    ///
    /// # Arguments
    ///
    /// * 'key' - name of the preference key
    /// * 'value' - value to store
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> String {
        dir.path().join("prefs.json").to_str().unwrap().to_string()
    }

    #[test]
    fn get_sees_set_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PrefStore::open(&store_path(&dir)).unwrap();

        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut store = PrefStore::open(&path).unwrap();
        store.set("units", "fahrenheit").unwrap();
        drop(store);

        let reopened = PrefStore::open(&path).unwrap();
        assert_eq!(reopened.get("units"), Some("fahrenheit"));
    }

    #[test]
    fn absent_file_gives_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(&store_path(&dir)).unwrap();
        assert_eq!(store.get("defaultCity"), None);
    }
}
