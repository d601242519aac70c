// crates/portal-client/src/state.rs

//! Persisted client-local state.
//!
//! A small JSON file stands in for browser local storage. Keys are
//! strings with string values; the only key today is
//! `stock_sidebar_collapsed` ("true"/"false"). Load failures are not
//! fatal: a missing or corrupt file reads as empty.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

pub const SIDEBAR_COLLAPSED_KEY: &str = "stock_sidebar_collapsed";

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store, reading whatever is on disk. A file that is
    /// missing or does not parse yields an empty store.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("ignoring corrupt state file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        LocalStore { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a key and write the whole store back to disk.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("write state file {}", self.path.display()))
    }

    /// The persisted sidebar collapse flag; absent or malformed reads
    /// as expanded.
    pub fn sidebar_collapsed(&self) -> bool {
        self.get(SIDEBAR_COLLAPSED_KEY) == Some("true")
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> Result<()> {
        let value = if collapsed { "true" } else { "false" };
        self.set(SIDEBAR_COLLAPSED_KEY, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("portal_state_{}_{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn collapse_flag_round_trips_through_disk() {
        let path = temp_store_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut store = LocalStore::open(path.clone());
        assert!(!store.sidebar_collapsed());

        store.set_sidebar_collapsed(true).unwrap();
        drop(store);

        // Fresh open simulates a reload.
        let store = LocalStore::open(path.clone());
        assert!(store.sidebar_collapsed());
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), Some("true"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let path = temp_store_path("corrupt");
        fs::write(&path, "not json at all").unwrap();

        let store = LocalStore::open(path.clone());
        assert!(!store.sidebar_collapsed());

        let _ = fs::remove_file(&path);
    }
}
