//! JSON-file-backed key/value store
//!
//! One flat JSON object on disk, loaded at open and written through on every
//! `set`. This is the application's stand-in for browser local storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;
use tracing::debug;

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// A key/value store persisted as a single JSON object file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cells: Mutex<BTreeMap<String, Value>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading its current contents. A missing file
    /// starts the store empty; it is created on the first `set`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let cells = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            debug!("store file {} not found, starting empty", path.display());
            BTreeMap::new()
        };
        Ok(Self {
            path,
            cells: Mutex::new(cells),
        })
    }

    fn persist(&self, cells: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(cells)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let cells = self.cells.lock().expect("store mutex poisoned");
        Ok(cells.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut cells = self.cells.lock().expect("store mutex poisoned");
        cells.insert(key.to_string(), value);
        self.persist(&cells)
    }
}
