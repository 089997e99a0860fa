//! In-memory key/value store
//!
//! Test double for [`JsonFileStore`]. Also usable as an ephemeral store when
//! persistence is not wanted.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// A key/value store held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    cells: Mutex<BTreeMap<String, Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, bypassing the trait. Convenience for tests.
    pub fn seed(self, key: &str, value: Value) -> Self {
        self.cells
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value);
        self
    }

    /// The keys currently present, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.cells
            .lock()
            .expect("store mutex poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let cells = self.cells.lock().expect("store mutex poisoned");
        Ok(cells.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut cells = self.cells.lock().expect("store mutex poisoned");
        cells.insert(key.to_string(), value);
        Ok(())
    }
}
