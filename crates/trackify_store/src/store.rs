//! Key/value store trait
//!
//! This module defines the storage trait the booking view is written against.
//! It is deliberately narrow (`get`/`set` over JSON values) so that any
//! backend works: a JSON file in the real app, a map in tests.

use serde_json::Value;

use crate::error::StoreError;

/// A process-wide persistent key/value store.
///
/// There is no concurrent writer in the application, so no transactional
/// guarantees are offered; `set` overwrites any previous value for the key.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}
