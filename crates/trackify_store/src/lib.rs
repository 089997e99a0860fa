//! Local key/value storage for Trackify
//!
//! This crate provides the narrow abstraction over the browser-like local
//! storage the booking view depends on: read the persisted identity record,
//! write the selected booking id for the tracking view. The trait is small on
//! purpose so tests can swap in an in-memory fake.

pub mod error;
pub mod file;
pub mod keys;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use store::KeyValueStore;
