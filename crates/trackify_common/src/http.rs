// --- File: crates/trackify_common/src/http.rs ---

pub mod client;
