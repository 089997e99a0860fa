// --- File: crates/trackify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Booking API Config ---
// Holds the remote booking service address. No secrets are involved; read
// access to the bookings endpoint is keyed only by phone number.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Base address of the booking service, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://vipreshana-3.onrender.com".to_string()
}

// --- Local Storage Config ---
// The file that stands in for browser local storage: identity record in,
// selected booking id out.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// Path of the JSON file backing the key/value store.
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    "trackify_store.json".to_string()
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}
