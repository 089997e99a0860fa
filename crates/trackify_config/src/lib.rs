// --- File: crates/trackify_config/src/lib.rs ---

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, in override order: `config/default`, `config/{RUN_ENV}` (both
/// optional), then environment variables prefixed with `TRACKIFY` using `__`
/// as the section separator (e.g. `TRACKIFY_API__BASE_URL`). Every field has
/// a default, so a missing config directory still yields a usable config.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "TRACKIFY".to_string());

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Loads `.env` once per process. Later calls are no-ops, so every crate can
/// call this without worrying about ordering.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        if dotenv::dotenv().is_err() {
            tracing::debug!("no .env file found; using process environment as-is");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://vipreshana-3.onrender.com");
        assert_eq!(config.storage.path, "trackify_store.json");
    }

    #[test]
    fn deserializes_from_partial_sources() {
        // Only the api section supplied; storage falls back to defaults.
        let config: AppConfig =
            serde_json::from_str(r#"{"api":{"base_url":"http://localhost:3001"}}"#).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert_eq!(config.storage.path, "trackify_store.json");
    }
}
