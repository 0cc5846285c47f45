//! Platform-specific session storage and configuration loading.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`],
//!   backend URL baked in at build time from `VOYAGES_BACKEND_URL`.
//! - **Desktop** (native): one file per key under `<data_dir>/voyages/session/`
//!   via [`store::FileStore`], configuration from
//!   `<config_dir>/voyages/voyages.toml` overridden by the environment.

use store::ClientConfig;

/// Create the session store for the current platform.
pub fn make_session_store() -> impl store::SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("voyages")
            .join("session");
        store::FileStore::new(base)
    }
}

/// Resolve the client configuration for the current platform.
pub fn load_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        use store::config::BACKEND_URL_ENV;

        ClientConfig::default().apply_env(|key| match key {
            BACKEND_URL_ENV => option_env!("VOYAGES_BACKEND_URL").map(str::to_string),
            _ => None,
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let file_config = dirs::config_dir()
            .map(|dir| dir.join("voyages").join(ClientConfig::filename()))
            .and_then(|path| read_config_file(&path));
        file_config
            .unwrap_or_default()
            .apply_env(|key| std::env::var(key).ok())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file(path: &std::path::Path) -> Option<ClientConfig> {
    let text = std::fs::read_to_string(path).ok()?;
    match ClientConfig::from_toml(&text) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
            None
        }
    }
}
