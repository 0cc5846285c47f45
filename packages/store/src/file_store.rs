//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`SessionStore`] implementation that keeps each key in
//! its own file. It is used on desktop to retain the session across app
//! restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token      # raw token string
//! └── user       # JSON user record
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base (e.g.
//! `~/.local/share/voyages/session` on Linux).

use std::path::PathBuf;

use crate::session::SessionStore;

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to write session key {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.key_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::warn!("Failed to remove session key {key}: {e}");
            }
        }
    }
}
