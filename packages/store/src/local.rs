//! # localStorage session store: browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It writes straight into `window.localStorage`, so the session
//! survives page reloads exactly like any other browser-persisted setting.
//!
//! ## Error handling
//!
//! `localStorage` can be unavailable (private browsing, storage quota, a
//! sandboxed iframe). Every failure is logged and otherwise ignored: reads
//! return `None` and writes do nothing, which leaves the user anonymous after
//! a reload rather than breaking the page.

use web_sys::Storage;

use crate::session::SessionStore;

/// `window.localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("Failed to write {key} to localStorage: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {key} from localStorage: {e:?}");
        }
    }
}
