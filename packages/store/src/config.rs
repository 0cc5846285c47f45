//! # Client configuration: `voyages.toml`
//!
//! Defines the TOML configuration the client reads at startup
//! (filename: [`ClientConfig::filename`] = `"voyages.toml"`). It tells the
//! client where the voyage backend lives and how many voyages to show per
//! page.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [list]
//! page_size = 10
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Provides builder helpers (`with_base_url`, `with_page_size`), TOML (de)serialisation, environment overrides and the canonical filename. |
//! | [`ApiConfig`] | API section: the backend `base_url`, default **`http://localhost:5000`**. |
//! | [`ListConfig`] | List section: `page_size`, default **10**. |
//!
//! All structs derive `Default` (with the production defaults) so that a
//! missing or empty config file is equivalent to the default configuration.
//!
//! ## Environment
//!
//! [`ClientConfig::apply_env`] overrides the base URL from
//! [`BACKEND_URL_ENV`] (`VOYAGES_BACKEND_URL`) when it is set and non-empty.
//! The lookup is injected so the web build can pass a compile-time value and
//! the desktop build a runtime one.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`ApiConfig::base_url`].
pub const BACKEND_URL_ENV: &str = "VOYAGES_BACKEND_URL";

const DEFAULT_PAGE_SIZE: usize = 10;

/// Top-level configuration stored in `voyages.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Voyage list settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Voyages per page. 0 falls back to the default.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.list.page_size = page_size;
        self
    }

    /// Effective page size, never zero.
    pub fn page_size(&self) -> usize {
        if self.list.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.list.page_size
        }
    }

    /// Override settings from the environment, using `lookup` to read variables.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(BACKEND_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "voyages.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
