//! # Session persistence
//!
//! A [`Session`] is the authenticated user plus the bearer token issued at
//! login. It is written to a [`SessionStore`] under two well-known keys so it
//! survives reloads:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | raw token string |
//! | [`USER_KEY`] (`"user"`) | JSON-serialised [`UserInfo`] |
//!
//! [`SessionStore`] is synchronous, matching browser `localStorage`.
//! Implementations live in sibling modules: [`crate::MemoryStore`],
//! [`crate::FileStore`] and, on the web, `crate::LocalStore`. They log and
//! swallow storage failures; an unusable store reads as anonymous.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// String key/value storage used to persist the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The authenticated user and token pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Rehydrate a session from storage.
    ///
    /// Returns `None` when nothing is stored. A partial or unreadable session
    /// is removed so the next load starts clean.
    pub fn load(store: &(impl SessionStore + ?Sized)) -> Option<Self> {
        let token = store.get(TOKEN_KEY);
        let user = store.get(USER_KEY);

        match (token, user) {
            (None, None) => None,
            (Some(token), Some(user)) if !token.is_empty() => {
                match serde_json::from_str::<UserInfo>(&user) {
                    Ok(user) => Some(Self { token, user }),
                    Err(e) => {
                        tracing::warn!("Discarding stored session, user is unreadable: {e}");
                        Self::clear(store);
                        None
                    }
                }
            }
            _ => {
                tracing::warn!("Discarding incomplete stored session");
                Self::clear(store);
                None
            }
        }
    }

    /// Write both session keys.
    pub fn persist(&self, store: &(impl SessionStore + ?Sized)) {
        match serde_json::to_string(&self.user) {
            Ok(user) => {
                store.set(TOKEN_KEY, &self.token);
                store.set(USER_KEY, &user);
            }
            Err(e) => tracing::warn!("Failed to serialise session user: {e}"),
        }
    }

    /// Remove both session keys.
    pub fn clear(store: &(impl SessionStore + ?Sized)) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }
}
