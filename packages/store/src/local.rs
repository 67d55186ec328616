//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes the browser's `localStorage` through [`gloo_storage`].
//! Values are stored as raw strings (the token and the already-serialised user
//! JSON), so nothing is double-encoded.
//!
//! Storage can be unavailable (private browsing, quota exceeded). Reads then
//! return `None` and writes are dropped with a warning: a storage failure
//! costs the user a re-login after reload, never the current session.

use gloo_storage::{LocalStorage, Storage};

use crate::session::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!("Failed to write {} to localStorage: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
