//! # `localStorage` backend — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It is a zero-size handle that looks up `window.localStorage` on every call,
//! so it is `Copy` and can be created anywhere without threading a handle
//! through components.
//!
//! ## Error handling
//!
//! Storage can be unavailable (privacy mode, quota exceeded, sandboxed
//! iframes). Reads then return `None` and writes are dropped with a warning;
//! the finance book falls back to its seed state in that case.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
