//! # Key/value storage — the browser `localStorage` contract
//!
//! Everything the portal keeps on the client side (the finance book and the
//! access token) is a UTF-8 string under a well-known key. [`KeyValueStore`]
//! captures exactly that contract so the finance and session code can run
//! against:
//!
//! | Backend | Where |
//! |---------|-------|
//! | [`crate::MemoryStore`] | tests, native builds |
//! | `LocalStorageStore` | WASM + `web` feature, wraps `window.localStorage` |
//!
//! `localStorage` is synchronous, so unlike a remote object store the trait
//! methods are plain functions. Writes never fail from the caller's point of
//! view: a full or disabled storage degrades to "nothing persisted".

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
