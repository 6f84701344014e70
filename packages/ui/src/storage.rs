//! Shared key/value store constructor for all platforms.
//!
//! Returns a [`store::KeyValueStore`] backed by the appropriate backend:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Host builds** (tests, tooling): a process-wide [`store::MemoryStore`]

use store::{FinanceBook, KeyValueStore};

/// Create the platform-appropriate store.
pub fn make_store() -> impl KeyValueStore + Clone + 'static {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static SHARED: OnceLock<store::MemoryStore> = OnceLock::new();
        SHARED.get_or_init(store::MemoryStore::new).clone()
    }
}

/// The finance book persisted in the platform store.
pub fn finance_book() -> FinanceBook<impl KeyValueStore + Clone + 'static> {
    FinanceBook::new(make_store())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_store_is_shared() {
        make_store().set("storage.test", "1");
        assert_eq!(make_store().get("storage.test").as_deref(), Some("1"));
        make_store().remove("storage.test");
        assert_eq!(make_store().get("storage.test"), None);
    }
}
