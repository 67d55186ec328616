//! Shared session store constructor for all platforms.
//!
//! [`PlatformStore`] is the [`store::KeyValueStore`] the auth context persists to:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Native**: a JSON file via [`store::FileStore`]
//! - **WASM without `web`**: memory only, the session ends with the page

use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate session store.
pub fn make_session_store() -> SessionStore<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SessionStore::new(store::FileStore::default_location())
    }
}
