//! # Session persistence over an abstract key-value store
//!
//! A signed-in session survives reloads by writing two entries:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`@GoBarber:token`) | the bearer token, verbatim |
//! | [`USER_KEY`] (`@GoBarber:user`) | the user record as JSON |
//!
//! [`SessionStore`] owns that layout. The actual storage is a [`KeyValueStore`]:
//! browser `localStorage` on the web ([`crate::LocalStore`]), a JSON file on
//! native platforms ([`crate::FileStore`]), or memory in tests
//! ([`crate::MemoryStore`]).
//!
//! A session is only restored when both entries are present and the user record
//! parses. Anything else is treated as signed out; a corrupt record is logged.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const TOKEN_KEY: &str = "@GoBarber:token";
pub const USER_KEY: &str = "@GoBarber:user";

/// String key-value storage. Writes are best-effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// A session read back from storage.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession<U> {
    pub token: String,
    pub user: U,
}

/// Reads and writes the persisted session credential.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Restore the persisted session, if there is a complete one.
    pub fn load<U: DeserializeOwned>(&self) -> Option<StoredSession<U>> {
        let token = self.store.get(TOKEN_KEY)?;
        let raw_user = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw_user) {
            Ok(user) => Some(StoredSession { token, user }),
            Err(e) => {
                tracing::warn!("Discarding stored user record: {}", e);
                None
            }
        }
    }

    /// Persist a freshly created session.
    pub fn save<U: Serialize>(&self, token: &str, user: &U) {
        self.store.set(TOKEN_KEY, token);
        self.save_user(user);
    }

    /// Replace the stored user, keeping the token.
    pub fn save_user<U: Serialize>(&self, user: &U) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => tracing::warn!("Failed to serialise user record: {}", e),
        }
    }

    /// Forget the session.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct User {
        id: String,
        name: String,
    }

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "John Doe".to_string(),
        }
    }

    #[test]
    fn test_empty_store_has_no_session() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.load::<User>().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save("jwt", &user());

        let restored: StoredSession<User> = sessions.load().unwrap();
        assert_eq!(restored.token, "jwt");
        assert_eq!(restored.user, user());
        assert_eq!(sessions.inner().get(TOKEN_KEY).as_deref(), Some("jwt"));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save("jwt", &user());
        sessions.clear();

        assert!(sessions.load::<User>().is_none());
        assert!(sessions.inner().get(TOKEN_KEY).is_none());
        assert!(sessions.inner().get(USER_KEY).is_none());
    }

    #[test]
    fn test_token_without_user_is_signed_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "jwt");
        let sessions = SessionStore::new(store);
        assert!(sessions.load::<User>().is_none());
    }

    #[test]
    fn test_corrupt_user_is_signed_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "jwt");
        store.set(USER_KEY, "{not json");
        let sessions = SessionStore::new(store);
        assert!(sessions.load::<User>().is_none());
    }

    #[test]
    fn test_save_user_keeps_token() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save("jwt", &user());

        let renamed = User {
            name: "Johnny Doe".to_string(),
            ..user()
        };
        sessions.save_user(&renamed);

        let restored: StoredSession<User> = sessions.load().unwrap();
        assert_eq!(restored.token, "jwt");
        assert_eq!(restored.user.name, "Johnny Doe");
    }
}
