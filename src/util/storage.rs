//! Durable session storage.
//!
//! The browser's `localStorage` holds three keys — token, serialized user,
//! role — that together form the persisted session. Access goes through the
//! `SessionStore` trait so tests (and server-side rendering) can substitute
//! an in-memory store without touching real storage.
//!
//! The three keys are treated as a unit: `save_session` writes all of them,
//! `clear_session` removes all of them, and `load_session` returns `None`
//! unless every part is present and consistent.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::session::{Role, Session, SessionUser};

const TOKEN_KEY: &str = "lectern_token";
const USER_KEY: &str = "lectern_user";
const ROLE_KEY: &str = "lectern_role";

/// Key-value storage for the session triple.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used by tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Browser `localStorage` store. All operations are best-effort: storage can
/// be unavailable (private browsing, disabled cookies) and the app must keep
/// working with an in-memory session only.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Persist an established session as one logical write.
pub fn save_session<S: SessionStore + ?Sized>(store: &S, session: &Session) {
    let user_json = match serde_json::to_string(&session.user) {
        Ok(json) => json,
        Err(_) => return,
    };
    store.set(TOKEN_KEY, &session.token);
    store.set(USER_KEY, &user_json);
    store.set(ROLE_KEY, session.role.as_str());
}

/// Load the persisted session, if every part is present and parseable.
///
/// A partial or corrupt session (token without role, unknown role string,
/// unparseable user record) yields `None`; the caller treats that as
/// logged out and the next login overwrites the remnants.
pub fn load_session<S: SessionStore + ?Sized>(store: &S) -> Option<Session> {
    let token = store.get(TOKEN_KEY)?;
    if token.is_empty() {
        return None;
    }
    let role = Role::parse(&store.get(ROLE_KEY)?).ok()?;
    let user: SessionUser = serde_json::from_str(&store.get(USER_KEY)?).ok()?;
    Some(Session { token, user, role })
}

/// Remove every session key. Safe to call when no session is stored.
pub fn clear_session<S: SessionStore + ?Sized>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
    store.remove(ROLE_KEY);
}
