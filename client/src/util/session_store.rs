//! Durable session cache: bearer token + serialized user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth state machine and the API client both read and write through
//! [`SessionStore`]. In the browser the backing medium is `localStorage`, so
//! a session survives reloads but not a different browser profile.
//!
//! ERROR HANDLING
//! ==============
//! Storage never reports errors. An unavailable medium or an unparseable user
//! record reads back as "absent", which callers treat as "no session".

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::User;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// `localStorage` key holding the JSON-encoded [`User`].
pub const USER_KEY: &str = "authUser";

/// Snapshot of whatever is currently stored. Each field is independent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Key/value persistence for the two session fields. Last write wins.
pub trait SessionStore {
    /// Read both fields.
    fn load(&self) -> StoredSession;

    /// Write token and user together.
    fn save(&mut self, token: &str, user: &User);

    /// Rewrite the user record, leaving the token as is.
    fn save_user(&mut self, user: &User);

    /// Remove both fields.
    fn clear(&mut self);

    /// Current token, if any.
    fn token(&self) -> Option<String> {
        self.load().token
    }
}

fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

// =============================================================
// Browser storage
// =============================================================

/// Store backed by `window.localStorage`.
///
/// Outside the browser (SSR render, native tests) it reads as empty and drops
/// writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn write_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> StoredSession {
        StoredSession {
            token: read_item(TOKEN_KEY),
            user: read_item(USER_KEY).as_deref().and_then(decode_user),
        }
    }

    fn save(&mut self, token: &str, user: &User) {
        write_item(TOKEN_KEY, token);
        self.save_user(user);
    }

    fn save_user(&mut self, user: &User) {
        if let Some(raw) = encode_user(user) {
            write_item(USER_KEY, &raw);
        }
    }

    fn clear(&mut self) {
        remove_item(TOKEN_KEY);
        remove_item(USER_KEY);
    }
}

// =============================================================
// In-memory storage
// =============================================================

/// Store kept entirely in memory. The user is held in its encoded form so a
/// corrupt record behaves exactly as it would in `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    token: Option<String>,
    user_raw: Option<String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw values, as if written by an earlier session.
    #[must_use]
    pub fn with_raw(token: Option<&str>, user_raw: Option<&str>) -> Self {
        Self { token: token.map(str::to_owned), user_raw: user_raw.map(str::to_owned) }
    }

    /// Seed the store with a complete session.
    #[must_use]
    pub fn with_session(token: &str, user: &User) -> Self {
        let mut store = Self::new();
        store.save(token, user);
        store
    }

    /// True when neither field is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user_raw.is_none()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> StoredSession {
        StoredSession {
            token: self.token.clone(),
            user: self.user_raw.as_deref().and_then(decode_user),
        }
    }

    fn save(&mut self, token: &str, user: &User) {
        self.token = Some(token.to_owned());
        self.save_user(user);
    }

    fn save_user(&mut self, user: &User) {
        if let Some(raw) = encode_user(user) {
            self.user_raw = Some(raw);
        }
    }

    fn clear(&mut self) {
        self.token = None;
        self.user_raw = None;
    }
}
