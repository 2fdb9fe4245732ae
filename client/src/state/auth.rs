//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. This is the single source of truth for
//! "who is signed in".
//!
//! DESIGN
//! ======
//! Three states: `Initializing` until the startup restore has finished, then
//! `Authenticated(user)` or `Unauthenticated`. Every transition writes through
//! to the [`SessionStore`] in the same call as the in-memory change, so the
//! two never disagree for a caller that reads both.
//!
//! TRADE-OFFS
//! ==========
//! A cached token + user pair is trusted at startup without asking the
//! server. Startup stays instant; a stale role is corrected the first time
//! the API answers 401 and the client's auth-failure hook logs the user out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{User, UserPatch};
use crate::util::session_store::{LocalStorageStore, SessionStore, StoredSession};

/// Authentication state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Startup restore has not finished; no routing decision may be made.
    #[default]
    Initializing,
    Authenticated(User),
    Unauthenticated,
}

impl AuthState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Initializing | Self::Unauthenticated => None,
        }
    }

    /// Persist `token` + `user` and become `Authenticated`, from any state.
    pub fn login<S: SessionStore>(&mut self, store: &mut S, token: &str, user: User) {
        store.save(token, &user);
        *self = Self::Authenticated(user);
    }

    /// Clear the store and become `Unauthenticated`, from any state.
    pub fn logout<S: SessionStore>(&mut self, store: &mut S) {
        store.clear();
        *self = Self::Unauthenticated;
    }

    /// Merge `patch` into the signed-in user and persist the result.
    ///
    /// Returns `false` (and leaves the store alone) when nobody is signed in.
    pub fn update_user<S: SessionStore>(&mut self, store: &mut S, patch: UserPatch) -> bool {
        let Self::Authenticated(user) = self else {
            return false;
        };
        user.apply(patch);
        store.save_user(user);
        true
    }
}

/// Startup restore: decide the first non-`Initializing` state from storage.
///
/// - token + user: trusted as is, no network call.
/// - token only: one `fetch_profile` call; success is persisted, any failure
///   clears the store. Neither write happens if the stored token changed
///   while the fetch was in flight.
/// - no token: `Unauthenticated` (a stray cached user is discarded).
pub async fn restore<S, F, Fut>(store: &mut S, fetch_profile: F) -> AuthState
where
    S: SessionStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<User, ApiError>>,
{
    let StoredSession { token, user } = store.load();
    let token = token.filter(|t| !t.is_empty());

    match (token, user) {
        (Some(_), Some(user)) => AuthState::Authenticated(user),
        (Some(token), None) => {
            let fetched = fetch_profile().await;
            // A login or logout may have rewritten the store during the fetch.
            let unchanged = store.token().as_deref() == Some(token.as_str());
            match fetched {
                Ok(user) => {
                    if unchanged {
                        store.save_user(&user);
                    }
                    AuthState::Authenticated(user)
                }
                Err(e) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("session restore failed: {e}");
                    #[cfg(not(feature = "hydrate"))]
                    let _ = e;
                    if unchanged {
                        store.clear();
                    }
                    AuthState::Unauthenticated
                }
            }
        }
        (None, user) => {
            if user.is_some() {
                store.clear();
            }
            AuthState::Unauthenticated
        }
    }
}

/// Copyable handle over the app-wide auth signal, provided as context.
///
/// Pages go through this handle so they never touch storage directly.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    #[must_use]
    pub fn new(state: RwSignal<AuthState>) -> Self {
        Self { state }
    }

    /// Underlying signal, for components that render from the whole state.
    #[must_use]
    pub fn signal(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(AuthState::is_loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn login(&self, token: &str, user: User) {
        self.state.update(|s| s.login(&mut LocalStorageStore, token, user));
    }

    pub fn logout(&self) {
        self.state.update(|s| s.logout(&mut LocalStorageStore));
    }

    pub fn update_user(&self, patch: UserPatch) {
        self.state.update(|s| {
            s.update_user(&mut LocalStorageStore, patch);
        });
    }

    /// Publish the outcome of [`restore`]. A transition that already
    /// happened while restoring (a login, or a 401 logout) wins.
    pub fn finish_restore(&self, restored: AuthState) {
        self.state.update(|s| {
            if s.is_loading() {
                *s = restored;
            }
        });
    }
}
