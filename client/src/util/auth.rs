//! Route-gating rules shared by the guard component and the root redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior, so the decision
//! is a pure function of the auth state. Role checks here are a navigation
//! convenience; the API enforces authorization on every endpoint.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";
pub const ADMIN_USERS_PATH: &str = "/admin/users";

/// Outcome of gating one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still initializing: show a neutral indicator, decide later.
    Wait,
    /// Replace the current location with this path.
    Redirect(&'static str),
    /// Render the requested page.
    Allow,
}

/// Gate a navigation. An empty `required_roles` admits any signed-in role;
/// signed-in users lacking a required role land on their profile.
#[must_use]
pub fn guard_decision(state: &AuthState, required_roles: &[Role]) -> GuardDecision {
    match state {
        AuthState::Initializing => GuardDecision::Wait,
        AuthState::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
        AuthState::Authenticated(user) => {
            if required_roles.is_empty() || required_roles.contains(&user.role) {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(PROFILE_PATH)
            }
        }
    }
}

/// Landing page for a signed-in role.
#[must_use]
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_USERS_PATH,
        Role::User => PROFILE_PATH,
    }
}

/// Where `/` sends the visitor, or `None` while auth is initializing.
#[must_use]
pub fn home_path(state: &AuthState) -> Option<&'static str> {
    match state {
        AuthState::Initializing => None,
        AuthState::Unauthenticated => Some(LOGIN_PATH),
        AuthState::Authenticated(user) => Some(landing_path(user.role)),
    }
}
