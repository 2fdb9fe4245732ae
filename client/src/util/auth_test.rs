use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::User;
use crate::state::auth::restore;
use crate::util::session_store::MemorySessionStore;

fn make_user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        created_at: None,
        updated_at: None,
        last_login_at: None,
    }
}

fn restored(store: &mut MemorySessionStore) -> AuthState {
    block_on(restore(store, || async { Err(ApiError::Network("offline".to_owned())) }))
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn waits_while_initializing() {
    assert_eq!(guard_decision(&AuthState::Initializing, &[]), GuardDecision::Wait);
    assert_eq!(guard_decision(&AuthState::Initializing, &[Role::Admin]), GuardDecision::Wait);
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(guard_decision(&AuthState::Unauthenticated, &[]), GuardDecision::Redirect("/login"));
    assert_eq!(
        guard_decision(&AuthState::Unauthenticated, &[Role::User, Role::Admin]),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn empty_role_set_admits_any_signed_in_user() {
    for role in [Role::Admin, Role::User] {
        let state = AuthState::Authenticated(make_user(role));
        assert_eq!(guard_decision(&state, &[]), GuardDecision::Allow);
    }
}

#[test]
fn user_role_on_admin_route_lands_on_profile() {
    let state = AuthState::Authenticated(make_user(Role::User));
    assert_eq!(guard_decision(&state, &[Role::Admin]), GuardDecision::Redirect("/profile"));
}

#[test]
fn matching_role_is_allowed() {
    let admin = AuthState::Authenticated(make_user(Role::Admin));
    assert_eq!(guard_decision(&admin, &[Role::Admin]), GuardDecision::Allow);
    assert_eq!(guard_decision(&admin, &[Role::User, Role::Admin]), GuardDecision::Allow);
}

#[test]
fn logout_revokes_previous_allow() {
    let mut store = MemorySessionStore::new();
    let mut state = AuthState::Unauthenticated;
    state.login(&mut store, "t1", make_user(Role::Admin));
    assert_eq!(guard_decision(&state, &[Role::Admin]), GuardDecision::Allow);
    state.logout(&mut store);
    assert_eq!(guard_decision(&state, &[Role::Admin]), GuardDecision::Redirect("/login"));
}

// =============================================================
// End-to-end gating scenarios
// =============================================================

#[test]
fn empty_store_then_admin_route_redirects_to_login() {
    let mut store = MemorySessionStore::new();
    let state = restored(&mut store);
    assert_eq!(guard_decision(&state, &[Role::Admin]), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn cached_user_role_then_admin_route_redirects_to_profile() {
    let mut store = MemorySessionStore::with_session("t1", &make_user(Role::User));
    let state = restored(&mut store);
    assert_eq!(guard_decision(&state, &[Role::Admin]), GuardDecision::Redirect(PROFILE_PATH));
}

#[test]
fn admin_login_then_admin_route_renders() {
    let mut store = MemorySessionStore::new();
    let mut state = restored(&mut store);
    state.login(&mut store, "t2", make_user(Role::Admin));
    assert_eq!(guard_decision(&state, &[Role::Admin]), GuardDecision::Allow);
}

// =============================================================
// home_path
// =============================================================

#[test]
fn home_path_waits_while_initializing() {
    assert_eq!(home_path(&AuthState::Initializing), None);
}

#[test]
fn home_path_routes_by_role() {
    assert_eq!(home_path(&AuthState::Unauthenticated), Some("/login"));
    assert_eq!(home_path(&AuthState::Authenticated(make_user(Role::Admin))), Some("/admin/users"));
    assert_eq!(home_path(&AuthState::Authenticated(make_user(Role::User))), Some("/profile"));
}

#[test]
fn landing_path_matches_route_constants() {
    assert_eq!(landing_path(Role::Admin), ADMIN_USERS_PATH);
    assert_eq!(landing_path(Role::User), PROFILE_PATH);
}
