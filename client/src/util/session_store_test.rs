use super::*;
use crate::net::types::Role;

fn make_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role,
        created_at: None,
        updated_at: None,
        last_login_at: None,
    }
}

// =============================================================
// MemorySessionStore
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = MemorySessionStore::new();
    assert!(store.is_empty());
    assert_eq!(store.load(), StoredSession::default());
}

#[test]
fn save_then_load_returns_both_fields() {
    let mut store = MemorySessionStore::new();
    let user = make_user(Role::Admin);
    store.save("t1", &user);
    let loaded = store.load();
    assert_eq!(loaded.token.as_deref(), Some("t1"));
    assert_eq!(loaded.user, Some(user));
}

#[test]
fn last_write_wins() {
    let mut store = MemorySessionStore::new();
    store.save("t1", &make_user(Role::User));
    store.save("t2", &make_user(Role::Admin));
    let loaded = store.load();
    assert_eq!(loaded.token.as_deref(), Some("t2"));
    assert_eq!(loaded.user.map(|u| u.role), Some(Role::Admin));
}

#[test]
fn save_user_keeps_token() {
    let mut store = MemorySessionStore::with_session("t1", &make_user(Role::User));
    let mut renamed = make_user(Role::User);
    renamed.name = "Bia".to_owned();
    store.save_user(&renamed);
    assert_eq!(store.token().as_deref(), Some("t1"));
    assert_eq!(store.load().user.map(|u| u.name), Some("Bia".to_owned()));
}

#[test]
fn clear_removes_both_fields() {
    let mut store = MemorySessionStore::with_session("t1", &make_user(Role::User));
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.load(), StoredSession::default());
}

#[test]
fn fields_are_absent_independently() {
    let store = MemorySessionStore::with_raw(Some("t1"), None);
    let loaded = store.load();
    assert_eq!(loaded.token.as_deref(), Some("t1"));
    assert!(loaded.user.is_none());
}

#[test]
fn corrupt_user_record_reads_as_absent() {
    let store = MemorySessionStore::with_raw(Some("t1"), Some("{not json"));
    let loaded = store.load();
    assert_eq!(loaded.token.as_deref(), Some("t1"));
    assert!(loaded.user.is_none());
}

// =============================================================
// LocalStorageStore outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_empty_without_browser() {
    let mut store = LocalStorageStore;
    store.save("t1", &make_user(Role::User));
    assert_eq!(store.load(), StoredSession::default());
    store.clear();
    assert!(store.token().is_none());
}

#[test]
fn storage_keys_match_persisted_layout() {
    assert_eq!(TOKEN_KEY, "authToken");
    assert_eq!(USER_KEY, "authUser");
}
