use super::*;

#[test]
fn name_only_update_omits_password_fields() {
    let update = prepare_profile_update(" Ana Lima ", "", "", "").unwrap();
    assert_eq!(update, ProfileUpdate { name: "Ana Lima".into(), password: None, current_password: None });
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "name": "Ana Lima" }));
}

#[test]
fn password_change_carries_both_passwords() {
    let update = prepare_profile_update("Ana", "old-secret", "new-secret", "new-secret").unwrap();
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({ "name": "Ana", "password": "new-secret", "currentPassword": "old-secret" })
    );
}

#[test]
fn password_change_needs_current_password() {
    let err = prepare_profile_update("Ana", "", "new-secret", "new-secret").unwrap_err();
    assert_eq!(err, ValidationError::CurrentPasswordRequired);
}

#[test]
fn password_change_reports_mismatch_before_length() {
    let err = prepare_profile_update("Ana", "old-secret", "short", "other").unwrap_err();
    assert_eq!(err, ValidationError::PasswordMismatch);
    let err = prepare_profile_update("Ana", "old-secret", "short", "short").unwrap_err();
    assert_eq!(err, ValidationError::PasswordTooShort);
}

#[test]
fn build_profile_update_maps_change_fields() {
    let change = PasswordChange { current: "a".into(), new: "b".into() };
    let update = build_profile_update("Ana", Some(change));
    assert_eq!(update.password.as_deref(), Some("b"));
    assert_eq!(update.current_password.as_deref(), Some("a"));
}

#[test]
fn blank_name_is_rejected_before_sending() {
    assert_eq!(prepare_profile_update("   ", "", "", "").unwrap_err(), ValidationError::NameRequired);
    let err = prepare_profile_update("", "old-secret", "new-secret", "new-secret").unwrap_err();
    assert_eq!(err, ValidationError::NameRequired);
}
