use super::*;

#[test]
fn registration_accepts_matching_long_password() {
    assert_eq!(validate_registration("s3cret-pass", "s3cret-pass"), Ok(()));
}

#[test]
fn registration_checks_mismatch_before_length() {
    assert_eq!(validate_registration("short", "other"), Err(ValidationError::PasswordMismatch));
}

#[test]
fn registration_rejects_short_password() {
    assert_eq!(validate_registration("1234567", "1234567"), Err(ValidationError::PasswordTooShort));
    assert_eq!(validate_registration("12345678", "12345678"), Ok(()));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert_eq!(validate_registration("ççççççç", "ççççççç"), Err(ValidationError::PasswordTooShort));
}

#[test]
fn empty_new_password_keeps_current() {
    assert_eq!(validate_password_change("", "", ""), Ok(None));
    assert_eq!(validate_password_change("old", "", "ignored"), Ok(None));
}

#[test]
fn password_change_requires_current_password() {
    assert_eq!(
        validate_password_change("", "new-password", "new-password"),
        Err(ValidationError::CurrentPasswordRequired)
    );
}

#[test]
fn password_change_rules_in_order() {
    assert_eq!(validate_password_change("", "abc", "abd"), Err(ValidationError::PasswordMismatch));
    assert_eq!(validate_password_change("", "abc", "abc"), Err(ValidationError::PasswordTooShort));
}

#[test]
fn valid_password_change_is_returned() {
    assert_eq!(
        validate_password_change("old-password", "new-password", "new-password"),
        Ok(Some(PasswordChange { current: "old-password".to_owned(), new: "new-password".to_owned() }))
    );
}

#[test]
fn messages_are_user_facing() {
    assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match.");
    assert_eq!(ValidationError::PasswordTooShort.to_string(), "Password must be at least 8 characters.");
}

#[test]
fn name_is_trimmed() {
    assert_eq!(validate_name("  Ana Souza "), Ok("Ana Souza"));
}

#[test]
fn blank_name_is_rejected() {
    assert_eq!(validate_name(""), Err(ValidationError::NameRequired));
    assert_eq!(validate_name(" \t "), Err(ValidationError::NameRequired));
    assert_eq!(ValidationError::NameRequired.to_string(), "Name cannot be empty.");
}
