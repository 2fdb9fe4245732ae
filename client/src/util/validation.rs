//! Client-side form checks run before any request is sent.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Form-level validation failures. `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    NameRequired,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Enter your current password to set a new one.")]
    CurrentPasswordRequired,
}

/// Display name: surrounding whitespace is dropped and something must remain.
///
/// # Errors
///
/// Returns [`ValidationError::NameRequired`] for a blank name.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(name)
}

fn check_new_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Registration: confirmation must match, then the length rule applies.
///
/// # Errors
///
/// Returns the first rule the input breaks.
pub fn validate_registration(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    check_new_password(password, confirmation)
}

/// A requested password change, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
}

/// Profile edit: an empty new password means "keep the current one".
///
/// # Errors
///
/// Returns the first rule the input breaks; the current password is checked
/// last.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirmation: &str,
) -> Result<Option<PasswordChange>, ValidationError> {
    if new.is_empty() {
        return Ok(None);
    }
    check_new_password(new, confirmation)?;
    if current.is_empty() {
        return Err(ValidationError::CurrentPasswordRequired);
    }
    Ok(Some(PasswordChange { current: current.to_owned(), new: new.to_owned() }))
}
