//! Credential shape validation.
//!
//! DESIGN
//! ======
//! Rules run entirely in the browser before any network call; the service
//! performs its own checks and stays the source of truth. Messages are the
//! exact strings shown under the form fields.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Shown when the email field is empty.
pub const NO_EMAIL: &str = "No email provided";
/// Shown when the email field is non-empty but malformed.
pub const INVALID_EMAIL: &str = "Invalid email";
/// Shown when the password field is empty.
pub const NO_PASSWORD: &str = "No password provided";
/// Shown when the password is shorter than [`MIN_PASSWORD_CHARS`].
pub const PASSWORD_TOO_SHORT: &str = "Password should be min 5 chars";

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 5;

/// Check that `email` looks like a deliverable address.
///
/// Accepts `local@domain` where the domain has at least two non-empty
/// dot-separated labels. Deliberately permissive beyond that; the service
/// decides what it will actually accept.
///
/// # Errors
///
/// Returns the field message to display when the address is empty or
/// malformed.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err(NO_EMAIL);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(INVALID_EMAIL);
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(INVALID_EMAIL);
    };
    if local.is_empty() {
        return Err(INVALID_EMAIL);
    }
    let mut labels = domain.split('.');
    let first = labels.next().unwrap_or_default();
    if first.is_empty() {
        return Err(INVALID_EMAIL);
    }
    let mut rest = labels.peekable();
    if rest.peek().is_none() {
        // Bare hostname with no dot.
        return Err(INVALID_EMAIL);
    }
    if rest.any(str::is_empty) {
        return Err(INVALID_EMAIL);
    }
    Ok(())
}

/// Check that `password` is present and long enough.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns the field message to display when the password is empty or too
/// short.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err(NO_PASSWORD);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}
