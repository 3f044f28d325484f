use super::*;
use crate::util::validate::{INVALID_EMAIL, NO_EMAIL, NO_PASSWORD, PASSWORD_TOO_SHORT};

#[test]
fn validate_form_accepts_and_trims_valid_input() {
    let credentials = validate_form("  user@example.com  ", "hunter2").unwrap();
    assert_eq!(credentials.email, "user@example.com");
    assert_eq!(credentials.password, "hunter2");
}

#[test]
fn malformed_email_blocks_submission() {
    let errors = validate_form("not-an-email", "hunter2").unwrap_err();
    assert_eq!(errors.email, Some(INVALID_EMAIL));
    assert_eq!(errors.password, None);
}

#[test]
fn short_password_blocks_submission() {
    let errors = validate_form("user@example.com", "abcd").unwrap_err();
    assert_eq!(errors.email, None);
    assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT));
}

#[test]
fn both_fields_report_when_both_invalid() {
    let errors = validate_form("", "").unwrap_err();
    assert_eq!(errors.email, Some(NO_EMAIL));
    assert_eq!(errors.password, Some(NO_PASSWORD));
}

#[test]
fn whitespace_only_email_counts_as_missing() {
    let errors = validate_form("   ", "hunter2").unwrap_err();
    assert_eq!(errors.email, Some(NO_EMAIL));
}

#[test]
fn password_is_not_trimmed() {
    // Leading/trailing spaces are legitimate password characters.
    let credentials = validate_form("user@example.com", "  pw  ").unwrap();
    assert_eq!(credentials.password, "  pw  ");
}
