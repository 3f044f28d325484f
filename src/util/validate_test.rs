use super::*;

// =============================================================
// validate_email
// =============================================================

#[test]
fn accepts_ordinary_address() {
    assert_eq!(validate_email("user@example.com"), Ok(()));
}

#[test]
fn accepts_subdomains_and_plus_tags() {
    assert_eq!(validate_email("user+tag@mail.example.co.uk"), Ok(()));
}

#[test]
fn empty_email_gets_missing_message() {
    assert_eq!(validate_email(""), Err(NO_EMAIL));
}

#[test]
fn rejects_address_without_at_sign() {
    assert_eq!(validate_email("example.com"), Err(INVALID_EMAIL));
}

#[test]
fn rejects_address_with_two_at_signs() {
    assert_eq!(validate_email("a@b@example.com"), Err(INVALID_EMAIL));
}

#[test]
fn rejects_missing_local_part() {
    assert_eq!(validate_email("@example.com"), Err(INVALID_EMAIL));
}

#[test]
fn rejects_domain_without_dot() {
    assert_eq!(validate_email("user@localhost"), Err(INVALID_EMAIL));
}

#[test]
fn rejects_empty_domain_labels() {
    assert_eq!(validate_email("user@example..com"), Err(INVALID_EMAIL));
    assert_eq!(validate_email("user@.com"), Err(INVALID_EMAIL));
    assert_eq!(validate_email("user@example."), Err(INVALID_EMAIL));
}

#[test]
fn rejects_embedded_whitespace() {
    assert_eq!(validate_email("us er@example.com"), Err(INVALID_EMAIL));
}

// =============================================================
// validate_password
// =============================================================

#[test]
fn accepts_password_at_minimum_length() {
    assert_eq!(validate_password("abcde"), Ok(()));
}

#[test]
fn empty_password_gets_missing_message() {
    assert_eq!(validate_password(""), Err(NO_PASSWORD));
}

#[test]
fn rejects_password_under_minimum_length() {
    assert_eq!(validate_password("abcd"), Err(PASSWORD_TOO_SHORT));
}

#[test]
fn minimum_counts_characters_not_bytes() {
    // Five multi-byte characters pass even though the byte count is higher.
    assert_eq!(validate_password("äöüéß"), Ok(()));
}
