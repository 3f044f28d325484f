use super::*;

#[test]
fn signup_endpoint_targets_auth_signup_path() {
    assert!(signup_endpoint().ends_with("/auth/signup"));
}

#[test]
fn login_endpoint_targets_auth_login_path() {
    assert!(login_endpoint().ends_with("/auth/login"));
}

#[test]
fn auth_failed_message_prefers_service_message() {
    assert_eq!(
        auth_failed_message(403, r#"{"message":"User already exists"}"#),
        "User already exists"
    );
}

#[test]
fn auth_failed_message_falls_back_when_message_missing() {
    assert_eq!(
        auth_failed_message(500, r#"{"error":"Internal Server Error"}"#),
        "authentication failed: 500"
    );
}

#[test]
fn auth_failed_message_falls_back_on_unparseable_body() {
    assert_eq!(
        auth_failed_message(502, "<html>bad gateway</html>"),
        "authentication failed: 502"
    );
}
