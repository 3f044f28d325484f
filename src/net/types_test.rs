use super::*;

#[test]
fn credentials_serialize_to_expected_body() {
    let credentials = Credentials {
        email: "user@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&credentials).unwrap(),
        serde_json::json!({ "email": "user@example.com", "password": "hunter2" })
    );
}

#[test]
fn api_error_body_reads_message_field() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Wrong password"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Wrong password"));
}

#[test]
fn api_error_body_tolerates_missing_message() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"statusCode":403,"error":"Forbidden"}"#).unwrap();
    assert_eq!(body.message, None);
}
