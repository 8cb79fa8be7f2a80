use crate::client::client::error_message;

use reqwest::StatusCode;

#[test]
fn given_message_field_when_extracted_then_used() {
    let body = r#"{"message":"Insufficient funds","success":false}"#;

    assert_eq!(
        error_message(body, StatusCode::BAD_REQUEST),
        "Insufficient funds"
    );
}

#[test]
fn given_blank_message_when_extracted_then_falls_back_to_error_string() {
    let body = r#"{"status":403,"error":"Forbidden","message":""}"#;

    assert_eq!(error_message(body, StatusCode::FORBIDDEN), "Forbidden");
}

#[test]
fn given_nested_error_object_when_extracted_then_nested_message_used() {
    let body = r#"{"error":{"code":"NOT_FOUND","message":"Competition not found"}}"#;

    assert_eq!(
        error_message(body, StatusCode::NOT_FOUND),
        "Competition not found"
    );
}

#[test]
fn given_non_json_body_when_extracted_then_reason_phrase() {
    assert_eq!(
        error_message("<html>oops</html>", StatusCode::INTERNAL_SERVER_ERROR),
        "Internal Server Error"
    );
}

#[test]
fn given_empty_body_when_extracted_then_reason_phrase() {
    assert_eq!(error_message("", StatusCode::UNAUTHORIZED), "Unauthorized");
}
