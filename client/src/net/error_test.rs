use super::*;

// =============================================================
// from_response
// =============================================================

#[test]
fn from_response_reads_string_detail() {
    let err = ApiError::from_response(400, r#"{"detail":"Quantity exceeds remaining"}"#);
    assert_eq!(err, ApiError::Status { status: 400, detail: Some("Quantity exceeds remaining".to_owned()) });
}

#[test]
fn from_response_joins_validation_entries() {
    let body = r#"{"detail":[{"msg":"field required"},{"msg":"value is not a valid integer"}]}"#;
    let err = ApiError::from_response(422, body);
    assert_eq!(
        err,
        ApiError::Status { status: 422, detail: Some("field required; value is not a valid integer".to_owned()) }
    );
}

#[test]
fn from_response_falls_back_to_message_field() {
    let err = ApiError::from_response(500, r#"{"message":"upstream unavailable"}"#);
    assert_eq!(err, ApiError::Status { status: 500, detail: Some("upstream unavailable".to_owned()) });
}

#[test]
fn from_response_tolerates_non_json_body() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
}

#[test]
fn from_response_ignores_blank_detail() {
    let err = ApiError::from_response(400, r#"{"detail":"   "}"#);
    assert_eq!(err, ApiError::Status { status: 400, detail: None });
}

#[test]
fn from_response_empty_detail_defers_to_message() {
    let err = ApiError::from_response(400, r#"{"detail":"","message":"Quantity too large"}"#);
    assert_eq!(err.user_message("Failed to create request"), "Quantity too large");
}

// =============================================================
// user_message
// =============================================================

#[test]
fn user_message_for_401_and_403_asks_for_login() {
    for status in [401, 403] {
        let err = ApiError::from_response(status, r#"{"detail":"Not authenticated"}"#);
        assert_eq!(err.user_message("Failed to create request"), REAUTH_MESSAGE);
    }
}

#[test]
fn user_message_surfaces_detail_verbatim() {
    let err = ApiError::from_response(400, r#"{"detail":"Request already fulfilled"}"#);
    assert_eq!(err.user_message("Failed to submit fulfillment"), "Request already fulfilled");
}

#[test]
fn user_message_network_failure_uses_fallback() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("Failed to create request"), "Failed to create request");
}

#[test]
fn user_message_status_without_detail_uses_fallback() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.user_message("Failed to create request"), "Failed to create request");
}

#[test]
fn missing_token_counts_as_auth_failure() {
    assert!(ApiError::MissingToken.is_auth());
    assert_eq!(ApiError::MissingToken.user_message("x"), REAUTH_MESSAGE);
}

#[test]
fn detail_or_never_returns_reauth_text() {
    let err = ApiError::Status { status: 401, detail: None };
    assert_eq!(err.detail_or("Verification failed"), "Verification failed");
    let err = ApiError::Status { status: 400, detail: Some("Invalid OTP".to_owned()) };
    assert_eq!(err.detail_or("Verification failed"), "Invalid OTP");
}
