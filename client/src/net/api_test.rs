use super::*;

#[test]
fn endpoint_prefixes_api_and_trims_trailing_slash() {
    let api = Api::new("https://api.smartplate.test/", None);
    assert_eq!(api.endpoint("/auth/me"), "https://api.smartplate.test/api/auth/me");
}

#[test]
fn bearer_formats_authorization_value() {
    let api = Api::new("http://localhost:8001", Some("tok-1".to_owned()));
    assert_eq!(api.bearer(), Ok("Bearer tok-1".to_owned()));
}

#[test]
fn bearer_without_token_is_missing_token() {
    let api = Api::new("http://localhost:8001", None);
    assert_eq!(api.bearer(), Err(ApiError::MissingToken));
}

#[test]
fn bearer_with_empty_token_is_missing_token() {
    let api = Api::new("http://localhost:8001", Some(String::new()));
    assert_eq!(api.bearer(), Err(ApiError::MissingToken));
}

#[test]
fn delivery_accept_path_embeds_id() {
    assert_eq!(delivery_accept_path("f-7"), "/volunteer/deliveries/f-7/accept");
}

#[test]
fn moderation_path_formats_queue_and_decision() {
    assert_eq!(
        moderation_path(ModerationQueue::Requests, "r-1", Decision::Approve),
        "/admin/requests/r-1/approve"
    );
    assert_eq!(
        moderation_path(ModerationQueue::Fulfillments, "f-2", Decision::Reject),
        "/admin/fulfillments/f-2/reject"
    );
}

#[test]
fn select_role_body_serializes_lowercase_role() {
    let body = serde_json::to_value(SelectRoleBody { role: Role::Ngo }).unwrap();
    assert_eq!(body, serde_json::json!({ "role": "ngo" }));
}
