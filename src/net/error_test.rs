use super::*;

#[test]
fn extract_detail_reads_plain_string() {
    assert_eq!(
        extract_detail(r#"{"detail":"invalid credentials"}"#),
        Some("invalid credentials".to_owned())
    );
}

#[test]
fn extract_detail_reads_first_validation_message() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"other"}]}"#;
    assert_eq!(extract_detail(body), Some("field required".to_owned()));
}

#[test]
fn extract_detail_ignores_non_json_and_blank_detail() {
    assert_eq!(extract_detail("Internal Server Error"), None);
    assert_eq!(extract_detail(r#"{"detail":"  "}"#), None);
    assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
}

#[test]
fn from_status_uses_detail_then_fallback() {
    assert_eq!(
        ApiError::from_status(400, r#"{"detail":"email already registered"}"#, "Registration failed"),
        ApiError::Status { status: 400, detail: "email already registered".to_owned() }
    );
    assert_eq!(
        ApiError::from_status(500, "", "Failed to fetch channel"),
        ApiError::Status { status: 500, detail: "Failed to fetch channel".to_owned() }
    );
}

#[test]
fn from_status_maps_401_to_unauthorized() {
    let err = ApiError::from_status(401, r#"{"detail":"Not authenticated"}"#, "x");
    assert_eq!(err, ApiError::Unauthorized(401));
    assert!(err.is_auth_failure());
}

#[test]
fn status_error_displays_detail_only() {
    let err = ApiError::Status { status: 400, detail: "Channel name already taken".to_owned() };
    assert_eq!(err.to_string(), "Channel name already taken");
    assert!(!err.is_auth_failure());
}
