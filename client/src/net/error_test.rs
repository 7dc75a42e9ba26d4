use super::*;

#[test]
fn validation_messages_match_form_copy() {
    assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match");
    assert_eq!(
        ValidationError::PasswordTooShort.to_string(),
        "Password must be at least 6 characters long"
    );
}

#[test]
fn invalid_is_transparent_over_validation() {
    let err = ApiError::from(ValidationError::PasswordMismatch);
    assert_eq!(err.to_string(), "Passwords do not match");
}

#[test]
fn rejected_displays_server_message_verbatim() {
    let err = ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn transport_failures_hide_detail() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "Network error. Please check your connection.");
    let err = ApiError::Decode("expected value at line 1".to_owned());
    assert_eq!(err.to_string(), "Network error. Please check your connection.");
}

#[test]
fn only_unauthorized_ends_session() {
    assert!(ApiError::Unauthorized.ends_session());
    assert!(!ApiError::Network(String::new()).ends_session());
    assert!(!ApiError::Rejected { status: 403, message: String::new() }.ends_session());
}
