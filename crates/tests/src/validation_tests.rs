use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, LoginRequest, RegisterRequest};
use validator::Validate;

#[test]
fn empty_login_fields_produce_field_errors() {
    let request = LoginRequest {
        username: String::new(),
        password: String::new(),
    };
    let err = AppError::from(request.validate().unwrap_err());

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors.get("username").unwrap(), "Username is required");
    assert_eq!(err.field_errors.get("password").unwrap(), "Password is required");
}

#[test]
fn filled_login_request_passes() {
    let request = LoginRequest {
        username: "amina".to_string(),
        password: "hunter2".to_string(),
    };
    assert!(request.validate().is_ok());
}

#[test]
fn register_enforces_minimum_lengths() {
    let request = RegisterRequest {
        username: "ab".to_string(),
        password: "short".to_string(),
    };
    let err = AppError::from(request.validate().unwrap_err());

    assert_eq!(
        err.field_errors.get("username").unwrap(),
        "Username must be at least 3 characters"
    );
    assert_eq!(
        err.field_errors.get("password").unwrap(),
        "Password must be at least 8 characters"
    );
}
