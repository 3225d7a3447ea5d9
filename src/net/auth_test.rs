use super::*;
use crate::state::session::Role;

fn login_request(role: Role) -> LoginRequest {
    LoginRequest {
        email: "ada@example.edu".to_owned(),
        password: "hunter2".to_owned(),
        role,
    }
}

// =============================================================
// Pre-network validation
// =============================================================

#[test]
fn email_precheck_requires_at_and_dot() {
    assert!(email_looks_valid("ada@example.edu"));
    assert!(!email_looks_valid("not-an-email"));
    assert!(!email_looks_valid("missing-dot@edu"));
    assert!(!email_looks_valid("missing.at.example"));
}

#[test]
fn invalid_email_short_circuits_as_validation_error() {
    let err = validate_login("not-an-email", "hunter2").unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
}

#[test]
fn empty_password_is_a_validation_error() {
    let err = validate_login("ada@example.edu", "").unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
}

#[test]
fn signup_requires_names() {
    let form = SignupRequest::new(
        String::new(),
        "Lovelace".to_owned(),
        "ada@example.edu".to_owned(),
        "hunter2".to_owned(),
        Role::Teacher,
        None,
    );
    assert!(matches!(validate_signup(&form).unwrap_err(), AuthError::Validation(_)));
}

#[test]
fn student_signup_requires_year() {
    let form = SignupRequest::new(
        "Ada".to_owned(),
        "Lovelace".to_owned(),
        "ada@example.edu".to_owned(),
        "hunter2".to_owned(),
        Role::Student,
        None,
    );
    assert!(matches!(validate_signup(&form).unwrap_err(), AuthError::Validation(_)));
}

#[test]
fn teacher_signup_needs_no_year() {
    let form = SignupRequest::new(
        "Ada".to_owned(),
        "Lovelace".to_owned(),
        "ada@example.edu".to_owned(),
        "hunter2".to_owned(),
        Role::Teacher,
        None,
    );
    assert!(validate_signup(&form).is_ok());
}

// =============================================================
// Signup payload shape
// =============================================================

#[test]
fn teacher_payload_omits_year_entirely() {
    let form = SignupRequest::new(
        "Ada".to_owned(),
        "Lovelace".to_owned(),
        "ada@example.edu".to_owned(),
        "hunter2".to_owned(),
        Role::Teacher,
        Some("BE".to_owned()),
    );
    let json = serde_json::to_value(&form).expect("serializes");
    assert!(json.get("year").is_none());
    assert_eq!(json.get("role"), Some(&serde_json::json!("teacher")));
}

#[test]
fn student_payload_carries_year() {
    let form = SignupRequest::new(
        "Ada".to_owned(),
        "Lovelace".to_owned(),
        "ada@example.edu".to_owned(),
        "hunter2".to_owned(),
        Role::Student,
        Some("BE".to_owned()),
    );
    let json = serde_json::to_value(&form).expect("serializes");
    assert_eq!(json.get("year"), Some(&serde_json::json!("BE")));
}

// =============================================================
// Login outcome normalization
// =============================================================

#[test]
fn forbidden_surfaces_server_detail_verbatim() {
    let err = login_outcome(403, r#"{"detail": "Access Denied: Wrong Portal"}"#).unwrap_err();
    assert_eq!(err, AuthError::AccessDenied("Access Denied: Wrong Portal".to_owned()));
}

#[test]
fn rejection_uses_server_detail_when_present() {
    let err = login_outcome(401, r#"{"detail": "Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, AuthError::Rejected("Invalid credentials".to_owned()));
}

#[test]
fn rejection_falls_back_to_generic_message() {
    let err = login_outcome(500, "").unwrap_err();
    assert_eq!(err, AuthError::Rejected("Login failed. Please try again.".to_owned()));
}

#[test]
fn success_parses_token_and_user() {
    let body = r#"{
        "access_token": "tok-abc",
        "token_type": "bearer",
        "user": {"id": "u-1", "email": "ada@example.edu", "role": "teacher"}
    }"#;
    let resp = login_outcome(200, body).expect("parses");
    assert_eq!(resp.access_token, "tok-abc");
    assert_eq!(resp.user.expect("user").role, "teacher");
}

#[test]
fn success_without_token_is_malformed() {
    let err = login_outcome(200, r#"{"token_type": "bearer"}"#).unwrap_err();
    assert!(matches!(err, AuthError::Malformed(_)));
}

#[test]
fn unparseable_success_body_is_malformed() {
    let err = login_outcome(200, "<html>gateway error</html>").unwrap_err();
    assert!(matches!(err, AuthError::Malformed(_)));
}

// =============================================================
// Signup outcome normalization
// =============================================================

#[test]
fn validation_list_surfaces_first_field_error() {
    let body = r#"{"detail": [{"msg": "value is not a valid email address", "loc": ["body", "email"]}]}"#;
    let err = signup_outcome(422, body).unwrap_err();
    assert_eq!(
        err,
        AuthError::Rejected("value is not a valid email address".to_owned())
    );
}

#[test]
fn signup_rejection_uses_detail_string() {
    let err = signup_outcome(400, r#"{"detail": "This email is already registered."}"#).unwrap_err();
    assert_eq!(err, AuthError::Rejected("This email is already registered.".to_owned()));
}

#[test]
fn signup_success_tolerates_arbitrary_body() {
    let resp = signup_outcome(201, r#"{"message": "User created successfully", "user_id": "u-9"}"#)
        .expect("parses");
    assert_eq!(resp.user_id.as_deref(), Some("u-9"));

    let empty = signup_outcome(200, "").expect("empty body is fine");
    assert_eq!(empty, SignupResponse::default());
}

// =============================================================
// Current-user outcome
// =============================================================

#[test]
fn me_failures_collapse_to_one_condition() {
    let unauthorized = me_outcome(401, r#"{"detail": "expired"}"#).unwrap_err();
    let garbage = me_outcome(200, "not json").unwrap_err();
    assert_eq!(unauthorized, garbage);
    assert_eq!(unauthorized, AuthError::Rejected("Failed to fetch user.".to_owned()));
}

#[test]
fn me_success_parses_user() {
    let user = me_outcome(200, r#"{"id": "u-1", "email": "ada@example.edu", "role": "student"}"#)
        .expect("parses");
    assert_eq!(user.id, "u-1");
}

// =============================================================
// Session establishment from a login response
// =============================================================

#[test]
fn server_role_overrides_submitted_role() {
    let resp = login_outcome(
        200,
        r#"{"access_token": "tok", "user": {"id": "u-1", "email": "ada@example.edu", "role": "teacher"}}"#,
    )
    .expect("parses");
    let session = session_from_login(&login_request(Role::Student), resp).expect("establishes");
    assert_eq!(session.role, Role::Teacher);
}

#[test]
fn unknown_server_role_is_rejected_not_defaulted() {
    let resp = login_outcome(
        200,
        r#"{"access_token": "tok", "user": {"id": "u-1", "email": "ada@example.edu", "role": "superuser"}}"#,
    )
    .expect("parses");
    let err = session_from_login(&login_request(Role::Student), resp).unwrap_err();
    assert!(matches!(err, AuthError::Rejected(_)));
}

#[test]
fn missing_user_record_falls_back_to_submitted_role() {
    let resp = login_outcome(200, r#"{"access_token": "tok"}"#).expect("parses");
    let session = session_from_login(&login_request(Role::Student), resp).expect("establishes");
    assert_eq!(session.role, Role::Student);
    assert_eq!(session.user.email, "ada@example.edu");
}
