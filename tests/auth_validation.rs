use stock_dashboard_wasm::presentation::components::auth_form::{
    is_valid_email, validate_credentials, AuthFormKind,
};

#[test]
fn malformed_email_fails_before_any_network_call() {
    let errors = validate_credentials(AuthFormKind::Login, "", "not-an-email", "secret1");
    assert_eq!(errors.email, Some("INVALID EMAIL FORMAT"));
    assert!(errors.password.is_none());
}

#[test]
fn missing_fields_report_required_messages() {
    let errors = validate_credentials(AuthFormKind::Register, "", "", "");
    assert_eq!(errors.username, Some("USERNAME IS REQUIRED"));
    assert_eq!(errors.email, Some("EMAIL IS REQUIRED"));
    assert_eq!(errors.password, Some("PASSWORD IS REQUIRED"));
}

#[test]
fn short_password_is_rejected() {
    let errors =
        validate_credentials(AuthFormKind::Login, "", "trader@example.com", "12345");
    assert_eq!(errors.password, Some("PASSWORD MUST BE AT LEAST 6 CHARACTERS"));
}

#[test]
fn username_is_only_required_when_registering() {
    let errors = validate_credentials(AuthFormKind::Login, "", "trader@example.com", "secret1");
    assert!(errors.is_empty());
}

#[test]
fn valid_registration_passes_all_checks() {
    let errors =
        validate_credentials(AuthFormKind::Register, "trader", "trader@example.com", "secret1");
    assert!(errors.is_empty());
}

#[test]
fn email_shape_check_matches_the_form_rule() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("trader@mail.example.com"));

    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("a@b@c.d"));
}
