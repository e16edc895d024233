use stock_dashboard_wasm::application::session::session;
use stock_dashboard_wasm::domain::errors::AppError;

#[test]
fn unauthorized_watchlist_add_carries_the_sign_in_message() {
    let err = AppError::Unauthorized("Please sign in to add to watchlist".to_string());
    assert_eq!(err.user_message(), "Please sign in to add to watchlist");
    assert_eq!(err.status(), Some(401));
}

#[test]
fn http_errors_prefer_the_server_message() {
    let err = AppError::Http { status: 500, message: "Invalid credentials".to_string() };
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(err.status(), Some(500));
}

#[test]
fn network_failures_collapse_to_a_generic_message() {
    let err = AppError::Network("fetch rejected".to_string());
    assert_eq!(err.user_message(), "Network error occurred");
    assert_eq!(err.status(), None);
}

#[test]
fn display_includes_the_taxonomy() {
    let err = AppError::Http { status: 404, message: "missing".to_string() };
    assert_eq!(err.to_string(), "HTTP 404: missing");
    assert_eq!(
        AppError::Validation("INVALID EMAIL FORMAT".to_string()).to_string(),
        "Validation Error: INVALID EMAIL FORMAT",
    );
}

#[test]
fn session_access_before_init_is_a_config_error() {
    // Nothing initializes the session context in this test binary
    match session() {
        Err(AppError::Config(message)) => assert!(message.contains("init_session")),
        other => panic!("expected a configuration error, got {other:?}"),
    }
}
