use stock_dashboard_wasm::infrastructure::cookies::{token_from_cookie_header, SESSION_COOKIE};

#[test]
fn finds_the_token_wherever_it_sits() {
    assert_eq!(
        token_from_cookie_header("token=abc123", SESSION_COOKIE).as_deref(),
        Some("abc123"),
    );
    assert_eq!(
        token_from_cookie_header("theme=dark; token=abc123; lang=en", SESSION_COOKIE).as_deref(),
        Some("abc123"),
    );
}

#[test]
fn absent_or_empty_token_reads_as_no_session() {
    assert_eq!(token_from_cookie_header("", SESSION_COOKIE), None);
    assert_eq!(token_from_cookie_header("theme=dark", SESSION_COOKIE), None);
    assert_eq!(token_from_cookie_header("token=", SESSION_COOKIE), None);
}

#[test]
fn similarly_named_cookies_do_not_match() {
    assert_eq!(token_from_cookie_header("csrf_token=zzz", SESSION_COOKIE), None);
    assert_eq!(token_from_cookie_header("tokenized=zzz", SESSION_COOKIE), None);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(
        token_from_cookie_header("theme=dark;  token=abc123 ", SESSION_COOKIE).as_deref(),
        Some("abc123"),
    );
}
