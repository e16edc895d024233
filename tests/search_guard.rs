use stock_dashboard_wasm::presentation::pages::search::is_searchable;

#[test]
fn short_queries_never_reach_the_network() {
    assert!(!is_searchable(""));
    assert!(!is_searchable("A"));
}

#[test]
fn two_characters_unlock_the_search() {
    assert!(is_searchable("AA"));
    assert!(is_searchable("AAPL"));
    assert!(is_searchable("Apple Inc."));
}

#[test]
fn length_is_counted_in_characters_not_bytes() {
    // One multi-byte character is still a single-character query
    assert!(!is_searchable("삼"));
    assert!(is_searchable("삼성"));
}
