use stock_dashboard_wasm::application::fetch::{FetchState, RequestGuard};

#[test]
fn starts_idle() {
    let state: FetchState<Vec<u8>> = FetchState::default();
    assert_eq!(state, FetchState::Idle);
    assert!(!state.is_loading());
    assert!(state.data().is_none());
    assert!(state.error().is_none());
}

#[test]
fn ready_replaces_the_previous_snapshot() {
    let mut state = FetchState::Ready(vec![1, 2, 3]);
    state = FetchState::Loading;
    // While loading the view shows skeletons, not the old data
    assert!(state.data().is_none());
    state = FetchState::Ready(vec![4]);
    assert_eq!(state.data(), Some(&vec![4]));
}

#[test]
fn failed_exposes_the_display_message() {
    let state: FetchState<()> = FetchState::Failed("No price data available".to_string());
    assert_eq!(state.error(), Some("No price data available"));
}

#[test]
fn newer_request_invalidates_older_tokens() {
    let guard = RequestGuard::new();
    let first = guard.begin();
    assert!(first.is_current());

    let second = guard.begin();
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn stale_response_cannot_overwrite_fresher_state() {
    let guard = RequestGuard::new();
    let mut state: FetchState<&str> = FetchState::Loading;

    let slow = guard.begin();
    let fast = guard.begin();

    // The fast (newer) response lands first
    if fast.is_current() {
        state = FetchState::Ready("fresh");
    }
    // The slow (older) response arrives late and must be dropped
    if slow.is_current() {
        state = FetchState::Ready("stale");
    }

    assert_eq!(state, FetchState::Ready("fresh"));
}

#[test]
fn guard_clones_share_one_generation() {
    let guard = RequestGuard::new();
    let token = guard.begin();
    let clone = guard.clone();
    let _ = clone.begin();
    assert!(!token.is_current());
}
