#![cfg(target_arch = "wasm32")]

use stock_dashboard_wasm::application::session::{init_session, session};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn init_makes_the_session_available() {
    let ctx = init_session();
    assert!(session().is_ok());
    assert!(!ctx.is_authenticated());
}

#[wasm_bindgen_test]
fn init_is_idempotent() {
    let first = init_session() as *const _;
    let second = init_session() as *const _;
    assert_eq!(first, second);
}
