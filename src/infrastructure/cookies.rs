use wasm_bindgen::JsCast;

/// Cookie the auth backend sets for the browser session
pub const SESSION_COOKIE: &str = "token";

/// Extract a cookie value from a `document.cookie` header string
pub fn token_from_cookie_header(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
        .find(|value| !value.is_empty())
}

/// Current session token, if the cookie is present. Presence only - the
/// token is never validated client-side.
pub fn session_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    token_from_cookie_header(&cookies, SESSION_COOKIE)
}

pub fn has_session_token() -> bool {
    session_token().is_some()
}
