/// Paths that require a session token cookie
pub const PROTECTED_PATHS: &[&str] = &["/watchlist"];
/// Paths only shown to signed-out visitors
pub const AUTH_PATHS: &[&str] = &["/login", "/register"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
    RedirectToWatchlist,
}

/// Route-guard policy, evaluated once per navigation before the page
/// renders. A presence check only: token validity is the API's concern, so a
/// stale token still passes here.
pub fn decide_route(path: &str, has_token: bool) -> GuardDecision {
    let is_protected = PROTECTED_PATHS.iter().any(|route| path.starts_with(route));
    let is_auth_route = AUTH_PATHS.iter().any(|route| path.starts_with(route));

    if is_protected && !has_token {
        return GuardDecision::RedirectToLogin;
    }
    if is_auth_route && has_token {
        return GuardDecision::RedirectToWatchlist;
    }
    GuardDecision::Proceed
}
