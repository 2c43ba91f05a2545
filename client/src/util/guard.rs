//! Route-guard decisions for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_route` renders whatever `guard_decision` returns and
//! re-evaluates it whenever the session signal changes. `Resolving` is its own
//! branch so a reload never bounces through `/login` while the persisted
//! token is still being validated.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use url::form_urlencoded;

use crate::state::session::Session;

/// Login route.
pub const LOGIN_PATH: &str = "/login";
/// Query parameter carrying the originally requested path.
pub const REDIRECT_PARAM: &str = "redirect";

/// What a protected route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show the neutral loading affordance.
    Loading,
    /// Anonymous: replace-navigate to `to`.
    Redirect { to: String },
    /// Authenticated: render the requested view unchanged.
    Render,
}

/// Decide how to handle `requested_path` under `session`.
pub fn guard_decision(session: &Session, requested_path: &str) -> GuardDecision {
    match session {
        Session::Resolving { .. } => GuardDecision::Loading,
        Session::Anonymous => GuardDecision::Redirect {
            to: login_redirect_target(requested_path),
        },
        Session::Authenticated { .. } => GuardDecision::Render,
    }
}

/// Path plus query string, as the router reports them.
pub fn requested_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// `/login` carrying `requested_path` as redirect-back metadata.
pub fn login_redirect_target(requested_path: &str) -> String {
    if requested_path.is_empty() || requested_path == "/" {
        return LOGIN_PATH.to_owned();
    }
    let encoded: String = form_urlencoded::byte_serialize(requested_path.as_bytes()).collect();
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={encoded}")
}

/// Where to go after a successful login.
///
/// Only same-origin absolute paths are honored; anything else (missing,
/// protocol-relative, or pointing back at an auth page) falls back to `/`.
pub fn redirect_back_target(redirect: Option<&str>) -> String {
    match redirect {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !is_auth_path(path) =>
        {
            path.to_owned()
        }
        _ => "/".to_owned(),
    }
}

fn is_auth_path(path: &str) -> bool {
    let route = path.split(['?', '#']).next().unwrap_or(path);
    route == LOGIN_PATH || route == "/signup"
}

/// Target for unknown routes.
pub fn fallback_target(session: &Session) -> &'static str {
    match session {
        Session::Authenticated { .. } => "/",
        Session::Resolving { .. } | Session::Anonymous => LOGIN_PATH,
    }
}
