//! Route guard. Decides whether a page request is served, sent to the
//! login screen, or bounced back home.
//!
//! DESIGN
//! ======
//! Classification is a pure function of the path. Precedence is fixed:
//!
//! 1. Excluded: API routes, static asset prefixes, health check, and any
//!    path containing a `.`. The guard never runs for these.
//! 2. Public: the login and password recovery screens.
//! 3. Protected: everything else.
//!
//! Public membership has two matcher modes. `Segment` (the default) only
//! accepts the exact route or a continuation after `/`. `Prefix` is the raw
//! string prefix test, which also accepts `/login-extra`; it is kept for
//! deployments that relied on that behaviour.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::session::AuthContext;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const CALLBACK_PARAM: &str = "callbackUrl";

pub const PUBLIC_ROUTES: &[&str] = &["/login", "/forgot-password", "/reset-password"];

const EXCLUDED_PREFIXES: &[&str] = &["/api/", "/assets/", "/static/", "/pkg/"];
const EXCLUDED_PATHS: &[&str] = &["/api", "/favicon.ico", "/healthz"];

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicRouteMatch {
    Segment,
    Prefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Excluded,
    Public,
    Protected,
}

/// True for paths the guard is never invoked on.
#[must_use]
pub fn is_excluded(path: &str) -> bool {
    path.contains('.')
        || EXCLUDED_PATHS.contains(&path)
        || EXCLUDED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}

#[must_use]
pub fn is_public(path: &str, mode: PublicRouteMatch) -> bool {
    PUBLIC_ROUTES.iter().any(|route| match mode {
        PublicRouteMatch::Prefix => path.starts_with(route),
        PublicRouteMatch::Segment => path
            .strip_prefix(route)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
    })
}

#[must_use]
pub fn classify(path: &str, mode: PublicRouteMatch) -> RouteClass {
    if is_excluded(path) {
        RouteClass::Excluded
    } else if is_public(path, mode) {
        RouteClass::Public
    } else {
        RouteClass::Protected
    }
}

// =============================================================================
// DECISION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Anonymous request for a protected page. Carries the path to return to.
    RedirectToLogin { callback: String },
    /// Signed-in request for a public page.
    RedirectToHome,
}

impl GuardDecision {
    /// Redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin { callback } => Some(login_redirect_target(callback)),
            Self::RedirectToHome => Some(HOME_PATH.to_owned()),
        }
    }
}

/// `/login?callbackUrl=<path>` with the path form-urlencoded.
#[must_use]
pub fn login_redirect_target(callback: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(callback.as_bytes()).collect();
    format!("{LOGIN_PATH}?{CALLBACK_PARAM}={encoded}")
}

#[must_use]
pub fn decide(path: &str, auth: &AuthContext, mode: PublicRouteMatch) -> GuardDecision {
    match (classify(path, mode), auth.is_authenticated()) {
        (RouteClass::Excluded, _) | (RouteClass::Public, false) | (RouteClass::Protected, true) => {
            GuardDecision::Allow
        }
        (RouteClass::Public, true) => GuardDecision::RedirectToHome,
        (RouteClass::Protected, false) => GuardDecision::RedirectToLogin { callback: path.to_owned() },
    }
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// Axum middleware running [`decide`] on every request.
pub async fn route_guard(State(state): State<AppState>, jar: CookieJar, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let auth = AuthContext::from_jar(&jar);
    let decision = decide(&path, &auth, state.config.public_route_match);
    tracing::debug!(%path, ?decision, "route guard");

    match decision.location() {
        None => next.run(req).await,
        Some(location) => Redirect::temporary(&location).into_response(),
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
