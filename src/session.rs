//! Session cookies and the per-request auth context.
//!
//! DESIGN
//! ======
//! The bearer token lives in the `access_token` cookie. Nothing reads the
//! cookie ad hoc: handlers take an [`AuthContext`] extractor, built once per
//! request, and pass it explicitly to actions. The guard middleware builds
//! its own from the same jar.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

pub const ACCESS_COOKIE: &str = "access_token";
pub const REFRESH_COOKIE: &str = "refresh_token";

// =============================================================================
// AUTH CONTEXT
// =============================================================================

/// Explicit authorization context for one request or action invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    /// Context with no session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Context carrying `token`. Empty tokens are treated as absent.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self { token: (!token.is_empty()).then_some(token) }
    }

    /// Read the access token from a cookie jar.
    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(ACCESS_COOKIE)
            .map_or_else(Self::anonymous, |cookie| Self::with_token(cookie.value()))
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_jar(&CookieJar::from_headers(&parts.headers)))
    }
}

// =============================================================================
// COOKIE BUILDERS
// =============================================================================

/// Cookie flags shared by every session cookie.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    pub secure: bool,
    pub max_age_secs: i64,
}

fn session_cookie(name: &'static str, value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// Add the access and refresh cookies issued by a successful login. A login
/// without a refresh token expires any refresh cookie left from before.
#[must_use]
pub fn store_session(jar: CookieJar, policy: CookiePolicy, access: String, refresh: Option<String>) -> CookieJar {
    let max_age = Duration::seconds(policy.max_age_secs);
    let jar = jar.add(session_cookie(ACCESS_COOKIE, access, policy.secure, max_age));
    match refresh {
        Some(refresh) => jar.add(session_cookie(REFRESH_COOKIE, refresh, policy.secure, max_age)),
        None => jar.add(session_cookie(REFRESH_COOKIE, String::new(), policy.secure, Duration::ZERO)),
    }
}

/// Expire both session cookies.
#[must_use]
pub fn clear_session(jar: CookieJar, policy: CookiePolicy) -> CookieJar {
    jar.add(session_cookie(ACCESS_COOKIE, String::new(), policy.secure, Duration::ZERO))
        .add(session_cookie(REFRESH_COOKIE, String::new(), policy.secure, Duration::ZERO))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
