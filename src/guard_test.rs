use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers;

const SEG: PublicRouteMatch = PublicRouteMatch::Segment;

fn signed_in() -> AuthContext {
    AuthContext::with_token("tok")
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn api_and_asset_paths_are_excluded() {
    for path in [
        "/api/holidays",
        "/api",
        "/assets/app.js",
        "/static/logo",
        "/pkg/console_bg.wasm",
        "/favicon.ico",
        "/healthz",
        "/reports/export.csv",
    ] {
        assert_eq!(classify(path, SEG), RouteClass::Excluded, "path {path}");
    }
}

#[test]
fn dotted_path_is_excluded_even_under_public_route() {
    assert_eq!(classify("/login/logo.svg", SEG), RouteClass::Excluded);
}

#[test]
fn public_routes_classified_public() {
    for path in ["/login", "/forgot-password", "/reset-password", "/reset-password/abc"] {
        assert_eq!(classify(path, SEG), RouteClass::Public, "path {path}");
    }
}

#[test]
fn console_screens_are_protected() {
    for path in ["/", "/clockings", "/employees/12", "/holidays", "/weekends", "/apis"] {
        assert_eq!(classify(path, SEG), RouteClass::Protected, "path {path}");
    }
}

#[test]
fn segment_mode_rejects_lookalike_routes() {
    assert_eq!(classify("/login-extra", SEG), RouteClass::Protected);
    assert_eq!(classify("/loginx", SEG), RouteClass::Protected);
}

#[test]
fn prefix_mode_keeps_lookalike_false_positive() {
    assert_eq!(classify("/login-extra", PublicRouteMatch::Prefix), RouteClass::Public);
    assert_eq!(classify("/login", PublicRouteMatch::Prefix), RouteClass::Public);
    assert_eq!(classify("/clockings", PublicRouteMatch::Prefix), RouteClass::Protected);
}

// =============================================================================
// decide
// =============================================================================

#[test]
fn anonymous_protected_redirects_to_login_with_callback() {
    for path in ["/", "/clockings", "/sites/4/edit"] {
        let decision = decide(path, &AuthContext::anonymous(), SEG);
        assert_eq!(decision, GuardDecision::RedirectToLogin { callback: path.to_owned() });
    }
}

#[test]
fn signed_in_public_redirects_home() {
    for path in PUBLIC_ROUTES {
        assert_eq!(decide(path, &signed_in(), SEG), GuardDecision::RedirectToHome);
    }
}

#[test]
fn anonymous_public_passes_through() {
    for path in PUBLIC_ROUTES {
        assert_eq!(decide(path, &AuthContext::anonymous(), SEG), GuardDecision::Allow);
    }
}

#[test]
fn signed_in_protected_passes_through() {
    for path in ["/", "/clockings", "/employees"] {
        assert_eq!(decide(path, &signed_in(), SEG), GuardDecision::Allow);
    }
}

#[test]
fn excluded_paths_always_pass() {
    assert_eq!(decide("/api/holidays", &AuthContext::anonymous(), SEG), GuardDecision::Allow);
    assert_eq!(decide("/favicon.ico", &signed_in(), SEG), GuardDecision::Allow);
}

#[test]
fn clockings_location_is_url_encoded() {
    let decision = decide("/clockings", &AuthContext::anonymous(), SEG);
    assert_eq!(decision.location().as_deref(), Some("/login?callbackUrl=%2Fclockings"));
}

#[test]
fn home_location_is_root() {
    assert_eq!(GuardDecision::RedirectToHome.location().as_deref(), Some("/"));
    assert_eq!(GuardDecision::Allow.location(), None);
}

#[test]
fn login_redirect_target_encodes_nested_path() {
    assert_eq!(login_redirect_target("/sites/4/edit"), "/login?callbackUrl=%2Fsites%2F4%2Fedit");
}

// =============================================================================
// middleware
// =============================================================================

fn guarded_router() -> Router {
    let state = test_helpers::test_app_state();
    Router::new()
        .route("/clockings", get(|| async { "clockings page" }))
        .route("/login", get(|| async { "login page" }))
        .route("/api/holidays", get(|| async { "api" }))
        .layer(axum::middleware::from_fn_with_state(state, route_guard))
}

async fn send(path: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut builder = axum::http::Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    guarded_router()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn middleware_redirects_anonymous_clockings() {
    let resp = send("/clockings", None).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/login?callbackUrl=%2Fclockings");
}

#[tokio::test]
async fn middleware_redirects_signed_in_login() {
    let resp = send("/login", Some("access_token=valid")).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn middleware_serves_allowed_requests() {
    assert_eq!(send("/clockings", Some("access_token=valid")).await.status(), StatusCode::OK);
    assert_eq!(send("/login", None).await.status(), StatusCode::OK);
    assert_eq!(send("/api/holidays", None).await.status(), StatusCode::OK);
}
