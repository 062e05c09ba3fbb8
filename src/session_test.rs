use axum::http::{HeaderMap, HeaderValue, header};

use super::*;

fn jar_with(cookie_header: &str) -> CookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(cookie_header).unwrap());
    CookieJar::from_headers(&headers)
}

const POLICY: CookiePolicy = CookiePolicy { secure: true, max_age_secs: 3600 };

// =============================================================================
// AuthContext
// =============================================================================

#[test]
fn from_jar_reads_access_token() {
    let ctx = AuthContext::from_jar(&jar_with("theme=dark; access_token=abc123"));
    assert_eq!(ctx.token(), Some("abc123"));
    assert!(ctx.is_authenticated());
}

#[test]
fn from_jar_without_cookie_is_anonymous() {
    let ctx = AuthContext::from_jar(&jar_with("theme=dark"));
    assert_eq!(ctx, AuthContext::anonymous());
    assert!(!ctx.is_authenticated());
}

#[test]
fn empty_cookie_value_is_anonymous() {
    let ctx = AuthContext::from_jar(&jar_with("access_token="));
    assert!(!ctx.is_authenticated());
}

#[test]
fn refresh_cookie_alone_is_not_a_session() {
    let ctx = AuthContext::from_jar(&jar_with("refresh_token=r1"));
    assert!(ctx.token().is_none());
}

#[test]
fn with_token_empty_is_anonymous() {
    assert_eq!(AuthContext::with_token(""), AuthContext::anonymous());
}

#[tokio::test]
async fn extractor_reads_request_cookies() {
    let req = axum::http::Request::builder()
        .uri("/api/holidays")
        .header(header::COOKIE, "access_token=tok")
        .body(())
        .unwrap();
    let (mut parts, ()) = req.into_parts();
    let Ok(ctx) = AuthContext::from_request_parts(&mut parts, &()).await;
    assert_eq!(ctx.token(), Some("tok"));
}

// =============================================================================
// cookie builders
// =============================================================================

#[test]
fn store_session_sets_hardened_cookies() {
    let jar = store_session(CookieJar::new(), POLICY, "acc".into(), Some("ref".into()));

    let access = jar.get(ACCESS_COOKIE).unwrap();
    assert_eq!(access.value(), "acc");
    assert_eq!(access.path(), Some("/"));
    assert_eq!(access.http_only(), Some(true));
    assert_eq!(access.secure(), Some(true));
    assert_eq!(access.same_site(), Some(SameSite::Lax));
    assert_eq!(access.max_age(), Some(Duration::seconds(3600)));

    assert_eq!(jar.get(REFRESH_COOKIE).unwrap().value(), "ref");
}

#[test]
fn store_session_without_refresh_token_expires_stale_refresh_cookie() {
    let jar = store_session(jar_with("refresh_token=old"), POLICY, "acc".into(), None);
    assert_eq!(jar.get(ACCESS_COOKIE).unwrap().value(), "acc");
    let refresh = jar.get(REFRESH_COOKIE).unwrap();
    assert_eq!(refresh.value(), "");
    assert_eq!(refresh.max_age(), Some(Duration::ZERO));
}

#[test]
fn clear_session_expires_both_cookies() {
    let jar = clear_session(jar_with("access_token=acc; refresh_token=ref"), POLICY);
    for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
        let cookie = jar.get(name).unwrap();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
