use serde_json::json;

use super::*;
use crate::state::test_helpers::RecordingTransport;

fn credentials(callback: Option<&str>) -> LoginForm {
    LoginForm {
        email: "  hr@example.com ".into(),
        password: "s3cret-pass".into(),
        callback_url: callback.map(str::to_owned),
    }
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_issues_session_and_redirects_to_callback() {
    let api = RecordingTransport::replying(vec![Envelope::ok(json!({
        "accessToken": "acc",
        "refreshToken": "ref",
        "user": { "id": 1, "name": "HR Admin" }
    }))]);
    let login = login(&api, credentials(Some("/clockings")), PublicRouteMatch::Segment).await;

    assert!(login.envelope.is_success());
    let outcome = login.envelope.data().unwrap();
    assert_eq!(outcome.redirect_to, "/clockings");
    assert_eq!(outcome.user, Some(json!({ "id": 1, "name": "HR Admin" })));
    assert_eq!(
        login.session,
        Some(IssuedSession { access_token: "acc".into(), refresh_token: Some("ref".into()) })
    );

    let req = api.last().unwrap();
    assert_eq!(req.endpoint, Endpoint::AuthLogin);
    assert!(req.token.is_none());
    assert_eq!(req.body, Some(json!({ "email": "hr@example.com", "password": "s3cret-pass" })));
}

#[tokio::test]
async fn login_failure_sets_no_session() {
    let api = RecordingTransport::replying(vec![Envelope::failure("Invalid credentials")]);
    let login = login(&api, credentials(None), PublicRouteMatch::Segment).await;
    assert!(!login.envelope.is_success());
    assert_eq!(login.envelope.message(), Some("Invalid credentials"));
    assert!(login.session.is_none());
}

#[tokio::test]
async fn empty_access_token_is_a_failure() {
    let api = RecordingTransport::replying(vec![Envelope::ok(json!({ "access_token": "" }))]);
    let login = login(&api, credentials(None), PublicRouteMatch::Segment).await;
    assert!(!login.envelope.is_success());
    assert!(login.session.is_none());
}

#[tokio::test]
async fn invalid_login_form_makes_no_call() {
    let api = RecordingTransport::new();
    let form = LoginForm { email: "not-an-email".into(), password: String::new(), callback_url: None };
    let login = login(&api, form, PublicRouteMatch::Segment).await;
    assert_eq!(login.envelope.message(), Some("email must be an email address; password is required"));
    assert_eq!(api.calls(), 0);
}

#[test]
fn login_form_accepts_camel_case_callback() {
    let form: LoginForm =
        serde_json::from_value(json!({ "email": "a@b.co", "password": "x", "callbackUrl": "/sites" })).unwrap();
    assert_eq!(form.callback_url.as_deref(), Some("/sites"));
}

// =============================================================================
// safe_redirect
// =============================================================================

#[test]
fn safe_redirect_keeps_protected_same_origin_paths() {
    assert_eq!(safe_redirect(Some("/employees/4"), PublicRouteMatch::Segment), "/employees/4");
    assert_eq!(safe_redirect(Some("/"), PublicRouteMatch::Segment), "/");
}

#[test]
fn safe_redirect_falls_back_home() {
    let mode = PublicRouteMatch::Segment;
    assert_eq!(safe_redirect(None, mode), "/");
    assert_eq!(safe_redirect(Some(""), mode), "/");
    assert_eq!(safe_redirect(Some("https://evil.example/"), mode), "/");
    assert_eq!(safe_redirect(Some("//evil.example"), mode), "/");
    assert_eq!(safe_redirect(Some("/\\evil.example"), mode), "/");
    assert_eq!(safe_redirect(Some("/login"), mode), "/");
    assert_eq!(safe_redirect(Some("/api/companies"), mode), "/");
}

#[test]
fn safe_redirect_follows_matcher_mode() {
    assert_eq!(safe_redirect(Some("/login-extra"), PublicRouteMatch::Segment), "/login-extra");
    assert_eq!(safe_redirect(Some("/login-extra"), PublicRouteMatch::Prefix), "/");
}

// =============================================================================
// password recovery
// =============================================================================

#[tokio::test]
async fn forgot_password_posts_email() {
    let api = RecordingTransport::new();
    let env = forgot_password(&api, ForgotPasswordForm { email: "hr@example.com".into() }).await;
    assert!(env.is_success());
    let req = api.last().unwrap();
    assert_eq!(req.endpoint, Endpoint::AuthForgotPassword);
    assert_eq!(req.body, Some(json!({ "email": "hr@example.com" })));
}

#[tokio::test]
async fn forgot_password_requires_email() {
    let api = RecordingTransport::new();
    let env = forgot_password(&api, ForgotPasswordForm { email: " ".into() }).await;
    assert_eq!(env.message(), Some("email is required"));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn reset_password_omits_confirmation_from_body() {
    let api = RecordingTransport::new();
    let form = ResetPasswordForm {
        token: "reset-tok".into(),
        password: "longenough".into(),
        confirm_password: "longenough".into(),
    };
    let env = reset_password(&api, form).await;
    assert!(env.is_success());
    let req = api.last().unwrap();
    assert_eq!(req.endpoint, Endpoint::AuthResetPassword);
    assert_eq!(req.body, Some(json!({ "token": "reset-tok", "password": "longenough" })));
}

#[tokio::test]
async fn reset_password_checks_length_and_match() {
    let api = RecordingTransport::new();
    let form = ResetPasswordForm { token: "t".into(), password: "short".into(), confirm_password: "other".into() };
    let env = reset_password(&api, form).await;
    assert_eq!(
        env.message(),
        Some("password must be at least 8 characters; confirm_password does not match password")
    );
    assert_eq!(api.calls(), 0);
}
