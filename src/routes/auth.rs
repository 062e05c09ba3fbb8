//! Auth routes. Login stores the issued tokens as HttpOnly cookies; logout
//! expires them without calling the API.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;

use super::rejected;
use crate::actions::auth::{self as auth_actions, ForgotPasswordForm, LoginForm, LoginOutcome, ResetPasswordForm};
use crate::api::Envelope;
use crate::session::{clear_session, store_session};
use crate::state::AppState;

/// `POST /api/auth/login`: exchange credentials for session cookies.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Json<LoginForm>, JsonRejection>,
) -> (CookieJar, Json<Envelope<LoginOutcome>>) {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return (jar, rejected(&rejection)),
    };

    let outcome = auth_actions::login(state.api.as_ref(), form, state.config.public_route_match).await;
    let jar = match outcome.session {
        Some(session) => {
            tracing::info!("console login succeeded");
            store_session(jar, state.cookie_policy(), session.access_token, session.refresh_token)
        }
        None => jar,
    };
    (jar, Json(outcome.envelope))
}

/// `POST /api/auth/logout`: expire both session cookies.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Envelope<Value>>) {
    (clear_session(jar, state.cookie_policy()), Json(Envelope::ok_empty()))
}

/// `POST /api/auth/forgot-password`
pub async fn forgot_password(
    State(state): State<AppState>,
    form: Result<Json<ForgotPasswordForm>, JsonRejection>,
) -> Json<Envelope<Value>> {
    match form {
        Ok(Json(form)) => Json(auth_actions::forgot_password(state.api.as_ref(), form).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `POST /api/auth/reset-password`
pub async fn reset_password(
    State(state): State<AppState>,
    form: Result<Json<ResetPasswordForm>, JsonRejection>,
) -> Json<Envelope<Value>> {
    match form {
        Ok(Json(form)) => Json(auth_actions::reset_password(state.api.as_ref(), form).await),
        Err(rejection) => rejected(&rejection),
    }
}
