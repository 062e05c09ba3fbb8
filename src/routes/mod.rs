//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves both halves of the console. Action endpoints live
//! under `/api` and answer `200` with an [`Envelope`] body, so the UI
//! branches on `success` rather than on HTTP status. An unknown action or a
//! wrong method still gets an envelope, with `404` or `405`. Everything else is the
//! compiled page shell from `web_dir`, with unknown paths falling back to
//! `index.html` for client-side routing. The route guard wraps the whole
//! router and lets `/api`, assets and dotted paths straight through.
//!
//! [`Envelope`]: crate::api::Envelope

pub mod attendance;
pub mod auth;
pub mod calendar;
pub mod records;

use axum::Router;
use axum::extract::{FromRequestParts, Path};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::middleware;
use axum::response::Json;
use axum::routing::{any, get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::api::{Envelope, RecordId};
use crate::guard::route_guard;
use crate::state::AppState;

/// Action endpoints, one per console operation.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/companies", get(records::list_companies).post(records::create_company))
        .route(
            "/api/companies/{id}",
            get(records::get_company)
                .patch(records::update_company)
                .delete(records::delete_company),
        )
        .route("/api/sites", get(records::list_sites).post(records::create_site))
        .route(
            "/api/sites/{id}",
            get(records::get_site)
                .patch(records::update_site)
                .delete(records::delete_site),
        )
        .route("/api/sites/{id}/form", get(records::site_form))
        .route("/api/employees", get(records::list_employees).post(records::create_employee))
        .route(
            "/api/employees/{id}",
            get(records::get_employee)
                .patch(records::update_employee)
                .delete(records::delete_employee),
        )
        .route("/api/clockings", get(attendance::list_clockings))
        .route("/api/shifts", get(attendance::list_shifts))
        .route("/api/absent-codes", get(attendance::list_absent_codes))
        .route("/api/work-cycles", get(attendance::list_work_cycles))
        .route("/api/holidays", get(calendar::list_holidays).post(calendar::create_holiday))
        .route("/api/holidays/{id}", get(calendar::get_holiday).delete(calendar::delete_holiday))
        .route("/api/weekends", get(calendar::list_weekends).post(calendar::create_weekend))
        .route("/api/{*rest}", any(unknown_action))
        .route("/healthz", get(healthz))
}

/// Full console: action endpoints, page shell, route guard.
pub fn app(state: AppState) -> Router {
    let web_dir = state.config.web_dir.clone();
    let shell = ServeDir::new(&web_dir).fallback(ServeFile::new(web_dir.join("index.html")));

    api_routes()
        .method_not_allowed_fallback(method_not_allowed)
        .fallback_service(shell)
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Envelope for a request body or query string that failed to parse.
pub(crate) fn rejected<T>(rejection: &impl std::fmt::Display) -> Json<Envelope<T>> {
    tracing::debug!(%rejection, "malformed action input");
    Json(Envelope::failure(rejection.to_string()))
}

/// Record id from the `{id}` path segment. A malformed id is answered with a
/// failure envelope like any other bad action input.
pub struct RecordPath(pub RecordId);

impl<S> FromRequestParts<S> for RecordPath
where
    S: Send + Sync,
{
    type Rejection = Json<Envelope<()>>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<RecordId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => Err(rejected(&rejection)),
        }
    }
}

async fn method_not_allowed() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(Envelope::failure("Method not allowed")))
}

async fn unknown_action() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::NOT_FOUND, Json(Envelope::failure("Unknown action")))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
