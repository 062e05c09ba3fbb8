//! Holiday and weekend endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::Value;

use super::{RecordPath, rejected};
use crate::actions::calendar;
use crate::api::Envelope;
use crate::forms::{HolidayForm, ListQuery, WeekendForm};
use crate::models::{Holiday, Weekend};
use crate::session::AuthContext;
use crate::state::AppState;

/// `GET /api/holidays`
pub async fn list_holidays(
    State(state): State<AppState>,
    auth: AuthContext,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Json<Envelope<Vec<Holiday>>> {
    match query {
        Ok(Query(query)) => Json(calendar::list_holidays(state.api.as_ref(), &auth, &query).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `GET /api/holidays/{id}`
pub async fn get_holiday(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<Holiday>> {
    Json(calendar::get_holiday(state.api.as_ref(), &auth, id).await)
}

/// `POST /api/holidays`
pub async fn create_holiday(
    State(state): State<AppState>,
    auth: AuthContext,
    form: Result<Json<HolidayForm>, JsonRejection>,
) -> Json<Envelope<Holiday>> {
    match form {
        Ok(Json(form)) => Json(calendar::create_holiday(state.api.as_ref(), &auth, form).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `DELETE /api/holidays/{id}`
pub async fn delete_holiday(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<Value>> {
    Json(calendar::delete_holiday(state.api.as_ref(), &auth, id).await)
}

/// `GET /api/weekends`
pub async fn list_weekends(
    State(state): State<AppState>,
    auth: AuthContext,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Json<Envelope<Vec<Weekend>>> {
    match query {
        Ok(Query(query)) => Json(calendar::list_weekends(state.api.as_ref(), &auth, &query).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `POST /api/weekends`: one weekend row per selected day.
pub async fn create_weekend(
    State(state): State<AppState>,
    auth: AuthContext,
    form: Result<Json<WeekendForm>, JsonRejection>,
) -> Json<Envelope<Vec<Weekend>>> {
    match form {
        Ok(Json(form)) => Json(calendar::create_weekend(state.api.as_ref(), &auth, form).await),
        Err(rejection) => rejected(&rejection),
    }
}
