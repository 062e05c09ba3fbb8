//! Clocking listing and the lookup lists behind the employee form.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;

use super::rejected;
use crate::actions::attendance;
use crate::api::Envelope;
use crate::forms::ClockingQuery;
use crate::models::{AbsentCode, Clocking, Shift, WorkCycle};
use crate::session::AuthContext;
use crate::state::AppState;

/// `GET /api/clockings?site_id=&employee_id=&from=&to=`
pub async fn list_clockings(
    State(state): State<AppState>,
    auth: AuthContext,
    query: Result<Query<ClockingQuery>, QueryRejection>,
) -> Json<Envelope<Vec<Clocking>>> {
    match query {
        Ok(Query(query)) => Json(attendance::list_clockings(state.api.as_ref(), &auth, &query).await),
        Err(rejection) => rejected(&rejection),
    }
}

pub async fn list_shifts(State(state): State<AppState>, auth: AuthContext) -> Json<Envelope<Vec<Shift>>> {
    Json(attendance::list_shifts(state.api.as_ref(), &auth).await)
}

pub async fn list_absent_codes(State(state): State<AppState>, auth: AuthContext) -> Json<Envelope<Vec<AbsentCode>>> {
    Json(attendance::list_absent_codes(state.api.as_ref(), &auth).await)
}

pub async fn list_work_cycles(State(state): State<AppState>, auth: AuthContext) -> Json<Envelope<Vec<WorkCycle>>> {
    Json(attendance::list_work_cycles(state.api.as_ref(), &auth).await)
}
