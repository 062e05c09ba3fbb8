//! Company, site and employee endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::Value;

use super::{RecordPath, rejected};
use crate::actions::records;
use crate::api::Envelope;
use crate::forms::{CompanyForm, EmployeeForm, ListQuery, SiteForm};
use crate::models::{Company, Employee, Site};
use crate::session::AuthContext;
use crate::state::AppState;

type ListParams = Result<Query<ListQuery>, QueryRejection>;

// =============================================================================
// COMPANIES
// =============================================================================

/// `GET /api/companies`
pub async fn list_companies(
    State(state): State<AppState>,
    auth: AuthContext,
    query: ListParams,
) -> Json<Envelope<Vec<Company>>> {
    match query {
        Ok(Query(query)) => Json(records::list_companies(state.api.as_ref(), &auth, &query).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `GET /api/companies/{id}`
pub async fn get_company(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<Company>> {
    Json(records::get_company(state.api.as_ref(), &auth, id).await)
}

/// `POST /api/companies`
pub async fn create_company(
    State(state): State<AppState>,
    auth: AuthContext,
    form: Result<Json<CompanyForm>, JsonRejection>,
) -> Json<Envelope<Company>> {
    match form {
        Ok(Json(form)) => Json(records::create_company(state.api.as_ref(), &auth, form).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `PATCH /api/companies/{id}`
pub async fn update_company(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
    form: Result<Json<CompanyForm>, JsonRejection>,
) -> Json<Envelope<Company>> {
    match form {
        Ok(Json(form)) => Json(records::update_company(state.api.as_ref(), &auth, id, form).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `DELETE /api/companies/{id}`
pub async fn delete_company(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<Value>> {
    Json(records::delete_company(state.api.as_ref(), &auth, id).await)
}

// =============================================================================
// SITES
// =============================================================================

/// `GET /api/sites`
pub async fn list_sites(State(state): State<AppState>, auth: AuthContext, query: ListParams) -> Json<Envelope<Vec<Site>>> {
    match query {
        Ok(Query(query)) => Json(records::list_sites(state.api.as_ref(), &auth, &query).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `GET /api/sites/{id}`
pub async fn get_site(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<Site>> {
    Json(records::get_site(state.api.as_ref(), &auth, id).await)
}

/// `GET /api/sites/{id}/form`: the edit form, hydrated from the stored site.
pub async fn site_form(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<SiteForm>> {
    Json(records::site_form(state.api.as_ref(), &auth, id).await)
}

/// `POST /api/sites`
pub async fn create_site(
    State(state): State<AppState>,
    auth: AuthContext,
    form: Result<Json<SiteForm>, JsonRejection>,
) -> Json<Envelope<Site>> {
    match form {
        Ok(Json(form)) => Json(records::create_site(state.api.as_ref(), &auth, form).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `PATCH /api/sites/{id}`
pub async fn update_site(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
    form: Result<Json<SiteForm>, JsonRejection>,
) -> Json<Envelope<Site>> {
    match form {
        Ok(Json(form)) => Json(records::update_site(state.api.as_ref(), &auth, id, form).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `DELETE /api/sites/{id}`
pub async fn delete_site(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<Value>> {
    Json(records::delete_site(state.api.as_ref(), &auth, id).await)
}

// =============================================================================
// EMPLOYEES
// =============================================================================

/// `GET /api/employees`
pub async fn list_employees(
    State(state): State<AppState>,
    auth: AuthContext,
    query: ListParams,
) -> Json<Envelope<Vec<Employee>>> {
    match query {
        Ok(Query(query)) => Json(records::list_employees(state.api.as_ref(), &auth, &query).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `GET /api/employees/{id}`
pub async fn get_employee(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<Employee>> {
    Json(records::get_employee(state.api.as_ref(), &auth, id).await)
}

/// `POST /api/employees`
pub async fn create_employee(
    State(state): State<AppState>,
    auth: AuthContext,
    form: Result<Json<EmployeeForm>, JsonRejection>,
) -> Json<Envelope<Employee>> {
    match form {
        Ok(Json(form)) => Json(records::create_employee(state.api.as_ref(), &auth, form).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `PATCH /api/employees/{id}`
pub async fn update_employee(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
    form: Result<Json<EmployeeForm>, JsonRejection>,
) -> Json<Envelope<Employee>> {
    match form {
        Ok(Json(form)) => Json(records::update_employee(state.api.as_ref(), &auth, id, form).await),
        Err(rejection) => rejected(&rejection),
    }
}

/// `DELETE /api/employees/{id}`
pub async fn delete_employee(
    State(state): State<AppState>,
    auth: AuthContext,
    RecordPath(id): RecordPath,
) -> Json<Envelope<Value>> {
    Json(records::delete_employee(state.api.as_ref(), &auth, id).await)
}
