//! Company, site and employee actions.

use serde_json::Value;

use super::{fetch, submit};
use crate::api::{ApiTransport, Endpoint, Envelope, RecordId};
use crate::forms::{CompanyForm, EmployeeForm, ListQuery, SiteForm};
use crate::models::{Company, Employee, Site};
use crate::session::AuthContext;

// =============================================================================
// SHARED
// =============================================================================

async fn list<T: serde::de::DeserializeOwned>(
    api: &dyn ApiTransport,
    auth: &AuthContext,
    endpoint: Endpoint,
    query: &ListQuery,
) -> Envelope<T> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    match query.to_pairs() {
        Ok(pairs) => fetch(api, Some(token), endpoint, pairs).await,
        Err(err) => err.into_envelope(),
    }
}

async fn single<T: serde::de::DeserializeOwned>(
    api: &dyn ApiTransport,
    auth: &AuthContext,
    endpoint: Endpoint,
) -> Envelope<T> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    fetch(api, Some(token), endpoint, Vec::new()).await
}

// =============================================================================
// COMPANIES
// =============================================================================

pub async fn list_companies(api: &dyn ApiTransport, auth: &AuthContext, query: &ListQuery) -> Envelope<Vec<Company>> {
    list(api, auth, Endpoint::CompanyList, query).await
}

pub async fn get_company(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<Company> {
    single(api, auth, Endpoint::CompanySingle(id)).await
}

pub async fn create_company(api: &dyn ApiTransport, auth: &AuthContext, form: CompanyForm) -> Envelope<Company> {
    save_company(api, auth, Endpoint::CompanyCreate, form).await
}

pub async fn update_company(
    api: &dyn ApiTransport,
    auth: &AuthContext,
    id: RecordId,
    form: CompanyForm,
) -> Envelope<Company> {
    save_company(api, auth, Endpoint::CompanyUpdate(id), form).await
}

async fn save_company(
    api: &dyn ApiTransport,
    auth: &AuthContext,
    endpoint: Endpoint,
    form: CompanyForm,
) -> Envelope<Company> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    if let Err(err) = form.validate() {
        return err.into_envelope();
    }
    submit(api, Some(token), endpoint, &form).await
}

pub async fn delete_company(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<Value> {
    single(api, auth, Endpoint::CompanyDelete(id)).await
}

// =============================================================================
// SITES
// =============================================================================

pub async fn list_sites(api: &dyn ApiTransport, auth: &AuthContext, query: &ListQuery) -> Envelope<Vec<Site>> {
    list(api, auth, Endpoint::SiteList, query).await
}

pub async fn get_site(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<Site> {
    single(api, auth, Endpoint::SiteSingle(id)).await
}

/// Fetch a site and hydrate the edit form from it.
pub async fn site_form(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<SiteForm> {
    get_site(api, auth, id)
        .await
        .map(|site| SiteForm::from_record(&site))
}

pub async fn create_site(api: &dyn ApiTransport, auth: &AuthContext, form: SiteForm) -> Envelope<Site> {
    save_site(api, auth, Endpoint::SiteCreate, form).await
}

pub async fn update_site(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId, form: SiteForm) -> Envelope<Site> {
    save_site(api, auth, Endpoint::SiteUpdate(id), form).await
}

async fn save_site(api: &dyn ApiTransport, auth: &AuthContext, endpoint: Endpoint, form: SiteForm) -> Envelope<Site> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    match form.into_payload() {
        Ok(payload) => submit(api, Some(token), endpoint, &payload).await,
        Err(err) => err.into_envelope(),
    }
}

pub async fn delete_site(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<Value> {
    single(api, auth, Endpoint::SiteDelete(id)).await
}

// =============================================================================
// EMPLOYEES
// =============================================================================

pub async fn list_employees(api: &dyn ApiTransport, auth: &AuthContext, query: &ListQuery) -> Envelope<Vec<Employee>> {
    list(api, auth, Endpoint::EmployeeList, query).await
}

pub async fn get_employee(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<Employee> {
    single(api, auth, Endpoint::EmployeeSingle(id)).await
}

pub async fn create_employee(api: &dyn ApiTransport, auth: &AuthContext, form: EmployeeForm) -> Envelope<Employee> {
    save_employee(api, auth, Endpoint::EmployeeCreate, form).await
}

pub async fn update_employee(
    api: &dyn ApiTransport,
    auth: &AuthContext,
    id: RecordId,
    form: EmployeeForm,
) -> Envelope<Employee> {
    save_employee(api, auth, Endpoint::EmployeeUpdate(id), form).await
}

async fn save_employee(
    api: &dyn ApiTransport,
    auth: &AuthContext,
    endpoint: Endpoint,
    form: EmployeeForm,
) -> Envelope<Employee> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    if let Err(err) = form.validate() {
        return err.into_envelope();
    }
    submit(api, Some(token), endpoint, &form).await
}

pub async fn delete_employee(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<Value> {
    single(api, auth, Endpoint::EmployeeDelete(id)).await
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
