//! Holiday and weekend actions.

use serde_json::Value;

use super::{fetch, submit};
use crate::api::{ApiTransport, Endpoint, Envelope, RecordId};
use crate::forms::{HolidayForm, ListQuery, WeekendForm};
use crate::models::{Holiday, Weekend};
use crate::session::AuthContext;

pub async fn create_holiday(api: &dyn ApiTransport, auth: &AuthContext, form: HolidayForm) -> Envelope<Holiday> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    if let Err(err) = form.validate() {
        return err.into_envelope();
    }
    submit(api, Some(token), Endpoint::HolidayCreate, &form).await
}

pub async fn list_holidays(api: &dyn ApiTransport, auth: &AuthContext, query: &ListQuery) -> Envelope<Vec<Holiday>> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    let pairs = match query.to_pairs() {
        Ok(pairs) => pairs,
        Err(err) => return err.into_envelope(),
    };
    fetch(api, Some(token), Endpoint::HolidayList, pairs).await
}

pub async fn get_holiday(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<Holiday> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    fetch(api, Some(token), Endpoint::HolidaySingle(id), Vec::new()).await
}

pub async fn delete_holiday(api: &dyn ApiTransport, auth: &AuthContext, id: RecordId) -> Envelope<Value> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    fetch(api, Some(token), Endpoint::HolidayDelete(id), Vec::new()).await
}

pub async fn create_weekend(api: &dyn ApiTransport, auth: &AuthContext, form: WeekendForm) -> Envelope<Vec<Weekend>> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    if let Err(err) = form.validate() {
        return err.into_envelope();
    }
    submit(api, Some(token), Endpoint::WeekendCreate, &form).await
}

pub async fn list_weekends(api: &dyn ApiTransport, auth: &AuthContext, query: &ListQuery) -> Envelope<Vec<Weekend>> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    let pairs = match query.to_pairs() {
        Ok(pairs) => pairs,
        Err(err) => return err.into_envelope(),
    };
    fetch(api, Some(token), Endpoint::WeekendList, pairs).await
}

#[cfg(test)]
#[path = "calendar_test.rs"]
mod tests;
