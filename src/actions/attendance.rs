//! Clockings listing and the lookup lists used by employee forms.

use super::fetch;
use crate::api::{ApiTransport, Endpoint, Envelope};
use crate::forms::ClockingQuery;
use crate::models::{AbsentCode, Clocking, Shift, WorkCycle};
use crate::session::AuthContext;

pub async fn list_clockings(api: &dyn ApiTransport, auth: &AuthContext, query: &ClockingQuery) -> Envelope<Vec<Clocking>> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    match query.to_pairs() {
        Ok(pairs) => fetch(api, Some(token), Endpoint::ClockingList, pairs).await,
        Err(err) => err.into_envelope(),
    }
}

pub async fn list_shifts(api: &dyn ApiTransport, auth: &AuthContext) -> Envelope<Vec<Shift>> {
    lookup(api, auth, Endpoint::ShiftList).await
}

pub async fn list_absent_codes(api: &dyn ApiTransport, auth: &AuthContext) -> Envelope<Vec<AbsentCode>> {
    lookup(api, auth, Endpoint::AbsentCodeList).await
}

pub async fn list_work_cycles(api: &dyn ApiTransport, auth: &AuthContext) -> Envelope<Vec<WorkCycle>> {
    lookup(api, auth, Endpoint::WorkCycleList).await
}

async fn lookup<T: serde::de::DeserializeOwned>(
    api: &dyn ApiTransport,
    auth: &AuthContext,
    endpoint: Endpoint,
) -> Envelope<T> {
    let Some(token) = auth.token() else {
        return Envelope::not_authenticated();
    };
    fetch(api, Some(token), endpoint, Vec::new()).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use super::*;
    use crate::api::envelope::NOT_AUTHENTICATED;
    use crate::state::test_helpers::RecordingTransport;

    #[tokio::test]
    async fn lookups_require_session() {
        let api = RecordingTransport::new();
        let anon = AuthContext::anonymous();
        assert_eq!(list_clockings(&api, &anon, &ClockingQuery::default()).await.message(), Some(NOT_AUTHENTICATED));
        assert_eq!(list_shifts(&api, &anon).await.message(), Some(NOT_AUTHENTICATED));
        assert_eq!(list_absent_codes(&api, &anon).await.message(), Some(NOT_AUTHENTICATED));
        assert_eq!(list_work_cycles(&api, &anon).await.message(), Some(NOT_AUTHENTICATED));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn clockings_forward_filters_and_decode() {
        let api = RecordingTransport::replying(vec![Envelope::ok(json!([
            { "id": 1, "employee_id": 3, "date": "2025-03-04", "clock_in": "07:58", "clock_out": "16:02" }
        ]))]);
        let query = ClockingQuery { employee_id: Some(3), from: Some(date!(2025 - 03 - 01)), ..ClockingQuery::default() };
        let env = list_clockings(&api, &AuthContext::with_token("tok"), &query).await;

        let rows = env.into_data().unwrap();
        assert_eq!(rows[0].clock_out.as_deref(), Some("16:02"));
        let req = api.last().unwrap();
        assert_eq!(req.endpoint, Endpoint::ClockingList);
        assert_eq!(
            req.query,
            vec![("employee_id".to_owned(), "3".to_owned()), ("from".to_owned(), "2025-03-01".to_owned())]
        );
    }

    #[tokio::test]
    async fn inverted_range_makes_no_call() {
        let api = RecordingTransport::new();
        let query = ClockingQuery {
            from: Some(date!(2025 - 03 - 31)),
            to: Some(date!(2025 - 03 - 01)),
            ..ClockingQuery::default()
        };
        let env = list_clockings(&api, &AuthContext::with_token("tok"), &query).await;
        assert!(!env.is_success());
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn lookup_endpoints() {
        let api = RecordingTransport::new();
        let auth = AuthContext::with_token("tok");
        let _ = list_shifts(&api, &auth).await;
        assert_eq!(api.last().unwrap().endpoint, Endpoint::ShiftList);
        let _ = list_absent_codes(&api, &auth).await;
        assert_eq!(api.last().unwrap().endpoint, Endpoint::AbsentCodeList);
        let _ = list_work_cycles(&api, &auth).await;
        assert_eq!(api.last().unwrap().endpoint, Endpoint::WorkCycleList);
    }
}
