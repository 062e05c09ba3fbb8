//! Server actions, one function per console operation.
//!
//! DESIGN
//! ======
//! Every token-requiring action follows the same three steps:
//!
//! 1. Take the token from the [`AuthContext`]. Without one, answer
//!    `Not authenticated` and make no network call.
//! 2. Validate the input, if any. Invalid input also makes no call.
//! 3. Issue exactly one gateway call and return its envelope as-is.
//!
//! Auth actions in [`auth`] skip step 1.

pub mod attendance;
pub mod auth;
pub mod calendar;
pub mod records;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::client::call;
use crate::api::{ApiRequest, ApiTransport, Endpoint, Envelope};

pub(crate) const ENCODE_FAILURE: &str = "Could not encode the request";

pub(crate) async fn fetch<T: DeserializeOwned>(
    api: &dyn ApiTransport,
    token: Option<&str>,
    endpoint: Endpoint,
    query: Vec<(String, String)>,
) -> Envelope<T> {
    let mut request = ApiRequest::new(endpoint).query(query);
    if let Some(token) = token {
        request = request.bearer(token);
    }
    call(api, request).await
}

pub(crate) async fn submit<B: Serialize, T: DeserializeOwned>(
    api: &dyn ApiTransport,
    token: Option<&str>,
    endpoint: Endpoint,
    body: &B,
) -> Envelope<T> {
    let mut request = ApiRequest::new(endpoint);
    if let Some(token) = token {
        request = request.bearer(token);
    }
    match request.json(body) {
        Ok(request) => call(api, request).await,
        Err(e) => {
            tracing::error!(error = %e, ?endpoint, "failed to encode request body");
            Envelope::failure(ENCODE_FAILURE)
        }
    }
}
