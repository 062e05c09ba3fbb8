//! Shared HTTP client for the remote attendance API.
//!
//! DESIGN
//! ======
//! Every call goes through [`ApiTransport::send`], which never fails: transport
//! errors, non-2xx statuses and odd bodies are all folded into a failure
//! [`Envelope`]. The trait is the seam tests use to count network calls.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::endpoints::Endpoint;
use super::envelope::Envelope;
use crate::config::ApiTimeouts;

pub const UNREACHABLE: &str = "Unable to reach the attendance API";
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from the attendance API";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request body encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// REQUEST
// =============================================================================

/// One outbound call: endpoint, optional query and body, optional bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, query: Vec::new(), body: None, token: None }
    }

    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.token = Some(token.to_owned());
        self
    }

    #[must_use]
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, GatewayError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[async_trait::async_trait]
pub trait ApiTransport: Send + Sync {
    /// Perform the call and normalize the outcome into an envelope.
    async fn send(&self, request: ApiRequest) -> Envelope<Value>;
}

/// Send `request` and decode the payload into `T`. A token-requiring
/// endpoint without a token never reaches the transport.
pub async fn call<T: DeserializeOwned>(api: &dyn ApiTransport, request: ApiRequest) -> Envelope<T> {
    if request.endpoint.requires_token() && request.token.is_none() {
        return Envelope::not_authenticated();
    }
    api.send(request).await.decode()
}

/// `reqwest`-backed transport.
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeouts: ApiTimeouts) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| GatewayError::HttpClientBuild(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url })
    }

    async fn execute(&self, request: &ApiRequest) -> Result<(u16, String), GatewayError> {
        let url = format!("{}{}", self.base_url, request.endpoint.path());
        let mut builder = self
            .http
            .request(request.endpoint.method(), url)
            .header(ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok((status, text))
    }
}

#[async_trait::async_trait]
impl ApiTransport for HttpApiClient {
    async fn send(&self, request: ApiRequest) -> Envelope<Value> {
        match self.execute(&request).await {
            Ok((status, body)) => {
                let envelope = normalize(status, &body);
                if !envelope.is_success() {
                    tracing::warn!(
                        endpoint = ?request.endpoint,
                        status,
                        reason = envelope.message().unwrap_or_default(),
                        "attendance API call failed"
                    );
                }
                envelope
            }
            Err(e) => {
                tracing::warn!(endpoint = ?request.endpoint, error = %e, "attendance API unreachable");
                Envelope::failure(UNREACHABLE)
            }
        }
    }
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Fold an HTTP status and raw body into an envelope.
#[must_use]
pub fn normalize(status: u16, body: &str) -> Envelope<Value> {
    let trimmed = body.trim();
    let parsed = if trimmed.is_empty() { None } else { serde_json::from_str::<Value>(trimmed).ok() };

    if !(200..300).contains(&status) {
        let message = parsed
            .as_ref()
            .and_then(remote_message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        return Envelope::failure(message);
    }

    match parsed {
        None if trimmed.is_empty() => Envelope::ok_empty(),
        None => Envelope::failure(UNEXPECTED_RESPONSE),
        Some(value) if value.get("success") == Some(&Value::Bool(false)) => {
            Envelope::failure(remote_message(&value).unwrap_or_default())
        }
        Some(value) if value.get("success").is_some_and(Value::is_boolean) => {
            serde_json::from_value(value).unwrap_or_else(|_| Envelope::failure(UNEXPECTED_RESPONSE))
        }
        Some(value) => Envelope::ok(value),
    }
}

/// Pull a human-readable message out of an error body. Validation errors
/// may arrive as an array of strings.
fn remote_message(body: &Value) -> Option<String> {
    let from_field = |field: &str| match body.get(field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    };
    from_field("message").or_else(|| from_field("error"))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
