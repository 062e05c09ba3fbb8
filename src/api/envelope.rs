//! The normalized `{ success, data, message, meta }` envelope every action
//! returns to the UI.
//!
//! Invariant: a failed envelope never carries data and always carries a
//! message. Fields are private so the only ways in are the constructors and
//! deserialization, both of which enforce it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const NOT_AUTHENTICATED: &str = "Not authenticated";
pub const GENERIC_FAILURE: &str = "Request failed";

/// Pagination details attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, alias = "total_pages", skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEnvelope<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
}

/// Wire shape as received from the remote API, before the invariant holds.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawEnvelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, alias = "pagination")]
    meta: Option<Meta>,
}

impl<T> From<RawEnvelope<T>> for Envelope<T> {
    fn from(raw: RawEnvelope<T>) -> Self {
        if raw.success {
            Self { success: true, data: raw.data, message: raw.message, meta: raw.meta }
        } else {
            Self::failure(raw.message.unwrap_or_else(|| GENERIC_FAILURE.to_owned()))
        }
    }
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), message: None, meta: None }
    }

    /// Success with no payload (e.g. a `204` from a delete).
    #[must_use]
    pub fn ok_empty() -> Self {
        Self { success: true, data: None, message: None, meta: None }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() { GENERIC_FAILURE.to_owned() } else { message };
        Self { success: false, data: None, message: Some(message), meta: None }
    }

    #[must_use]
    pub fn not_authenticated() -> Self {
        Self::failure(NOT_AUTHENTICATED)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: Option<Meta>) -> Self {
        if self.success {
            self.meta = meta;
        }
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Transform the payload, keeping message and meta.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope { success: self.success, data: self.data.map(f), message: self.message, meta: self.meta }
    }
}

impl Envelope<serde_json::Value> {
    /// Decode a JSON payload into a typed record. A payload of the wrong
    /// shape turns the envelope into a failure.
    #[must_use]
    pub fn decode<T: DeserializeOwned>(self) -> Envelope<T> {
        let Self { success, data, message, meta } = self;
        if !success {
            return Envelope::failure(message.unwrap_or_default());
        }
        match data {
            None | Some(serde_json::Value::Null) => Envelope { success, data: None, message, meta },
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(typed) => Envelope { success, data: Some(typed), message, meta },
                Err(e) => {
                    tracing::warn!(error = %e, "attendance API payload did not match expected shape");
                    Envelope::failure(super::client::UNEXPECTED_RESPONSE)
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
