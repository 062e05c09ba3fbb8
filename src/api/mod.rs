//! Typed contract with the remote attendance API.

pub mod client;
pub mod endpoints;
pub mod envelope;

pub use client::{ApiRequest, ApiTransport, HttpApiClient};
pub use endpoints::{Endpoint, RecordId};
pub use envelope::{Envelope, Meta};
