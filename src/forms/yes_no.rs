//! The one place booleans become `"Yes"`/`"No"` and back.
//!
//! Use as `#[serde(with = "yes_no")]` on payload fields and
//! `#[serde(deserialize_with = "yes_no::deserialize")]` on records read from
//! the API. Decoding is strict about strings: `"No"` is `false`, and an
//! unrecognized value is an error rather than a truthy guess.

use serde::{Deserialize, Deserializer, Serializer};

pub const YES: &str = "Yes";
pub const NO: &str = "No";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("expected \"Yes\" or \"No\", got {0:?}")]
    Unrecognized(String),
}

#[must_use]
pub fn encode(value: bool) -> &'static str {
    if value { YES } else { NO }
}

/// # Errors
///
/// Returns an error for anything other than yes/no, true/false or 1/0.
pub fn decode(raw: &str) -> Result<bool, CodecError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" => Ok(false),
        _ => Err(CodecError::Unrecognized(raw.to_owned())),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Wire {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(encode(*value))
}

/// # Errors
///
/// `null` reads as `false`. Fails on values [`decode`] rejects and on
/// integers other than 0 and 1.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Wire::deserialize(deserializer)? {
        Wire::Null => Ok(false),
        Wire::Bool(value) => Ok(value),
        Wire::Int(0) => Ok(false),
        Wire::Int(1) => Ok(true),
        Wire::Int(other) => Err(serde::de::Error::custom(CodecError::Unrecognized(other.to_string()))),
        Wire::Text(text) => decode(&text).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[path = "yes_no_test.rs"]
mod tests;
