//! Field-level validation shared by every form.

use std::fmt;

use crate::api::{Envelope, RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join(.0))]
pub struct FormError(pub Vec<FieldError>);

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormError {
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// Failure envelope carrying every field error.
    #[must_use]
    pub fn into_envelope<T>(self) -> Envelope<T> {
        Envelope::failure(self.to_string())
    }
}

/// Accumulates field errors so a form reports all of them at once.
#[derive(Debug, Default)]
pub struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    pub fn required(&mut self, field: &'static str, value: &str, max: usize) {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        } else {
            self.max_len(field, value, max);
        }
    }

    pub fn optional(&mut self, field: &'static str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.max_len(field, value, max);
        }
    }

    pub fn positive_id(&mut self, field: &'static str, id: RecordId) {
        if id <= 0 {
            self.fail(field, "must be a positive id");
        }
    }

    fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.fail(field, format!("must be at most {max} characters"));
        }
    }

    /// # Errors
    ///
    /// Returns every recorded field error.
    pub fn finish(self) -> Result<(), FormError> {
        if self.errors.is_empty() { Ok(()) } else { Err(FormError(self.errors)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_checks_finish_ok() {
        let mut checks = Checks::new();
        checks.required("name", "Main Farm", 100);
        checks.optional("address", None, 10);
        checks.positive_id("company_id", 1);
        assert!(checks.finish().is_ok());
    }

    #[test]
    fn collects_every_failure_in_order() {
        let mut checks = Checks::new();
        checks.required("name", "   ", 100);
        checks.required("code", "ABCDEFGHIJK", 10);
        checks.positive_id("company_id", 0);
        let err = checks.finish().unwrap_err();
        assert_eq!(err.fields(), vec!["name", "code", "company_id"]);
        assert_eq!(
            err.to_string(),
            "name is required; code must be at most 10 characters; company_id must be a positive id"
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut checks = Checks::new();
        checks.required("name", "Élan", 4);
        assert!(checks.finish().is_ok());
    }

    #[test]
    fn into_envelope_is_failure() {
        let err = FormError(vec![FieldError { field: "name", message: "is required".into() }]);
        let env: Envelope<()> = err.into_envelope();
        assert!(!env.is_success());
        assert_eq!(env.message(), Some("name is required"));
    }
}
