//! Holiday and weekend forms.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::Date;

use super::validate::{Checks, FormError};
use crate::api::RecordId;
use crate::models::WeekendDay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayForm {
    pub company_id: RecordId,
    pub name: String,
    pub date: Date,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl HolidayForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut checks = Checks::new();
        checks.positive_id("company_id", self.company_id);
        checks.required("name", &self.name, 100);
        checks.optional("description", self.description.as_deref(), 255);
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendForm {
    pub company_id: RecordId,
    pub days: Vec<WeekendDay>,
}

impl WeekendForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut checks = Checks::new();
        checks.positive_id("company_id", self.company_id);
        if self.days.is_empty() {
            checks.fail("days", "must include at least one day");
        } else if self.days.iter().collect::<HashSet<_>>().len() != self.days.len() {
            checks.fail("days", "must not repeat a day");
        }
        checks.finish()
    }
}
