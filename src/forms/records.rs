//! Company and employee forms.

use serde::{Deserialize, Serialize};

use super::validate::{Checks, FormError};
use super::yes_no;
use crate::api::RecordId;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyForm {
    pub name: String,
    #[serde(default)]
    pub registration_number: Option<String>,
}

impl CompanyForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut checks = Checks::new();
        checks.required("name", &self.name, 100);
        checks.optional("registration_number", self.registration_number.as_deref(), 50);
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub id_number: Option<String>,
    pub site_id: RecordId,
    #[serde(default)]
    pub shift_id: Option<RecordId>,
    #[serde(default)]
    pub work_cycle_id: Option<RecordId>,
    #[serde(default = "default_true", deserialize_with = "yes_no::deserialize")]
    pub is_active: bool,
}

impl EmployeeForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut checks = Checks::new();
        checks.required("employee_number", &self.employee_number, 20);
        checks.required("first_name", &self.first_name, 50);
        checks.required("last_name", &self.last_name, 50);
        checks.optional("id_number", self.id_number.as_deref(), 20);
        checks.positive_id("site_id", self.site_id);
        if let Some(id) = self.shift_id {
            checks.positive_id("shift_id", id);
        }
        if let Some(id) = self.work_cycle_id {
            checks.positive_id("work_cycle_id", id);
        }
        checks.finish()
    }
}
