//! Site form: validation, Yes/No payload transform, and hydration from a
//! fetched record.
//!
//! The form speaks `bool` for every toggle. [`SitePayload`] is the only
//! shape that leaves the service, and it encodes the toggles through
//! [`yes_no`]. Going the other way, [`SiteForm::from_record`] takes a
//! [`Site`] whose toggles were already decoded by the same codec. Any new
//! toggle must be added to all three structs.

use serde::{Deserialize, Serialize};

use super::validate::{Checks, FormError};
use super::yes_no;
use crate::api::RecordId;
use crate::models::Site;

pub const NAME_MAX: usize = 100;
pub const CODE_MAX: usize = 20;
pub const ADDRESS_MAX: usize = 255;
pub const CONTACT_PERSON_MAX: usize = 100;
pub const CONTACT_NUMBER_MAX: usize = 30;

fn default_true() -> bool {
    true
}

/// Site form as edited in the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteForm {
    pub company_id: RecordId,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "yes_no::deserialize")]
    pub agrigistics_site: bool,
    #[serde(default, deserialize_with = "yes_no::deserialize")]
    pub send_attendance: bool,
    #[serde(default = "default_true", deserialize_with = "yes_no::deserialize")]
    pub is_active: bool,
}

/// Body sent to the API for site create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitePayload {
    pub company_id: RecordId,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    #[serde(with = "yes_no")]
    pub agrigistics_site: bool,
    #[serde(with = "yes_no")]
    pub send_attendance: bool,
    #[serde(with = "yes_no")]
    pub is_active: bool,
}

impl SiteForm {
    /// Validate field constraints and build the API payload. Non-toggle
    /// fields are passed through as entered.
    ///
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn into_payload(self) -> Result<SitePayload, FormError> {
        let mut checks = Checks::new();
        checks.positive_id("company_id", self.company_id);
        checks.required("name", &self.name, NAME_MAX);
        checks.required("code", &self.code, CODE_MAX);
        checks.optional("address", self.address.as_deref(), ADDRESS_MAX);
        checks.optional("contact_person", self.contact_person.as_deref(), CONTACT_PERSON_MAX);
        checks.optional("contact_number", self.contact_number.as_deref(), CONTACT_NUMBER_MAX);
        checks.finish()?;

        Ok(SitePayload {
            company_id: self.company_id,
            name: self.name,
            code: self.code,
            address: self.address,
            contact_person: self.contact_person,
            contact_number: self.contact_number,
            agrigistics_site: self.agrigistics_site,
            send_attendance: self.send_attendance,
            is_active: self.is_active,
        })
    }

    /// Prefill the form from an existing site.
    #[must_use]
    pub fn from_record(site: &Site) -> Self {
        Self {
            company_id: site.company_id,
            name: site.name.clone(),
            code: site.code.clone(),
            address: site.address.clone(),
            contact_person: site.contact_person.clone(),
            contact_number: site.contact_number.clone(),
            agrigistics_site: site.agrigistics_site,
            send_attendance: site.send_attendance,
            is_active: site.is_active,
        }
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
