//! Records as returned by the attendance API.
//!
//! These mirror the remote JSON and carry no derived invariants. Yes/No
//! toggles are decoded to `bool` on the way in through [`yes_no`] so nothing
//! downstream has to reinterpret strings.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::api::RecordId;
use crate::forms::yes_no;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub registration_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: RecordId,
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub site_id: Option<RecordId>,
    #[serde(default)]
    pub shift_id: Option<RecordId>,
    #[serde(default)]
    pub work_cycle_id: Option<RecordId>,
    #[serde(default = "default_true", deserialize_with = "yes_no::deserialize")]
    pub is_active: bool,
}

/// One clock-in, optionally closed by a clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clocking {
    pub id: RecordId,
    pub employee_id: RecordId,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub site_id: Option<RecordId>,
    pub date: Date,
    pub clock_in: String,
    #[serde(default)]
    pub clock_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: RecordId,
    pub company_id: RecordId,
    pub name: String,
    pub date: Date,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekendDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weekend {
    pub id: RecordId,
    pub company_id: RecordId,
    pub day: WeekendDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: RecordId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsentCode {
    pub id: RecordId,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCycle {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub days: Option<u32>,
}
