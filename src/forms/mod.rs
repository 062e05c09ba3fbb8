//! Edge validation for everything the console submits.

pub mod calendar;
pub mod query;
pub mod records;
pub mod site;
pub mod validate;
pub mod yes_no;

pub use calendar::{HolidayForm, WeekendForm};
pub use query::{ClockingQuery, ListQuery};
pub use records::{CompanyForm, EmployeeForm};
pub use site::{SiteForm, SitePayload};
pub use validate::FormError;
