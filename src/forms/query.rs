//! List filters forwarded to the API as query parameters.

use serde::Deserialize;
use time::Date;

use super::validate::{Checks, FormError};
use crate::api::RecordId;

pub const MAX_LIMIT: u32 = 100;

type Pairs = Vec<(String, String)>;

fn push<T: ToString>(pairs: &mut Pairs, key: &str, value: Option<T>) {
    if let Some(value) = value {
        pairs.push((key.to_owned(), value.to_string()));
    }
}

fn check_paging(checks: &mut Checks, page: Option<u32>, limit: Option<u32>) {
    if page == Some(0) {
        checks.fail("page", "must start at 1");
    }
    if let Some(limit) = limit {
        if limit == 0 || limit > MAX_LIMIT {
            checks.fail("limit", format!("must be between 1 and {MAX_LIMIT}"));
        }
    }
}

/// Paging, free-text search and company scoping for record lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub company_id: Option<RecordId>,
}

impl ListQuery {
    /// # Errors
    ///
    /// Returns every failing parameter.
    pub fn to_pairs(&self) -> Result<Pairs, FormError> {
        let mut checks = Checks::new();
        check_paging(&mut checks, self.page, self.limit);
        if let Some(id) = self.company_id {
            checks.positive_id("company_id", id);
        }
        checks.finish()?;

        let mut pairs = Vec::new();
        push(&mut pairs, "page", self.page);
        push(&mut pairs, "limit", self.limit);
        push(
            &mut pairs,
            "search",
            self.search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty()),
        );
        push(&mut pairs, "company_id", self.company_id);
        Ok(pairs)
    }
}

/// Filters for the clockings listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClockingQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub site_id: Option<RecordId>,
    pub employee_id: Option<RecordId>,
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl ClockingQuery {
    /// # Errors
    ///
    /// Returns every failing parameter, including an inverted date range.
    pub fn to_pairs(&self) -> Result<Pairs, FormError> {
        let mut checks = Checks::new();
        check_paging(&mut checks, self.page, self.limit);
        if let Some(id) = self.site_id {
            checks.positive_id("site_id", id);
        }
        if let Some(id) = self.employee_id {
            checks.positive_id("employee_id", id);
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                checks.fail("from", "must not be after to");
            }
        }
        checks.finish()?;

        let mut pairs = Vec::new();
        push(&mut pairs, "page", self.page);
        push(&mut pairs, "limit", self.limit);
        push(&mut pairs, "site_id", self.site_id);
        push(&mut pairs, "employee_id", self.employee_id);
        push(&mut pairs, "from", self.from.map(iso_date));
        push(&mut pairs, "to", self.to.map(iso_date));
        Ok(pairs)
    }
}

fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}
