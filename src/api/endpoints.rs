//! Static endpoint table for the remote attendance API.
//!
//! Actions name an [`Endpoint`]; only this table knows the method and path
//! it resolves to.

use reqwest::Method;

pub type RecordId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AuthLogin,
    AuthForgotPassword,
    AuthResetPassword,

    CompanyList,
    CompanySingle(RecordId),
    CompanyCreate,
    CompanyUpdate(RecordId),
    CompanyDelete(RecordId),

    SiteList,
    SiteSingle(RecordId),
    SiteCreate,
    SiteUpdate(RecordId),
    SiteDelete(RecordId),

    EmployeeList,
    EmployeeSingle(RecordId),
    EmployeeCreate,
    EmployeeUpdate(RecordId),
    EmployeeDelete(RecordId),

    ClockingList,

    HolidayCreate,
    HolidayList,
    HolidaySingle(RecordId),
    HolidayDelete(RecordId),

    WeekendCreate,
    WeekendList,

    ShiftList,
    AbsentCodeList,
    WorkCycleList,
}

impl Endpoint {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::AuthLogin
            | Self::AuthForgotPassword
            | Self::AuthResetPassword
            | Self::CompanyCreate
            | Self::SiteCreate
            | Self::EmployeeCreate
            | Self::HolidayCreate
            | Self::WeekendCreate => Method::POST,
            Self::CompanyUpdate(_) | Self::SiteUpdate(_) | Self::EmployeeUpdate(_) => Method::PATCH,
            Self::CompanyDelete(_) | Self::SiteDelete(_) | Self::EmployeeDelete(_) | Self::HolidayDelete(_) => {
                Method::DELETE
            }
            Self::CompanyList
            | Self::CompanySingle(_)
            | Self::SiteList
            | Self::SiteSingle(_)
            | Self::EmployeeList
            | Self::EmployeeSingle(_)
            | Self::ClockingList
            | Self::HolidayList
            | Self::HolidaySingle(_)
            | Self::WeekendList
            | Self::ShiftList
            | Self::AbsentCodeList
            | Self::WorkCycleList => Method::GET,
        }
    }

    /// Path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::AuthLogin => "/auth/login".to_owned(),
            Self::AuthForgotPassword => "/auth/forgot-password".to_owned(),
            Self::AuthResetPassword => "/auth/reset-password".to_owned(),

            Self::CompanyList | Self::CompanyCreate => "/companies".to_owned(),
            Self::CompanySingle(id) | Self::CompanyUpdate(id) | Self::CompanyDelete(id) => format!("/companies/{id}"),

            Self::SiteList | Self::SiteCreate => "/sites".to_owned(),
            Self::SiteSingle(id) | Self::SiteUpdate(id) | Self::SiteDelete(id) => format!("/sites/{id}"),

            Self::EmployeeList | Self::EmployeeCreate => "/employees".to_owned(),
            Self::EmployeeSingle(id) | Self::EmployeeUpdate(id) | Self::EmployeeDelete(id) => {
                format!("/employees/{id}")
            }

            Self::ClockingList => "/clockings".to_owned(),

            Self::HolidayCreate | Self::HolidayList => "/holidays".to_owned(),
            Self::HolidaySingle(id) | Self::HolidayDelete(id) => format!("/holidays/{id}"),

            Self::WeekendCreate | Self::WeekendList => "/weekends".to_owned(),

            Self::ShiftList => "/shifts".to_owned(),
            Self::AbsentCodeList => "/absent-codes".to_owned(),
            Self::WorkCycleList => "/work-cycles".to_owned(),
        }
    }

    /// Auth endpoints are called before a session exists.
    #[must_use]
    pub fn requires_token(&self) -> bool {
        !matches!(self, Self::AuthLogin | Self::AuthForgotPassword | Self::AuthResetPassword)
    }
}
