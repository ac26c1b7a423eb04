//! Request types for the HR payroll API.
//!
//! Most endpoints accept the library's input types directly; the types here
//! cover the bodies that add a scope or make fields optional.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::NewPayrollYear;
use crate::models::{CompanyId, DepartmentId, NewEmployee, Scope};

/// Request body for `POST /payroll-years`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateYearRequest {
    /// The owning company.
    pub company: CompanyId,
    /// The year's department.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    /// Display name.
    pub name: String,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
}

impl CreateYearRequest {
    /// Splits the request into the caller's scope and the year draft.
    pub fn into_parts(self) -> (Scope, NewPayrollYear) {
        let scope = Scope {
            company: self.company,
            department: self.department,
        };
        let draft = NewPayrollYear {
            name: self.name,
            department: self.department,
            start_date: self.start_date,
            end_date: self.end_date,
        };
        (scope, draft)
    }
}

/// Request body for `POST /payroll-years/:id/periods`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePeriodsRequest {
    /// Months per period; the configured default when omitted.
    #[serde(default)]
    pub interval_months: Option<u32>,
}

/// Request body for `POST /payroll-periods/:id/holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The holiday date.
    pub date: NaiveDate,
    /// Optional name (e.g., "New Year").
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireRequest {
    /// The hiring company.
    pub company: CompanyId,
    /// Employee fields.
    #[serde(flatten)]
    pub employee: NewEmployee,
}

/// Request body for adding a responsibility, skill or team to an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEntryRequest {
    /// Name of the entry.
    pub name: String,
    /// Longer description, ignored for skills.
    #[serde(default)]
    pub description: Option<String>,
}
