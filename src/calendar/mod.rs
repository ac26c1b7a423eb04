//! Payroll calendar: years, periods and holidays.
//!
//! This module contains the pure building blocks (period planning, overlap
//! checks, the open/close transition table) and the [`PayrollCalendar`]
//! manager that applies them inside storage transactions.
//!
//! # Example
//!
//! ```
//! use hr_payroll::calendar::{NewPayrollYear, PayrollCalendar};
//! use hr_payroll::models::{CompanyId, DepartmentId, Scope};
//! use hr_payroll::store::InMemoryCalendarStore;
//! use chrono::NaiveDate;
//!
//! let calendar = PayrollCalendar::new(InMemoryCalendarStore::new());
//! let scope = Scope::company(CompanyId::new()).with_department(DepartmentId::new());
//!
//! let year = calendar.create_year(&scope, NewPayrollYear {
//!     name: "FY 2024".to_string(),
//!     department: None,
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//! }).unwrap();
//!
//! let periods = calendar.create_periods(year.id, 1).unwrap();
//! assert_eq!(periods.len(), 12);
//! ```

mod lifecycle;
mod manager;
mod overlap;
mod periods;

pub use lifecycle::{
    CalendarEntity, CalendarEvent, Cascade, Guard, TRANSITIONS, Transition, transition,
};
pub use manager::{
    NewPayrollPeriod, NewPayrollYear, PayrollCalendar, PeriodChanges, YearChanges,
    validate_holiday, validate_period_in_year,
};
pub use overlap::{
    Dated, find_overlap, validate_period_no_overlap, validate_range, validate_year_no_overlap,
};
pub use periods::{
    DEFAULT_PERIOD_INTERVAL_MONTHS, PeriodPlan, end_of_month, period_name, plan_periods,
};
