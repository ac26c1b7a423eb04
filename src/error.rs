//! Error types for the HR payroll module.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that aborts a payroll calendar or personnel operation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the HR payroll module.
///
/// Every operation returns this error type. Validation failures abort the
/// surrounding transaction, so callers never observe a partially applied write.
///
/// # Example
///
/// ```
/// use hr_payroll::error::HrError;
///
/// let error = HrError::YearsOverlap {
///     first: "FY 2025".to_string(),
///     second: "FY 2025b".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Payroll years 'FY 2025' and 'FY 2025b' overlap"
/// );
/// ```
#[derive(Debug, Error)]
pub enum HrError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A record with the given id does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of record (e.g. "payroll year").
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A start date lies after its end date.
    #[error("Invalid date range for '{name}': {start} is after {end}")]
    InvalidDateRange {
        /// The record carrying the range.
        name: String,
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// Two payroll years of the same company share at least one day.
    #[error("Payroll years '{first}' and '{second}' overlap")]
    YearsOverlap {
        /// The year being written.
        first: String,
        /// The existing year it collides with.
        second: String,
    },

    /// Two payroll periods of the same year share at least one day.
    #[error("Payroll periods '{first}' and '{second}' overlap")]
    PeriodsOverlap {
        /// The period being written.
        first: String,
        /// The existing period it collides with.
        second: String,
    },

    /// A period's dates fall outside its payroll year.
    #[error("Dates of period '{period}' are outside payroll year '{year}'")]
    PeriodOutsideYear {
        /// The period name.
        period: String,
        /// The year name.
        year: String,
    },

    /// A holiday date falls outside its period.
    #[error("Holiday {date} must be between start and end date of period '{period}'")]
    HolidayOutsidePeriod {
        /// The holiday date.
        date: NaiveDate,
        /// The period name.
        period: String,
    },

    /// A period was closed while an earlier period was still open.
    #[error("Can not close payroll period '{period}' until '{earlier}' is closed")]
    CloseOutOfOrder {
        /// The period being closed.
        period: String,
        /// The earliest still-open period blocking it.
        earlier: String,
    },

    /// A write was attempted on a closed year or period.
    #[error("{entity} '{name}' is closed")]
    Closed {
        /// The kind of record.
        entity: &'static str,
        /// The record name.
        name: String,
    },

    /// Periods were requested for a year that already has some.
    #[error("Payroll year '{year}' already has periods")]
    PeriodsAlreadyCreated {
        /// The year name.
        year: String,
    },

    /// A period interval of zero months was requested.
    #[error("Period interval must be at least one month, got {months}")]
    InvalidInterval {
        /// The rejected interval.
        months: u32,
    },

    /// A lifecycle event is not allowed from the record's current state.
    #[error("Can not {event} {entity} '{name}' in state '{state}'")]
    InvalidTransition {
        /// The kind of record.
        entity: &'static str,
        /// The record name.
        name: String,
        /// The current state.
        state: String,
        /// The rejected event.
        event: String,
    },

    /// A record changed between the read and the write that relied on it.
    #[error("{entity} '{key}' changed concurrently: expected state '{expected}', found '{found}'")]
    StaleRecord {
        /// The kind of record.
        entity: &'static str,
        /// The record key.
        key: String,
        /// The state the writer expected.
        expected: String,
        /// The state actually stored.
        found: String,
    },

    /// No open payroll year covers the date.
    #[error("No payroll year defined for {date}")]
    PayrollYearNotFound {
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// More than one open payroll year covers the date.
    #[error("{count} open payroll years cover {date}")]
    AmbiguousPayrollYear {
        /// The date that was looked up.
        date: NaiveDate,
        /// How many years matched.
        count: usize,
    },

    /// A uniqueness constraint was violated.
    #[error("Duplicate {entity}: {key}")]
    Duplicate {
        /// The kind of record.
        entity: &'static str,
        /// The duplicated key.
        key: String,
    },

    /// A record field was invalid or inconsistent with related records.
    #[error("Invalid {entity} field '{field}': {message}")]
    InvalidRecord {
        /// The kind of record.
        entity: &'static str,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The backing store could not serve the request.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the failure.
        message: String,
    },
}

impl HrError {
    /// Shorthand for [`HrError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        HrError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Shorthand for [`HrError::InvalidRecord`].
    pub fn invalid(
        entity: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        HrError::InvalidRecord {
            entity,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true for errors caused by bad input rather than missing data or infrastructure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HrError::InvalidDateRange { .. }
                | HrError::YearsOverlap { .. }
                | HrError::PeriodsOverlap { .. }
                | HrError::PeriodOutsideYear { .. }
                | HrError::HolidayOutsidePeriod { .. }
                | HrError::CloseOutOfOrder { .. }
                | HrError::Closed { .. }
                | HrError::PeriodsAlreadyCreated { .. }
                | HrError::InvalidInterval { .. }
                | HrError::InvalidTransition { .. }
                | HrError::InvalidRecord { .. }
        )
    }
}

/// A type alias for Results that return HrError.
pub type HrResult<T> = Result<T, HrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = HrError::ConfigNotFound {
            path: "/missing/leave.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/leave.yaml"
        );
    }

    #[test]
    fn test_periods_overlap_names_both_periods() {
        let error = HrError::PeriodsOverlap {
            first: "01-2024".to_string(),
            second: "01-2024 - 03-2024".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payroll periods '01-2024' and '01-2024 - 03-2024' overlap"
        );
    }

    #[test]
    fn test_holiday_outside_period_displays_date() {
        let error = HrError::HolidayOutsidePeriod {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            period: "01-2024".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday 2024-02-01 must be between start and end date of period '01-2024'"
        );
    }

    #[test]
    fn test_invalid_transition_displays_state_and_event() {
        let error = HrError::InvalidTransition {
            entity: "transfer proposal",
            name: "EMP0001".to_string(),
            state: "Draft".to_string(),
            event: "approve".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Can not approve transfer proposal 'EMP0001' in state 'Draft'"
        );
    }

    #[test]
    fn test_stale_record_is_not_validation() {
        let error = HrError::StaleRecord {
            entity: "transfer proposal",
            key: "42".to_string(),
            expected: "In Review".to_string(),
            found: "Approved".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "transfer proposal '42' changed concurrently: expected state 'In Review', found 'Approved'"
        );
        assert!(!error.is_validation());
    }

    #[test]
    fn test_not_found_helper() {
        let error = HrError::not_found("employee", 42);
        assert_eq!(error.to_string(), "employee not found: 42");
        assert!(!error.is_validation());
    }

    #[test]
    fn test_validation_classification() {
        assert!(HrError::InvalidInterval { months: 0 }.is_validation());
        assert!(HrError::invalid("employee", "manager", "can not be self").is_validation());
        assert!(
            !HrError::Duplicate {
                entity: "employee",
                key: "EMP0001".to_string()
            }
            .is_validation()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<HrError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> HrResult<()> {
            Err(HrError::PayrollYearNotFound {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
        }

        fn propagates_error() -> HrResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
