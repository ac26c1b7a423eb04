//! Payroll year, period and holiday models.
//!
//! This module contains the [`PayrollYear`], [`PayrollPeriod`] and
//! [`PayrollHoliday`] records, plus the [`DateRange`] value they share.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{CompanyId, DepartmentId, HolidayId, PeriodId, YearId};

/// Lifecycle state shared by payroll years and periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarState {
    /// Accepting writes. Every year and period starts here.
    #[default]
    Open,
    /// Read-only.
    Close,
}

impl CalendarState {
    /// Returns the lowercase label used in messages and JSON.
    pub fn label(self) -> &'static str {
        match self {
            CalendarState::Open => "open",
            CalendarState::Close => "close",
        }
    }
}

impl fmt::Display for CalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use hr_payroll::models::DateRange;
/// use chrono::NaiveDate;
///
/// let q1 = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// );
/// let march = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// );
///
/// assert!(q1.overlaps(&march));
/// assert!(q1.contains_range(&march));
/// assert!(q1.contains_date(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range without checking its ordering.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true when `start <= end`.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Checks if a given date falls within the range, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Checks if `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &DateRange) -> bool {
        self.contains_date(other.start) && self.contains_date(other.end)
    }

    /// Returns true when the two ranges share at least one day.
    ///
    /// Written as the three-way test used by the sibling query: `other`
    /// starts inside `self`, `other` ends inside `self`, or `other` encloses
    /// `self`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        (self.start <= other.start && other.start <= self.end)
            || (self.start <= other.end && other.end <= self.end)
            || (other.start <= self.start && self.end <= other.end)
    }
}

/// A payroll year: the top-level calendar container of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollYear {
    /// Record id.
    pub id: YearId,
    /// Display name (e.g. "FY 2024").
    pub name: String,
    /// The owning company.
    pub company: CompanyId,
    /// The department the year (and its generated periods) belongs to.
    pub department: DepartmentId,
    /// First day of the year (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the year (inclusive).
    pub end_date: NaiveDate,
    /// Lifecycle state.
    #[serde(default)]
    pub state: CalendarState,
}

impl PayrollYear {
    /// Returns the year's date range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Returns true while the year accepts writes.
    pub fn is_open(&self) -> bool {
        self.state == CalendarState::Open
    }
}

/// A subdivision of a payroll year used for payroll runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Record id.
    pub id: PeriodId,
    /// Display name (e.g. "01-2024" or "01-2024 - 03-2024").
    pub name: String,
    /// The parent year.
    pub payroll_year: YearId,
    /// The department the period belongs to.
    pub department: DepartmentId,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Lifecycle state.
    #[serde(default)]
    pub state: CalendarState,
}

impl PayrollPeriod {
    /// Returns the period's date range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Returns true while the period accepts writes.
    pub fn is_open(&self) -> bool {
        self.state == CalendarState::Open
    }
}

/// A non-working day inside a payroll period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollHoliday {
    /// Record id.
    pub id: HolidayId,
    /// The parent period.
    pub period: PeriodId,
    /// The holiday date.
    pub date: NaiveDate,
    /// Optional label (e.g. "New Year's Day").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(a: (u32, u32), b: (u32, u32)) -> DateRange {
        DateRange::new(date(2024, a.0, a.1), date(2024, b.0, b.1))
    }

    #[test]
    fn test_contains_date_inclusive_bounds() {
        let r = range((1, 1), (1, 31));
        assert!(r.contains_date(date(2024, 1, 1)));
        assert!(r.contains_date(date(2024, 1, 31)));
        assert!(!r.contains_date(date(2023, 12, 31)));
        assert!(!r.contains_date(date(2024, 2, 1)));
    }

    #[test]
    fn test_overlap_shared_single_day() {
        assert!(range((1, 1), (1, 31)).overlaps(&range((1, 31), (2, 28))));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        assert!(!range((1, 1), (1, 31)).overlaps(&range((2, 1), (2, 29))));
        assert!(!range((2, 1), (2, 29)).overlaps(&range((1, 1), (1, 31))));
    }

    #[test]
    fn test_enclosing_range_overlaps_both_ways() {
        let outer = range((1, 1), (12, 31));
        let inner = range((6, 1), (6, 30));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_contains_range() {
        let year = range((1, 1), (12, 31));
        assert!(year.contains_range(&range((3, 1), (3, 31))));
        assert!(!year.contains_range(&DateRange::new(date(2024, 12, 1), date(2025, 1, 31))));
    }

    #[test]
    fn test_is_valid() {
        assert!(range((1, 1), (1, 1)).is_valid());
        assert!(!range((2, 1), (1, 1)).is_valid());
    }

    #[test]
    fn test_state_defaults_to_open_when_missing() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "FY 2024",
            "company": "00000000-0000-0000-0000-000000000002",
            "department": "00000000-0000-0000-0000-000000000003",
            "start_date": "2024-01-01",
            "end_date": "2024-12-31"
        }"#;
        let year: PayrollYear = serde_json::from_str(json).unwrap();
        assert_eq!(year.state, CalendarState::Open);
        assert!(year.is_open());
        assert_eq!(year.range(), range((1, 1), (12, 31)));
    }

    #[test]
    fn test_state_serialization() {
        assert_eq!(
            serde_json::to_string(&CalendarState::Close).unwrap(),
            "\"close\""
        );
        assert_eq!(CalendarState::Open.to_string(), "open");
    }
}
