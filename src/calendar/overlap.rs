//! Sibling overlap validation.
//!
//! Payroll years of one company, and periods of one year, must never share a
//! day. The check runs inside the write transaction that persists the
//! candidate, against the siblings read in that same transaction.

use crate::error::{HrError, HrResult};
use crate::models::{DateRange, PayrollPeriod, PayrollYear};

/// A dated calendar record that can collide with its siblings.
pub trait Dated {
    /// The record's inclusive date range.
    fn range(&self) -> DateRange;

    /// The record's display name, used in error messages.
    fn name(&self) -> &str;

    /// Returns true when `other` is the same stored record.
    fn is_same(&self, other: &Self) -> bool;
}

impl Dated for PayrollYear {
    fn range(&self) -> DateRange {
        PayrollYear::range(self)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Dated for PayrollPeriod {
    fn range(&self) -> DateRange {
        PayrollPeriod::range(self)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Returns the first sibling (other than `entity` itself) sharing a day with `entity`.
///
/// # Example
///
/// ```
/// use hr_payroll::calendar::find_overlap;
/// use hr_payroll::models::{CalendarState, CompanyId, DepartmentId, PayrollYear, YearId};
/// use chrono::NaiveDate;
///
/// let company = CompanyId::new();
/// let make = |name: &str, start: (i32, u32, u32), end: (i32, u32, u32)| PayrollYear {
///     id: YearId::new(),
///     name: name.to_string(),
///     company,
///     department: DepartmentId::new(),
///     start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
///     state: CalendarState::Open,
/// };
///
/// let fy24 = make("FY 2024", (2024, 1, 1), (2024, 12, 31));
/// let bridge = make("Bridge", (2024, 12, 1), (2025, 2, 28));
/// let siblings = vec![fy24.clone()];
///
/// assert_eq!(find_overlap(&bridge, &siblings).map(|y| y.id), Some(fy24.id));
/// assert!(find_overlap(&fy24, &siblings).is_none());
/// ```
pub fn find_overlap<'a, T: Dated>(entity: &T, siblings: &'a [T]) -> Option<&'a T> {
    let range = entity.range();
    siblings
        .iter()
        .filter(|s| !entity.is_same(s))
        .find(|s| s.range().overlaps(&range))
}

/// Fails with [`HrError::YearsOverlap`] if `year` collides with a sibling year.
pub fn validate_year_no_overlap(year: &PayrollYear, siblings: &[PayrollYear]) -> HrResult<()> {
    match find_overlap(year, siblings) {
        Some(second) => Err(HrError::YearsOverlap {
            first: year.name.clone(),
            second: second.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Fails with [`HrError::PeriodsOverlap`] if `period` collides with a sibling period.
pub fn validate_period_no_overlap(
    period: &PayrollPeriod,
    siblings: &[PayrollPeriod],
) -> HrResult<()> {
    match find_overlap(period, siblings) {
        Some(second) => Err(HrError::PeriodsOverlap {
            first: period.name.clone(),
            second: second.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Fails with [`HrError::InvalidDateRange`] when a record starts after it ends.
pub fn validate_range<T: Dated>(entity: &T) -> HrResult<()> {
    let range = entity.range();
    if range.is_valid() {
        Ok(())
    } else {
        Err(HrError::InvalidDateRange {
            name: entity.name().to_string(),
            start: range.start,
            end: range.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarState, DepartmentId, PeriodId, YearId};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn period(name: &str, start: NaiveDate, end: NaiveDate) -> PayrollPeriod {
        PayrollPeriod {
            id: PeriodId::new(),
            name: name.to_string(),
            payroll_year: YearId::new(),
            department: DepartmentId::new(),
            start_date: start,
            end_date: end,
            state: CalendarState::Open,
        }
    }

    #[test]
    fn test_no_siblings_no_overlap() {
        let p = period("01-2024", date(1, 1), date(1, 31));
        assert!(validate_period_no_overlap(&p, &[]).is_ok());
    }

    #[test]
    fn test_self_is_excluded() {
        let p = period("01-2024", date(1, 1), date(1, 31));
        let mut moved = p.clone();
        moved.end_date = date(2, 10);
        assert!(validate_period_no_overlap(&moved, &[p]).is_ok());
    }

    #[test]
    fn test_overlap_error_names_both_periods() {
        let jan = period("01-2024", date(1, 1), date(1, 31));
        let bad = period("mid", date(1, 15), date(2, 15));
        let err = validate_period_no_overlap(&bad, &[jan]).unwrap_err();
        match err {
            HrError::PeriodsOverlap { first, second } => {
                assert_eq!(first, "mid");
                assert_eq!(second, "01-2024");
            }
            other => panic!("Expected PeriodsOverlap, got {other:?}"),
        }
    }

    #[test]
    fn test_candidate_enclosing_sibling_is_caught() {
        let feb = period("02-2024", date(2, 1), date(2, 29));
        let q1 = period("q1", date(1, 1), date(3, 31));
        assert!(validate_period_no_overlap(&q1, &[feb]).is_err());
    }

    #[test]
    fn test_adjacent_periods_pass() {
        let jan = period("01-2024", date(1, 1), date(1, 31));
        let feb = period("02-2024", date(2, 1), date(2, 29));
        assert!(validate_period_no_overlap(&feb, &[jan]).is_ok());
    }

    #[test]
    fn test_validate_range_rejects_reversed_dates() {
        let p = period("reversed", date(3, 1), date(2, 1));
        match validate_range(&p) {
            Err(HrError::InvalidDateRange { name, start, end }) => {
                assert_eq!(name, "reversed");
                assert_eq!(start, date(3, 1));
                assert_eq!(end, date(2, 1));
            }
            other => panic!("Expected InvalidDateRange, got {other:?}"),
        }
    }
}
