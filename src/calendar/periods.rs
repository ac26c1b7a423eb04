//! Partitioning a payroll year into month-aligned periods.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{HrError, HrResult};
use crate::models::DateRange;

/// Default number of months per generated period.
pub const DEFAULT_PERIOD_INTERVAL_MONTHS: u32 = 1;

/// One chunk of a payroll year, before it is stored as a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPlan {
    /// Generated name: `MM-YYYY`, or `MM-YYYY - MM-YYYY` across months.
    pub name: String,
    /// First day of the chunk.
    pub start_date: NaiveDate,
    /// Last day of the chunk.
    pub end_date: NaiveDate,
}

/// Returns the last day of `date`'s month.
///
/// # Example
///
/// ```
/// use hr_payroll::calendar::end_of_month;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(end_of_month(d), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Builds the period name for a chunk.
pub fn period_name(start: NaiveDate, end: NaiveDate) -> String {
    let first = start.format("%m-%Y").to_string();
    let last = end.format("%m-%Y").to_string();
    if first == last {
        first
    } else {
        format!("{first} - {last}")
    }
}

/// Splits `range` into consecutive chunks of `interval_months` calendar months.
///
/// The first chunk starts on `range.start`. Each chunk ends on the last day
/// of the month `interval_months - 1` months after its start, clamped to
/// `range.end`; the next chunk starts the following day. A single-day range
/// yields exactly one chunk.
///
/// # Errors
///
/// Returns [`HrError::InvalidInterval`] for an interval of zero and
/// [`HrError::InvalidDateRange`] when `range` is reversed.
///
/// # Example
///
/// ```
/// use hr_payroll::calendar::plan_periods;
/// use hr_payroll::models::DateRange;
/// use chrono::NaiveDate;
///
/// let year = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
/// );
/// let quarters = plan_periods(year, 3).unwrap();
///
/// let names: Vec<&str> = quarters.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(
///     names,
///     ["01-2024 - 03-2024", "04-2024 - 06-2024", "07-2024 - 09-2024", "10-2024 - 12-2024"]
/// );
/// assert_eq!(quarters[1].end_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
/// ```
pub fn plan_periods(range: DateRange, interval_months: u32) -> HrResult<Vec<PeriodPlan>> {
    if interval_months == 0 {
        return Err(HrError::InvalidInterval {
            months: interval_months,
        });
    }
    if !range.is_valid() {
        return Err(HrError::InvalidDateRange {
            name: period_name(range.start, range.end),
            start: range.start,
            end: range.end,
        });
    }

    let mut plans = Vec::new();
    let mut start = range.start;
    loop {
        let end = start
            .checked_add_months(Months::new(interval_months - 1))
            .map(end_of_month)
            .unwrap_or(range.end)
            .min(range.end);

        plans.push(PeriodPlan {
            name: period_name(start, end),
            start_date: start,
            end_date: end,
        });

        if end >= range.end {
            break;
        }
        match end.checked_add_days(Days::new(1)) {
            Some(next) => start = next,
            None => break,
        }
    }

    Ok(plans)
}
