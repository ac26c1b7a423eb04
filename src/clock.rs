//! Resolution of "today" for default dates.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

/// Supplies the current calendar day.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock shifted to the company's UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Creates a clock for the given offset east of UTC, in minutes.
    ///
    /// Offsets outside ±24h fall back to UTC.
    pub fn with_offset_minutes(minutes: i32) -> Self {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        Self { offset }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::with_offset_minutes(0)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// A clock pinned to one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_its_date() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(FixedClock(day).today(), day);
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        let clock = SystemClock::with_offset_minutes(100_000);
        assert_eq!(clock.offset.local_minus_utc(), 0);
    }

    #[test]
    fn test_offset_clock_stays_within_a_day_of_utc() {
        let utc = Utc::now().date_naive();
        let ahead = SystemClock::with_offset_minutes(14 * 60).today();
        let behind = SystemClock::with_offset_minutes(-12 * 60).today();
        assert!((ahead - utc).num_days().abs() <= 1);
        assert!((behind - utc).num_days().abs() <= 1);
    }
}
