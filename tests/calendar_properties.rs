//! Property tests for period generation, overlap detection and closing order.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use hr_payroll::calendar::{NewPayrollYear, PayrollCalendar, plan_periods};
use hr_payroll::error::HrError;
use hr_payroll::models::{CompanyId, DateRange, DepartmentId, Scope};
use hr_payroll::store::InMemoryCalendarStore;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    base().checked_add_days(Days::new(offset)).unwrap()
}

/// A valid range starting within ~5 years of 2020 and lasting up to ~3 years.
fn range_strategy() -> impl Strategy<Value = DateRange> {
    (0u64..1800, 0u64..1100).prop_map(|(start, len)| DateRange::new(day(start), day(start + len)))
}

proptest! {
    #[test]
    fn prop_periods_partition_the_year(range in range_strategy(), interval in 1u32..=12) {
        let plans = plan_periods(range, interval).unwrap();

        prop_assert!(!plans.is_empty());
        prop_assert_eq!(plans[0].start_date, range.start);
        prop_assert_eq!(plans[plans.len() - 1].end_date, range.end);
        for plan in &plans {
            prop_assert!(plan.start_date <= plan.end_date);
            prop_assert!(range.contains_date(plan.start_date));
            prop_assert!(range.contains_date(plan.end_date));
        }
        for pair in plans.windows(2) {
            prop_assert_eq!(pair[0].end_date.succ_opt().unwrap(), pair[1].start_date);
        }
    }

    #[test]
    fn prop_overlap_matches_shared_day(a in range_strategy(), b in range_strategy()) {
        let shares_a_day = a.start.max(b.start) <= a.end.min(b.end);
        prop_assert_eq!(a.overlaps(&b), shares_a_day);
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn prop_stored_years_never_overlap(ranges in prop::collection::vec(range_strategy(), 1..8)) {
        let calendar = PayrollCalendar::new(InMemoryCalendarStore::new());
        let scope = Scope::company(CompanyId::new()).with_department(DepartmentId::new());

        for (i, range) in ranges.iter().enumerate() {
            let result = calendar.create_year(&scope, NewPayrollYear {
                name: format!("Y{i}"),
                department: None,
                start_date: range.start,
                end_date: range.end,
            });
            if let Err(err) = result {
                prop_assert!(matches!(err, HrError::YearsOverlap { .. }), "{err}");
            }
        }

        let stored = calendar.years(scope.company).unwrap();
        for (i, a) in stored.iter().enumerate() {
            for b in &stored[i + 1..] {
                prop_assert!(!a.range().overlaps(&b.range()));
            }
        }
    }

    #[test]
    fn prop_periods_close_only_in_order(target in 0usize..12) {
        let calendar = PayrollCalendar::new(InMemoryCalendarStore::new());
        let scope = Scope::company(CompanyId::new()).with_department(DepartmentId::new());
        let year = calendar.create_year(&scope, NewPayrollYear {
            name: "FY".to_string(),
            department: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        }).unwrap();
        let periods = calendar.create_periods(year.id, 1).unwrap();

        let result = calendar.close_period(periods[target].id);
        if target == 0 {
            prop_assert!(result.is_ok());
        } else {
            let is_out_of_order = matches!(result, Err(HrError::CloseOutOfOrder { .. }));
            prop_assert!(is_out_of_order);
        }
    }

    #[test]
    fn prop_reopen_period_leaves_year_open(target in 0usize..12, close_year in any::<bool>()) {
        let calendar = PayrollCalendar::new(InMemoryCalendarStore::new());
        let scope = Scope::company(CompanyId::new()).with_department(DepartmentId::new());
        let year = calendar.create_year(&scope, NewPayrollYear {
            name: "FY".to_string(),
            department: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        }).unwrap();
        let periods = calendar.create_periods(year.id, 1).unwrap();

        if close_year {
            calendar.close_year(year.id).unwrap();
        } else {
            for period in &periods[..=target] {
                calendar.close_period(period.id).unwrap();
            }
        }

        calendar.reopen_period(periods[target].id).unwrap();
        prop_assert!(calendar.year(year.id).unwrap().is_open());
    }
}
