//! Performance benchmarks for the payroll calendar.
//!
//! Covers period planning, overlap validation against many siblings, and a
//! full year lifecycle (create, generate periods, close in order).
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, Months, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hr_payroll::calendar::{NewPayrollYear, PayrollCalendar, find_overlap, plan_periods};
use hr_payroll::models::{
    CalendarState, CompanyId, DateRange, DepartmentId, PayrollYear, Scope, YearId,
};
use hr_payroll::store::InMemoryCalendarStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds `count` consecutive calendar years starting in 1900.
fn consecutive_years(count: usize) -> Vec<PayrollYear> {
    let company = CompanyId::new();
    let department = DepartmentId::new();
    (0..count)
        .map(|i| {
            let start = date(1900 + i as i32, 1, 1);
            PayrollYear {
                id: YearId::new(),
                name: format!("FY {}", start.year()),
                company,
                department,
                start_date: start,
                end_date: date(1900 + i as i32, 12, 31),
                state: CalendarState::Open,
            }
        })
        .collect()
}

fn bench_plan_monthly(c: &mut Criterion) {
    let year = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
    c.bench_function("plan_periods_monthly", |b| {
        b.iter(|| plan_periods(black_box(year), black_box(1)))
    });
}

fn bench_plan_long_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_periods_span");
    for years in [1u32, 10, 50].iter() {
        let start = date(2000, 1, 1);
        let end = start
            .checked_add_months(Months::new(years * 12))
            .and_then(|d| d.pred_opt())
            .unwrap();
        let range = DateRange::new(start, end);
        group.throughput(Throughput::Elements(u64::from(*years) * 12));
        group.bench_with_input(BenchmarkId::from_parameter(years), &range, |b, range| {
            b.iter(|| plan_periods(black_box(*range), 1))
        });
    }
    group.finish();
}

fn bench_overlap_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_overlap");
    for count in [10usize, 100, 1000].iter() {
        let siblings = consecutive_years(*count);
        let mut candidate = siblings[0].clone();
        candidate.id = YearId::new();
        candidate.start_date = date(2500, 1, 1);
        candidate.end_date = date(2500, 12, 31);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &siblings, |b, siblings| {
            b.iter(|| find_overlap(black_box(&candidate), black_box(siblings)))
        });
    }
    group.finish();
}

fn bench_year_lifecycle(c: &mut Criterion) {
    c.bench_function("year_lifecycle", |b| {
        b.iter(|| {
            let calendar = PayrollCalendar::new(InMemoryCalendarStore::new());
            let scope = Scope::company(CompanyId::new()).with_department(DepartmentId::new());
            let year = calendar
                .create_year(
                    &scope,
                    NewPayrollYear {
                        name: "FY 2024".to_string(),
                        department: None,
                        start_date: date(2024, 1, 1),
                        end_date: date(2024, 12, 31),
                    },
                )
                .unwrap();
            for period in calendar.create_periods(year.id, 1).unwrap() {
                calendar.close_period(period.id).unwrap();
            }
            black_box(calendar.close_year(year.id).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_plan_monthly,
    bench_plan_long_range,
    bench_overlap_scan,
    bench_year_lifecycle
);
criterion_main!(benches);
