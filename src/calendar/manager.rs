//! The payroll calendar manager.
//!
//! [`PayrollCalendar`] owns every write to payroll years, periods and
//! holidays. Each operation runs in one calendar transaction: validations
//! read siblings through the transaction, and nothing is published unless
//! every check passes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::lifecycle::{CalendarEntity, CalendarEvent, Cascade, Guard, transition};
use super::overlap::{validate_period_no_overlap, validate_range, validate_year_no_overlap};
use super::periods::plan_periods;
use crate::error::{HrError, HrResult};
use crate::models::{
    CalendarState, CompanyId, DepartmentId, HolidayId, PayrollHoliday, PayrollPeriod, PayrollYear,
    PeriodId, Scope, YearId,
};
use crate::store::{CalendarRepository, CalendarTx};

/// Input for creating a payroll year. The company comes from the [`Scope`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayrollYear {
    /// Display name.
    pub name: String,
    /// Defaults to the scope's department.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
}

/// Changes to an open payroll year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearChanges {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New department.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    /// New first day.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// New last day.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Input for creating a single payroll period by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayrollPeriod {
    /// Display name.
    pub name: String,
    /// The parent year.
    pub payroll_year: YearId,
    /// Defaults to the year's department.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
}

/// Changes to an open payroll period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodChanges {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New first day.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// New last day.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Fails with [`HrError::HolidayOutsidePeriod`] unless `date` lies within `period`.
pub fn validate_holiday(date: NaiveDate, period: &PayrollPeriod) -> HrResult<()> {
    if period.range().contains_date(date) {
        Ok(())
    } else {
        Err(HrError::HolidayOutsidePeriod {
            date,
            period: period.name.clone(),
        })
    }
}

/// Fails with [`HrError::PeriodOutsideYear`] unless `period` lies within `year`.
pub fn validate_period_in_year(period: &PayrollPeriod, year: &PayrollYear) -> HrResult<()> {
    if year.range().contains_range(&period.range()) {
        Ok(())
    } else {
        Err(HrError::PeriodOutsideYear {
            period: period.name.clone(),
            year: year.name.clone(),
        })
    }
}

/// Manages the lifecycle of payroll years, periods and holidays.
pub struct PayrollCalendar<R> {
    repository: R,
    default_interval_months: u32,
}

impl<R: CalendarRepository> PayrollCalendar<R> {
    /// Creates a manager over `repository` with a one-month default interval.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            default_interval_months: super::DEFAULT_PERIOD_INTERVAL_MONTHS,
        }
    }

    /// Overrides the interval used by [`PayrollCalendar::create_default_periods`].
    pub fn with_default_interval(mut self, months: u32) -> Self {
        self.default_interval_months = months;
        self
    }

    /// Returns the interval used when callers do not pick one.
    pub fn default_interval_months(&self) -> u32 {
        self.default_interval_months
    }

    /// Creates an open payroll year for the scope's company.
    ///
    /// # Errors
    ///
    /// - [`HrError::InvalidRecord`] when no department is given or in scope
    /// - [`HrError::InvalidDateRange`] when the year starts after it ends
    /// - [`HrError::YearsOverlap`] when another year of the company shares a day
    pub fn create_year(&self, scope: &Scope, draft: NewPayrollYear) -> HrResult<PayrollYear> {
        let department = draft
            .department
            .or(scope.department)
            .ok_or_else(|| HrError::invalid("payroll year", "department", "is required"))?;

        let year = PayrollYear {
            id: YearId::new(),
            name: draft.name,
            company: scope.company,
            department,
            start_date: draft.start_date,
            end_date: draft.end_date,
            state: CalendarState::Open,
        };
        validate_range(&year)?;

        let mut tx = self.repository.begin()?;
        let siblings = tx.years_of_company(year.company)?;
        validate_year_no_overlap(&year, &siblings)?;
        tx.put_year(year.clone())?;
        tx.commit()?;

        info!(
            year_id = %year.id,
            company = %year.company,
            start_date = %year.start_date,
            end_date = %year.end_date,
            "Payroll year created"
        );
        Ok(year)
    }

    /// Applies changes to an open payroll year, revalidating its range.
    pub fn update_year(&self, id: YearId, changes: YearChanges) -> HrResult<PayrollYear> {
        let mut tx = self.repository.begin()?;
        let mut year = load_year(&tx, id)?;
        if !year.is_open() {
            return Err(HrError::Closed {
                entity: CalendarEntity::Year.label(),
                name: year.name,
            });
        }

        if let Some(name) = changes.name {
            year.name = name;
        }
        if let Some(department) = changes.department {
            year.department = department;
        }
        if let Some(start) = changes.start_date {
            year.start_date = start;
        }
        if let Some(end) = changes.end_date {
            year.end_date = end;
        }
        validate_range(&year)?;

        let siblings = tx.years_of_company(year.company)?;
        validate_year_no_overlap(&year, &siblings)?;
        for period in tx.periods_of_year(id)? {
            validate_period_in_year(&period, &year)?;
        }
        tx.put_year(year.clone())?;
        tx.commit()?;

        debug!(year_id = %id, "Payroll year updated");
        Ok(year)
    }

    /// Looks up a payroll year.
    pub fn year(&self, id: YearId) -> HrResult<PayrollYear> {
        let tx = self.repository.begin()?;
        load_year(&tx, id)
    }

    /// Lists the payroll years of a company, oldest first.
    pub fn years(&self, company: CompanyId) -> HrResult<Vec<PayrollYear>> {
        self.repository.begin()?.years_of_company(company)
    }

    /// Looks up a payroll period.
    pub fn period(&self, id: PeriodId) -> HrResult<PayrollPeriod> {
        let tx = self.repository.begin()?;
        load_period(&tx, id)
    }

    /// Lists the periods of a year, oldest first.
    pub fn periods(&self, year: YearId) -> HrResult<Vec<PayrollPeriod>> {
        let tx = self.repository.begin()?;
        load_year(&tx, year)?;
        tx.periods_of_year(year)
    }

    /// Lists the holidays of a period, by date.
    pub fn holidays(&self, period: PeriodId) -> HrResult<Vec<PayrollHoliday>> {
        let tx = self.repository.begin()?;
        load_period(&tx, period)?;
        tx.holidays_of_period(period)
    }

    /// Returns the unique open year of `company` covering `date`.
    ///
    /// # Errors
    ///
    /// - [`HrError::PayrollYearNotFound`] when no open year covers the date
    /// - [`HrError::AmbiguousPayrollYear`] when more than one does
    pub fn find_year_for_date(&self, company: CompanyId, date: NaiveDate) -> HrResult<PayrollYear> {
        let years = self.repository.begin()?.years_of_company(company)?;
        let mut matching: Vec<PayrollYear> = years
            .into_iter()
            .filter(|y| y.is_open() && y.range().contains_date(date))
            .collect();
        match matching.len() {
            0 => Err(HrError::PayrollYearNotFound { date }),
            1 => Ok(matching.remove(0)),
            count => Err(HrError::AmbiguousPayrollYear { date, count }),
        }
    }

    /// Creates one period by hand inside an open year.
    ///
    /// # Errors
    ///
    /// - [`HrError::Closed`] when the year is closed
    /// - [`HrError::InvalidDateRange`] / [`HrError::PeriodOutsideYear`] for bad dates
    /// - [`HrError::PeriodsOverlap`] when another period of the year shares a day
    pub fn create_period(&self, draft: NewPayrollPeriod) -> HrResult<PayrollPeriod> {
        let mut tx = self.repository.begin()?;
        let year = load_year(&tx, draft.payroll_year)?;
        if !year.is_open() {
            return Err(HrError::Closed {
                entity: CalendarEntity::Year.label(),
                name: year.name,
            });
        }

        let period = PayrollPeriod {
            id: PeriodId::new(),
            name: draft.name,
            payroll_year: year.id,
            department: draft.department.unwrap_or(year.department),
            start_date: draft.start_date,
            end_date: draft.end_date,
            state: CalendarState::Open,
        };
        validate_range(&period)?;
        validate_period_in_year(&period, &year)?;
        let siblings = tx.periods_of_year(year.id)?;
        validate_period_no_overlap(&period, &siblings)?;

        tx.put_period(period.clone())?;
        tx.commit()?;

        debug!(period_id = %period.id, year_id = %year.id, "Payroll period created");
        Ok(period)
    }

    /// Applies changes to an open period, revalidating its range.
    pub fn update_period(&self, id: PeriodId, changes: PeriodChanges) -> HrResult<PayrollPeriod> {
        let mut tx = self.repository.begin()?;
        let mut period = load_period(&tx, id)?;
        if !period.is_open() {
            return Err(HrError::Closed {
                entity: CalendarEntity::Period.label(),
                name: period.name,
            });
        }
        let year = load_year(&tx, period.payroll_year)?;

        if let Some(name) = changes.name {
            period.name = name;
        }
        if let Some(start) = changes.start_date {
            period.start_date = start;
        }
        if let Some(end) = changes.end_date {
            period.end_date = end;
        }
        validate_range(&period)?;
        validate_period_in_year(&period, &year)?;
        let siblings = tx.periods_of_year(year.id)?;
        validate_period_no_overlap(&period, &siblings)?;

        for holiday in tx.holidays_of_period(id)? {
            validate_holiday(holiday.date, &period)?;
        }

        tx.put_period(period.clone())?;
        tx.commit()?;
        Ok(period)
    }

    /// Partitions an open, period-less year into `interval_months` chunks.
    ///
    /// All periods are written in one transaction; if any fails validation,
    /// none are stored.
    ///
    /// # Errors
    ///
    /// - [`HrError::Closed`] when the year is closed
    /// - [`HrError::PeriodsAlreadyCreated`] when the year already has periods
    /// - [`HrError::InvalidInterval`] for a zero interval
    pub fn create_periods(&self, id: YearId, interval_months: u32) -> HrResult<Vec<PayrollPeriod>> {
        let mut tx = self.repository.begin()?;
        let year = load_year(&tx, id)?;
        if !year.is_open() {
            return Err(HrError::Closed {
                entity: CalendarEntity::Year.label(),
                name: year.name,
            });
        }
        if !tx.periods_of_year(id)?.is_empty() {
            return Err(HrError::PeriodsAlreadyCreated { year: year.name });
        }

        let plans = plan_periods(year.range(), interval_months)?;
        let mut created = Vec::with_capacity(plans.len());
        for plan in plans {
            let period = PayrollPeriod {
                id: PeriodId::new(),
                name: plan.name,
                payroll_year: year.id,
                department: year.department,
                start_date: plan.start_date,
                end_date: plan.end_date,
                state: CalendarState::Open,
            };
            validate_period_no_overlap(&period, &created)?;
            tx.put_period(period.clone())?;
            created.push(period);
        }
        tx.commit()?;

        info!(
            year_id = %id,
            interval_months,
            periods = created.len(),
            "Payroll periods created"
        );
        Ok(created)
    }

    /// Creates periods using the configured default interval.
    pub fn create_default_periods(&self, id: YearId) -> HrResult<Vec<PayrollPeriod>> {
        self.create_periods(id, self.default_interval_months)
    }

    /// Closes a year and every period of it that is still open.
    pub fn close_year(&self, id: YearId) -> HrResult<PayrollYear> {
        self.apply_year_event(id, CalendarEvent::Close)
    }

    /// Reopens a closed year. Its periods stay as they are.
    pub fn reopen_year(&self, id: YearId) -> HrResult<PayrollYear> {
        self.apply_year_event(id, CalendarEvent::Reopen)
    }

    /// Closes a period once every earlier period of its year is closed.
    ///
    /// # Errors
    ///
    /// Returns [`HrError::CloseOutOfOrder`] naming the earliest open period
    /// ending on or before this one.
    pub fn close_period(&self, id: PeriodId) -> HrResult<PayrollPeriod> {
        self.apply_period_event(id, CalendarEvent::Close)
    }

    /// Reopens a period, and its year along with it.
    pub fn reopen_period(&self, id: PeriodId) -> HrResult<PayrollPeriod> {
        self.apply_period_event(id, CalendarEvent::Reopen)
    }

    /// Adds a holiday to an open period.
    ///
    /// # Errors
    ///
    /// - [`HrError::Closed`] when the period is closed
    /// - [`HrError::HolidayOutsidePeriod`] when the date is outside the period
    pub fn add_holiday(
        &self,
        period_id: PeriodId,
        date: NaiveDate,
        name: Option<String>,
    ) -> HrResult<PayrollHoliday> {
        let mut tx = self.repository.begin()?;
        let period = load_period(&tx, period_id)?;
        if !period.is_open() {
            return Err(HrError::Closed {
                entity: CalendarEntity::Period.label(),
                name: period.name,
            });
        }
        validate_holiday(date, &period)?;

        let holiday = PayrollHoliday {
            id: HolidayId::new(),
            period: period_id,
            date,
            name,
        };
        tx.put_holiday(holiday.clone())?;
        tx.commit()?;
        Ok(holiday)
    }

    fn apply_year_event(&self, id: YearId, event: CalendarEvent) -> HrResult<PayrollYear> {
        let mut tx = self.repository.begin()?;
        let mut year = load_year(&tx, id)?;
        let step = transition(CalendarEntity::Year, &year.name, year.state, event)?;

        year.state = step.to;
        tx.put_year(year.clone())?;

        let mut cascaded = 0usize;
        if step.cascade == Some(Cascade::CloseChildPeriods) {
            for mut period in tx.periods_of_year(id)? {
                if period.is_open() {
                    period.state = CalendarState::Close;
                    tx.put_period(period)?;
                    cascaded += 1;
                }
            }
        }
        tx.commit()?;

        info!(year_id = %id, event = %event, state = %year.state, cascaded, "Payroll year transition");
        Ok(year)
    }

    fn apply_period_event(&self, id: PeriodId, event: CalendarEvent) -> HrResult<PayrollPeriod> {
        let mut tx = self.repository.begin()?;
        let mut period = load_period(&tx, id)?;
        let step = transition(CalendarEntity::Period, &period.name, period.state, event)?;

        if step.guard == Some(Guard::EarlierPeriodsClosed) {
            let blocker = tx
                .periods_of_year(period.payroll_year)?
                .into_iter()
                .filter(|p| p.id != period.id && p.is_open() && p.end_date <= period.end_date)
                .min_by_key(|p| p.end_date);
            if let Some(earlier) = blocker {
                warn!(
                    period_id = %id,
                    blocking_period = %earlier.id,
                    "Out-of-order period close rejected"
                );
                return Err(HrError::CloseOutOfOrder {
                    period: period.name,
                    earlier: earlier.name,
                });
            }
        }

        period.state = step.to;
        tx.put_period(period.clone())?;

        if step.cascade == Some(Cascade::ReopenParentYear) {
            let mut year = load_year(&tx, period.payroll_year)?;
            if !year.is_open() {
                year.state = CalendarState::Open;
                tx.put_year(year)?;
            }
        }
        tx.commit()?;

        info!(period_id = %id, event = %event, state = %period.state, "Payroll period transition");
        Ok(period)
    }
}

fn load_year<T: CalendarTx>(tx: &T, id: YearId) -> HrResult<PayrollYear> {
    tx.year(id)?
        .ok_or_else(|| HrError::not_found(CalendarEntity::Year.label(), id))
}

fn load_period<T: CalendarTx>(tx: &T, id: PeriodId) -> HrResult<PayrollPeriod> {
    tx.period(id)?
        .ok_or_else(|| HrError::not_found(CalendarEntity::Period.label(), id))
}
