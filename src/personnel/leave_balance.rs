//! Remaining leave per employee in the current payroll year.
//!
//! Taken leave is counted from attendance: a day counts against a leave type
//! when it falls inside the payroll year, is marked on leave and is linked
//! to an application of that type. Balances are not clamped and may go
//! negative.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::PayrollCalendar;
use crate::config::LeaveConfig;
use crate::error::{HrError, HrResult};
use crate::models::{
    Employee, EmployeeRef, LeaveApplicationId, LeaveBalances, LeaveType, PayrollYear,
};
use crate::store::{CalendarRepository, PersonnelRepository};

/// Computes leave balances from the calendar, attendance and allowances.
pub struct LeaveLedger<C, P> {
    calendar: Arc<PayrollCalendar<C>>,
    store: Arc<P>,
    allowances: LeaveConfig,
}

impl<C: CalendarRepository, P: PersonnelRepository> LeaveLedger<C, P> {
    /// Creates a ledger.
    pub fn new(calendar: Arc<PayrollCalendar<C>>, store: Arc<P>, allowances: LeaveConfig) -> Self {
        Self {
            calendar,
            store,
            allowances,
        }
    }

    /// Returns the single open payroll year of the employee's company covering `today`.
    pub fn current_payroll_year(&self, employee: &Employee, today: NaiveDate) -> HrResult<PayrollYear> {
        self.calendar.find_year_for_date(employee.company, today)
    }

    /// Counts the leave days of one type the employee took inside `year`.
    pub fn leaves_taken(
        &self,
        employee: EmployeeRef,
        leave_type: LeaveType,
        year: &PayrollYear,
    ) -> HrResult<i64> {
        Ok(self
            .taken_by_type(employee, year)?
            .get(&leave_type)
            .copied()
            .unwrap_or(0))
    }

    /// Returns the allowance minus the days taken in the current payroll year.
    pub fn available(
        &self,
        employee: EmployeeRef,
        leave_type: LeaveType,
        today: NaiveDate,
    ) -> HrResult<i64> {
        Ok(self.balances(employee, today)?.get(leave_type))
    }

    /// Returns all six leave counters for the employee.
    ///
    /// # Errors
    ///
    /// - [`HrError::NotFound`] for an unknown employee
    /// - [`HrError::PayrollYearNotFound`] / [`HrError::AmbiguousPayrollYear`]
    ///   when the current payroll year can not be determined
    pub fn balances(&self, employee_id: EmployeeRef, today: NaiveDate) -> HrResult<LeaveBalances> {
        let employee = self
            .store
            .employee(employee_id)?
            .ok_or_else(|| HrError::not_found("employee", employee_id))?;
        let year = self.current_payroll_year(&employee, today)?;
        let taken = self.taken_by_type(employee_id, &year)?;

        let mut balances = LeaveBalances::new(year.id);
        for leave_type in LeaveType::ALL {
            let allowed = self.allowances.allowed(employee.employee_type, leave_type);
            let used = taken.get(&leave_type).copied().unwrap_or(0);
            balances.set(leave_type, allowed - used);
        }

        debug!(
            employee = %employee_id,
            payroll_year = %year.id,
            casual = balances.available_cl,
            sick = balances.available_sl,
            "Leave balances computed"
        );
        Ok(balances)
    }

    fn taken_by_type(
        &self,
        employee: EmployeeRef,
        year: &PayrollYear,
    ) -> HrResult<HashMap<LeaveType, i64>> {
        let range = year.range();
        let mut types: HashMap<LeaveApplicationId, Option<LeaveType>> = HashMap::new();
        let mut taken: HashMap<LeaveType, i64> = HashMap::new();

        for row in self.store.attendance_of(employee)? {
            if !row.on_leave || !range.contains_date(row.date) {
                continue;
            }
            let Some(application_id) = row.leave_application else {
                continue;
            };
            let leave_type = match types.get(&application_id) {
                Some(cached) => *cached,
                None => {
                    let found = self
                        .store
                        .leave_application(application_id)?
                        .map(|a| a.leave_type);
                    types.insert(application_id, found);
                    found
                }
            };
            if let Some(leave_type) = leave_type {
                *taken.entry(leave_type).or_insert(0) += 1;
            }
        }
        Ok(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::NewPayrollYear;
    use crate::config::LeaveAllowances;
    use crate::models::{
        Attendance, AttendanceId, CompanyId, DepartmentId, EmployeeState, EmployeeType,
        LeaveApplication, MaritalStatus, Scope, Sex,
    };
    use crate::store::{InMemoryCalendarStore, InMemoryPersonnelStore};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        ledger: LeaveLedger<InMemoryCalendarStore, InMemoryPersonnelStore>,
        calendar: Arc<PayrollCalendar<InMemoryCalendarStore>>,
        store: Arc<InMemoryPersonnelStore>,
        scope: Scope,
    }

    fn fixture() -> Fixture {
        let calendar = Arc::new(PayrollCalendar::new(InMemoryCalendarStore::new()));
        let store = Arc::new(InMemoryPersonnelStore::new());
        let allowances = LeaveConfig {
            probation: LeaveAllowances {
                casual: Some(1),
                sick: Some(2),
                ..LeaveAllowances::default()
            },
            confirmed: LeaveAllowances {
                casual: Some(8),
                ..LeaveAllowances::default()
            },
        };
        let scope = Scope::company(CompanyId::new()).with_department(DepartmentId::new());
        Fixture {
            ledger: LeaveLedger::new(Arc::clone(&calendar), Arc::clone(&store), allowances),
            calendar,
            store,
            scope,
        }
    }

    fn employee(company: CompanyId, employee_type: EmployeeType) -> Employee {
        Employee {
            id: EmployeeRef::new(),
            employee_id: format!("T{}", uuid::Uuid::new_v4()),
            company,
            department: None,
            state: EmployeeState::Current,
            employee_type,
            first_name: None,
            middle_name: None,
            last_name: None,
            manager: None,
            sex: Sex::Male,
            date_of_birth: None,
            place_of_birth: None,
            marital_status: MaritalStatus::Single,
            wedding_date: None,
            marriage_license: None,
            nationality: None,
            driving_license: None,
            driving_license_validity: None,
            passport_number: None,
            passport_validity: None,
        }
    }

    fn take_leave(store: &InMemoryPersonnelStore, who: EmployeeRef, leave_type: LeaveType, day: NaiveDate) {
        let application = store
            .insert_leave_application(LeaveApplication {
                id: LeaveApplicationId::new(),
                employee: who,
                leave_type,
                from_date: day,
                to_date: day,
                reason: None,
            })
            .unwrap();
        store
            .insert_attendance(Attendance {
                id: AttendanceId::new(),
                employee: who,
                date: day,
                on_leave: true,
                leave_application: Some(application.id),
            })
            .unwrap();
    }

    fn open_2024(f: &Fixture) -> PayrollYear {
        f.calendar
            .create_year(
                &f.scope,
                NewPayrollYear {
                    name: "FY 2024".to_string(),
                    department: None,
                    start_date: date(2024, 1, 1),
                    end_date: date(2024, 12, 31),
                },
            )
            .unwrap()
    }

    #[test]
    fn test_probation_casual_leave_used_up() {
        let f = fixture();
        let year = open_2024(&f);
        let emp = f
            .store
            .insert_employee(employee(f.scope.company, EmployeeType::Probation))
            .unwrap();
        take_leave(&f.store, emp.id, LeaveType::Casual, date(2024, 3, 4));

        let balances = f.ledger.balances(emp.id, date(2024, 6, 1)).unwrap();
        assert_eq!(balances.payroll_year, year.id);
        assert_eq!(balances.available_cl, 0);
        assert_eq!(balances.available_sl, 2);
        assert_eq!(balances.available_al, 0);
    }

    #[test]
    fn test_leave_outside_year_is_not_counted() {
        let f = fixture();
        let year = open_2024(&f);
        let emp = f
            .store
            .insert_employee(employee(f.scope.company, EmployeeType::Confirmed))
            .unwrap();
        take_leave(&f.store, emp.id, LeaveType::Casual, date(2023, 12, 29));
        take_leave(&f.store, emp.id, LeaveType::Casual, date(2024, 2, 1));

        assert_eq!(f.ledger.leaves_taken(emp.id, LeaveType::Casual, &year).unwrap(), 1);
        assert_eq!(
            f.ledger.available(emp.id, LeaveType::Casual, date(2024, 2, 2)).unwrap(),
            7
        );
    }

    #[test]
    fn test_balance_may_go_negative() {
        let f = fixture();
        open_2024(&f);
        let emp = f
            .store
            .insert_employee(employee(f.scope.company, EmployeeType::Probation))
            .unwrap();
        for day in 1..=3 {
            take_leave(&f.store, emp.id, LeaveType::Casual, date(2024, 5, day));
        }
        assert_eq!(
            f.ledger.available(emp.id, LeaveType::Casual, date(2024, 6, 1)).unwrap(),
            -2
        );
    }

    #[test]
    fn test_no_open_year_for_today() {
        let f = fixture();
        let year = open_2024(&f);
        f.calendar.close_year(year.id).unwrap();
        let emp = f
            .store
            .insert_employee(employee(f.scope.company, EmployeeType::Confirmed))
            .unwrap();
        assert!(matches!(
            f.ledger.balances(emp.id, date(2024, 6, 1)),
            Err(HrError::PayrollYearNotFound { .. })
        ));
    }

    #[test]
    fn test_other_company_year_is_ignored() {
        let f = fixture();
        open_2024(&f);
        let emp = f
            .store
            .insert_employee(employee(CompanyId::new(), EmployeeType::Confirmed))
            .unwrap();
        assert!(f.ledger.balances(emp.id, date(2024, 6, 1)).is_err());
    }
}
