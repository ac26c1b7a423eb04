//! In-memory repositories.
//!
//! The calendar store keeps its tables behind one `Mutex`. A transaction
//! holds the guard for its whole life. Reads go straight to the live tables
//! until the first write, which takes a staged copy; the copy replaces the
//! live tables on commit.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use super::{CalendarRepository, CalendarTx, PersonnelRepository};
use crate::error::{HrError, HrResult};
use crate::models::{
    AcademicId, AcademicRecord, Attendance, AttendanceId, CompanyId, Department, DepartmentId,
    Employee, EmployeeChange, EmployeeHistory, EmployeeRef, HolidayId, LanguageSkill,
    LeaveApplication, LeaveApplicationId, PaymentDetail, PaymentDetailId, PayrollHoliday,
    PayrollPeriod, PayrollYear, PeriodId, ProposalId, Responsibility, Skill, Team,
    TransferProposal, TransferRemark, TransferState, YearId,
};

#[derive(Debug, Clone, Default)]
struct CalendarTables {
    years: BTreeMap<YearId, PayrollYear>,
    periods: BTreeMap<PeriodId, PayrollPeriod>,
    holidays: BTreeMap<HolidayId, PayrollHoliday>,
}

/// Calendar store backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryCalendarStore {
    tables: Mutex<CalendarTables>,
}

impl InMemoryCalendarStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalendarRepository for InMemoryCalendarStore {
    type Tx<'a> = InMemoryCalendarTx<'a>;

    fn begin(&self) -> HrResult<Self::Tx<'_>> {
        let guard = self.tables.lock().map_err(|_| HrError::Storage {
            message: "calendar lock poisoned".to_string(),
        })?;
        Ok(InMemoryCalendarTx {
            guard,
            staged: None,
        })
    }
}

/// A calendar transaction over [`InMemoryCalendarStore`].
pub struct InMemoryCalendarTx<'a> {
    guard: MutexGuard<'a, CalendarTables>,
    staged: Option<CalendarTables>,
}

impl InMemoryCalendarTx<'_> {
    fn tables(&self) -> &CalendarTables {
        self.staged.as_ref().unwrap_or(&*self.guard)
    }

    fn staged_mut(&mut self) -> &mut CalendarTables {
        let live = &self.guard;
        self.staged.get_or_insert_with(|| CalendarTables::clone(live))
    }
}

impl CalendarTx for InMemoryCalendarTx<'_> {
    fn year(&self, id: YearId) -> HrResult<Option<PayrollYear>> {
        Ok(self.tables().years.get(&id).cloned())
    }

    fn years_of_company(&self, company: CompanyId) -> HrResult<Vec<PayrollYear>> {
        let mut years: Vec<PayrollYear> = self
            .tables()
            .years
            .values()
            .filter(|y| y.company == company)
            .cloned()
            .collect();
        years.sort_by_key(|y| y.start_date);
        Ok(years)
    }

    fn put_year(&mut self, year: PayrollYear) -> HrResult<()> {
        self.staged_mut().years.insert(year.id, year);
        Ok(())
    }

    fn period(&self, id: PeriodId) -> HrResult<Option<PayrollPeriod>> {
        Ok(self.tables().periods.get(&id).cloned())
    }

    fn periods_of_year(&self, year: YearId) -> HrResult<Vec<PayrollPeriod>> {
        let mut periods: Vec<PayrollPeriod> = self
            .tables()
            .periods
            .values()
            .filter(|p| p.payroll_year == year)
            .cloned()
            .collect();
        periods.sort_by_key(|p| p.start_date);
        Ok(periods)
    }

    fn put_period(&mut self, period: PayrollPeriod) -> HrResult<()> {
        self.staged_mut().periods.insert(period.id, period);
        Ok(())
    }

    fn holidays_of_period(&self, period: PeriodId) -> HrResult<Vec<PayrollHoliday>> {
        let mut holidays: Vec<PayrollHoliday> = self
            .tables()
            .holidays
            .values()
            .filter(|h| h.period == period)
            .cloned()
            .collect();
        holidays.sort_by_key(|h| h.date);
        Ok(holidays)
    }

    fn put_holiday(&mut self, holiday: PayrollHoliday) -> HrResult<()> {
        self.staged_mut().holidays.insert(holiday.id, holiday);
        Ok(())
    }

    fn commit(mut self) -> HrResult<()> {
        let Some(staged) = self.staged.take() else {
            return Ok(());
        };
        *self.guard = staged;
        debug!(
            years = self.guard.years.len(),
            periods = self.guard.periods.len(),
            holidays = self.guard.holidays.len(),
            "Calendar transaction committed"
        );
        Ok(())
    }
}

#[derive(Debug, Default)]
struct PersonnelTables {
    departments: BTreeMap<DepartmentId, Department>,
    employees: BTreeMap<EmployeeRef, Employee>,
    languages: Vec<LanguageSkill>,
    academics: BTreeMap<AcademicId, AcademicRecord>,
    leave_applications: BTreeMap<LeaveApplicationId, LeaveApplication>,
    attendance: BTreeMap<AttendanceId, Attendance>,
    proposals: BTreeMap<ProposalId, TransferProposal>,
    payment_details: BTreeMap<PaymentDetailId, PaymentDetail>,
    responsibilities: Vec<Responsibility>,
    skills: Vec<Skill>,
    teams: Vec<Team>,
    history: Vec<EmployeeHistory>,
}

fn record_history(history: &mut Vec<EmployeeHistory>, snapshot: Employee, change: EmployeeChange) {
    let revision = history
        .iter()
        .filter(|h| h.employee == snapshot.id)
        .count() as u64
        + 1;
    history.push(EmployeeHistory {
        employee: snapshot.id,
        revision,
        changed_at: Utc::now(),
        change,
        snapshot,
    });
}

/// Personnel store backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryPersonnelStore {
    tables: RwLock<PersonnelTables>,
}

impl InMemoryPersonnelStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> HrResult<RwLockReadGuard<'_, PersonnelTables>> {
        self.tables.read().map_err(|_| HrError::Storage {
            message: "personnel lock poisoned".to_string(),
        })
    }

    fn write(&self) -> HrResult<RwLockWriteGuard<'_, PersonnelTables>> {
        self.tables.write().map_err(|_| HrError::Storage {
            message: "personnel lock poisoned".to_string(),
        })
    }
}

impl PersonnelRepository for InMemoryPersonnelStore {
    fn insert_department(&self, department: Department) -> HrResult<Department> {
        let mut tables = self.write()?;
        tables.departments.insert(department.id, department.clone());
        Ok(department)
    }

    fn department(&self, id: DepartmentId) -> HrResult<Option<Department>> {
        Ok(self.read()?.departments.get(&id).cloned())
    }

    fn insert_employee(&self, employee: Employee) -> HrResult<Employee> {
        let mut tables = self.write()?;
        if tables
            .employees
            .values()
            .any(|e| e.employee_id == employee.employee_id)
        {
            return Err(HrError::Duplicate {
                entity: "employee id",
                key: employee.employee_id,
            });
        }
        tables.employees.insert(employee.id, employee.clone());
        record_history(&mut tables.history, employee.clone(), EmployeeChange::Hired);
        Ok(employee)
    }

    fn update_employee(&self, employee: Employee) -> HrResult<()> {
        let mut tables = self.write()?;
        if !tables.employees.contains_key(&employee.id) {
            return Err(HrError::not_found("employee", employee.id));
        }
        if tables
            .employees
            .values()
            .any(|e| e.id != employee.id && e.employee_id == employee.employee_id)
        {
            return Err(HrError::Duplicate {
                entity: "employee id",
                key: employee.employee_id,
            });
        }
        tables.employees.insert(employee.id, employee.clone());
        record_history(&mut tables.history, employee, EmployeeChange::Updated);
        Ok(())
    }

    fn history_of(&self, employee: EmployeeRef) -> HrResult<Vec<EmployeeHistory>> {
        let mut entries: Vec<EmployeeHistory> = self
            .read()?
            .history
            .iter()
            .filter(|h| h.employee == employee)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.revision.cmp(&a.revision));
        Ok(entries)
    }

    fn employee(&self, id: EmployeeRef) -> HrResult<Option<Employee>> {
        Ok(self.read()?.employees.get(&id).cloned())
    }

    fn insert_language(&self, skill: LanguageSkill) -> HrResult<LanguageSkill> {
        let mut tables = self.write()?;
        if tables
            .languages
            .iter()
            .any(|l| l.employee == skill.employee && l.language == skill.language)
        {
            return Err(HrError::Duplicate {
                entity: "employee language",
                key: skill.language,
            });
        }
        tables.languages.push(skill.clone());
        Ok(skill)
    }

    fn languages_of(&self, employee: EmployeeRef) -> HrResult<Vec<LanguageSkill>> {
        Ok(self
            .read()?
            .languages
            .iter()
            .filter(|l| l.employee == employee)
            .cloned()
            .collect())
    }

    fn insert_academic(&self, record: AcademicRecord) -> HrResult<AcademicRecord> {
        let mut tables = self.write()?;
        tables.academics.insert(record.id, record.clone());
        Ok(record)
    }

    fn academic(&self, id: AcademicId) -> HrResult<Option<AcademicRecord>> {
        Ok(self.read()?.academics.get(&id).cloned())
    }

    fn insert_leave_application(
        &self,
        application: LeaveApplication,
    ) -> HrResult<LeaveApplication> {
        let mut tables = self.write()?;
        tables
            .leave_applications
            .insert(application.id, application.clone());
        Ok(application)
    }

    fn leave_application(&self, id: LeaveApplicationId) -> HrResult<Option<LeaveApplication>> {
        Ok(self.read()?.leave_applications.get(&id).cloned())
    }

    fn insert_attendance(&self, attendance: Attendance) -> HrResult<Attendance> {
        let mut tables = self.write()?;
        tables.attendance.insert(attendance.id, attendance.clone());
        Ok(attendance)
    }

    fn attendance_of(&self, employee: EmployeeRef) -> HrResult<Vec<Attendance>> {
        let mut rows: Vec<Attendance> = self
            .read()?
            .attendance
            .values()
            .filter(|a| a.employee == employee)
            .cloned()
            .collect();
        rows.sort_by_key(|a| a.date);
        Ok(rows)
    }

    fn insert_proposal(&self, proposal: TransferProposal) -> HrResult<TransferProposal> {
        let mut tables = self.write()?;
        tables.proposals.insert(proposal.id, proposal.clone());
        Ok(proposal)
    }

    fn proposal(&self, id: ProposalId) -> HrResult<Option<TransferProposal>> {
        Ok(self.read()?.proposals.get(&id).cloned())
    }

    fn transition_proposal(
        &self,
        id: ProposalId,
        from: TransferState,
        to: TransferState,
        relocate: bool,
    ) -> HrResult<TransferProposal> {
        let mut guard = self.write()?;
        let tables = &mut *guard;
        let proposal = tables
            .proposals
            .get_mut(&id)
            .ok_or_else(|| HrError::not_found("transfer proposal", id))?;
        if proposal.state != from {
            return Err(HrError::StaleRecord {
                entity: "transfer proposal",
                key: id.to_string(),
                expected: from.to_string(),
                found: proposal.state.to_string(),
            });
        }
        if relocate {
            let employee = tables
                .employees
                .get_mut(&proposal.employee)
                .ok_or_else(|| HrError::not_found("employee", proposal.employee))?;
            employee.company = proposal.proposed_company;
            employee.department = Some(proposal.proposed_department);
            record_history(
                &mut tables.history,
                employee.clone(),
                EmployeeChange::Transferred,
            );
        }
        proposal.state = to;
        Ok(proposal.clone())
    }

    fn append_remark(&self, id: ProposalId, remark: TransferRemark) -> HrResult<TransferProposal> {
        let mut tables = self.write()?;
        let proposal = tables
            .proposals
            .get_mut(&id)
            .ok_or_else(|| HrError::not_found("transfer proposal", id))?;
        proposal.remarks.push(remark);
        Ok(proposal.clone())
    }

    fn insert_payment_detail(&self, detail: PaymentDetail) -> HrResult<PaymentDetail> {
        let mut tables = self.write()?;
        tables.payment_details.insert(detail.id, detail.clone());
        Ok(detail)
    }

    fn payment_details_of(&self, employee: EmployeeRef) -> HrResult<Vec<PaymentDetail>> {
        Ok(self
            .read()?
            .payment_details
            .values()
            .filter(|d| d.employee == employee)
            .cloned()
            .collect())
    }

    fn insert_responsibility(&self, responsibility: Responsibility) -> HrResult<Responsibility> {
        self.write()?.responsibilities.push(responsibility.clone());
        Ok(responsibility)
    }

    fn responsibilities_of(&self, employee: EmployeeRef) -> HrResult<Vec<Responsibility>> {
        Ok(self
            .read()?
            .responsibilities
            .iter()
            .filter(|r| r.employee == employee)
            .cloned()
            .collect())
    }

    fn insert_skill(&self, skill: Skill) -> HrResult<Skill> {
        self.write()?.skills.push(skill.clone());
        Ok(skill)
    }

    fn skills_of(&self, employee: EmployeeRef) -> HrResult<Vec<Skill>> {
        Ok(self
            .read()?
            .skills
            .iter()
            .filter(|s| s.employee == employee)
            .cloned()
            .collect())
    }

    fn insert_team(&self, team: Team) -> HrResult<Team> {
        self.write()?.teams.push(team.clone());
        Ok(team)
    }

    fn teams_of(&self, employee: EmployeeRef) -> HrResult<Vec<Team>> {
        Ok(self
            .read()?
            .teams
            .iter()
            .filter(|t| t.employee == employee)
            .cloned()
            .collect())
    }
}
