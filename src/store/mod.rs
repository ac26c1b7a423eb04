//! Storage seams for the payroll calendar and personnel records.
//!
//! The calendar is written through explicit transactions: [`CalendarRepository::begin`]
//! takes the calendar's exclusive writer lock and hands back a [`CalendarTx`]
//! whose writes become visible only on [`CalendarTx::commit`]. Overlap checks
//! run inside that transaction, so no concurrent writer can slip a sibling in
//! between the check and the write. Dropping a transaction without committing
//! discards every staged write.
//!
//! Personnel records have simpler needs and use [`PersonnelRepository`],
//! whose methods are individually atomic. Read-modify-write steps that must
//! not interleave, such as moving a proposal through review, are single
//! repository methods that check the stored state under the write lock.

mod memory;

pub use memory::{InMemoryCalendarStore, InMemoryCalendarTx, InMemoryPersonnelStore};

use crate::error::HrResult;
use crate::models::{
    AcademicId, AcademicRecord, Attendance, CompanyId, Department, DepartmentId, Employee,
    EmployeeHistory, EmployeeRef, LanguageSkill, LeaveApplication, LeaveApplicationId,
    PaymentDetail, PayrollHoliday, PayrollPeriod, PayrollYear, PeriodId, ProposalId,
    Responsibility, Skill, Team, TransferProposal, TransferRemark, TransferState, YearId,
};

/// Source of calendar write transactions.
pub trait CalendarRepository: Send + Sync {
    /// The transaction type, borrowing the repository while the lock is held.
    type Tx<'a>: CalendarTx
    where
        Self: 'a;

    /// Acquires the exclusive calendar lock and opens a transaction.
    fn begin(&self) -> HrResult<Self::Tx<'_>>;
}

/// Reads and staged writes inside one calendar transaction.
///
/// Listing methods return records ordered by start date (holidays by date).
pub trait CalendarTx {
    /// Looks up a payroll year.
    fn year(&self, id: YearId) -> HrResult<Option<PayrollYear>>;

    /// Lists the payroll years of a company.
    fn years_of_company(&self, company: CompanyId) -> HrResult<Vec<PayrollYear>>;

    /// Inserts or replaces a payroll year.
    fn put_year(&mut self, year: PayrollYear) -> HrResult<()>;

    /// Looks up a payroll period.
    fn period(&self, id: PeriodId) -> HrResult<Option<PayrollPeriod>>;

    /// Lists the periods of a payroll year.
    fn periods_of_year(&self, year: YearId) -> HrResult<Vec<PayrollPeriod>>;

    /// Inserts or replaces a payroll period.
    fn put_period(&mut self, period: PayrollPeriod) -> HrResult<()>;

    /// Lists the holidays of a period.
    fn holidays_of_period(&self, period: PeriodId) -> HrResult<Vec<PayrollHoliday>>;

    /// Inserts or replaces a holiday.
    fn put_holiday(&mut self, holiday: PayrollHoliday) -> HrResult<()>;

    /// Publishes every staged write and releases the lock.
    fn commit(self) -> HrResult<()>
    where
        Self: Sized;
}

/// Storage abstraction for personnel records.
pub trait PersonnelRepository: Send + Sync {
    /// Stores a new department.
    fn insert_department(&self, department: Department) -> HrResult<Department>;

    /// Looks up a department.
    fn department(&self, id: DepartmentId) -> HrResult<Option<Department>>;

    /// Stores a new employee, rejecting a duplicate `employee_id`.
    ///
    /// Records the first history entry.
    fn insert_employee(&self, employee: Employee) -> HrResult<Employee>;

    /// Replaces an existing employee and records a history entry.
    fn update_employee(&self, employee: Employee) -> HrResult<()>;

    /// Lists an employee's history, newest first.
    fn history_of(&self, employee: EmployeeRef) -> HrResult<Vec<EmployeeHistory>>;

    /// Looks up an employee.
    fn employee(&self, id: EmployeeRef) -> HrResult<Option<Employee>>;

    /// Stores a language skill, rejecting a second row for the same language.
    fn insert_language(&self, skill: LanguageSkill) -> HrResult<LanguageSkill>;

    /// Lists an employee's language skills.
    fn languages_of(&self, employee: EmployeeRef) -> HrResult<Vec<LanguageSkill>>;

    /// Stores a new academic record.
    fn insert_academic(&self, record: AcademicRecord) -> HrResult<AcademicRecord>;

    /// Looks up an academic record.
    fn academic(&self, id: AcademicId) -> HrResult<Option<AcademicRecord>>;

    /// Stores a leave application.
    fn insert_leave_application(&self, application: LeaveApplication)
    -> HrResult<LeaveApplication>;

    /// Looks up a leave application.
    fn leave_application(&self, id: LeaveApplicationId) -> HrResult<Option<LeaveApplication>>;

    /// Stores an attendance row.
    fn insert_attendance(&self, attendance: Attendance) -> HrResult<Attendance>;

    /// Lists an employee's attendance, oldest first.
    fn attendance_of(&self, employee: EmployeeRef) -> HrResult<Vec<Attendance>>;

    /// Stores a new transfer proposal.
    fn insert_proposal(&self, proposal: TransferProposal) -> HrResult<TransferProposal>;

    /// Looks up a transfer proposal.
    fn proposal(&self, id: ProposalId) -> HrResult<Option<TransferProposal>>;

    /// Moves a proposal from state `from` to state `to` as one write.
    ///
    /// With `relocate`, the employee is moved to the proposed company and
    /// department in the same write and a history entry is recorded.
    /// Fails with [`HrError::StaleRecord`](crate::error::HrError::StaleRecord)
    /// when the stored state is no longer `from`.
    fn transition_proposal(
        &self,
        id: ProposalId,
        from: TransferState,
        to: TransferState,
        relocate: bool,
    ) -> HrResult<TransferProposal>;

    /// Appends a remark to the stored proposal, leaving its state untouched.
    fn append_remark(&self, id: ProposalId, remark: TransferRemark) -> HrResult<TransferProposal>;

    /// Stores a payment detail.
    fn insert_payment_detail(&self, detail: PaymentDetail) -> HrResult<PaymentDetail>;

    /// Lists an employee's payment details.
    fn payment_details_of(&self, employee: EmployeeRef) -> HrResult<Vec<PaymentDetail>>;

    /// Stores a responsibility.
    fn insert_responsibility(&self, responsibility: Responsibility) -> HrResult<Responsibility>;

    /// Lists an employee's responsibilities.
    fn responsibilities_of(&self, employee: EmployeeRef) -> HrResult<Vec<Responsibility>>;

    /// Stores a skill.
    fn insert_skill(&self, skill: Skill) -> HrResult<Skill>;

    /// Lists an employee's skills.
    fn skills_of(&self, employee: EmployeeRef) -> HrResult<Vec<Skill>>;

    /// Stores a team membership.
    fn insert_team(&self, team: Team) -> HrResult<Team>;

    /// Lists an employee's teams.
    fn teams_of(&self, employee: EmployeeRef) -> HrResult<Vec<Team>>;
}
