//! Core data models for the HR payroll module.
//!
//! This module contains the payroll calendar records, the personnel records
//! they serve, and the typed ids that link them.

mod calendar;
mod department;
mod employee;
mod ids;
mod leave;
mod profile;
mod scope;
mod transfer;

pub use calendar::{CalendarState, DateRange, PayrollHoliday, PayrollPeriod, PayrollYear};
pub use department::{Department, NewDepartment};
pub use employee::{
    AcademicChanges, AcademicRecord, Age, Employee, EmployeeChanges, EmployeeState, EmployeeType,
    LanguageSkill, MaritalStatus, NewAcademicRecord, NewEmployee, Sex,
};
pub use ids::{
    AcademicId, AttendanceId, CompanyId, DepartmentId, EmployeeRef, HolidayId, LeaveApplicationId,
    PaymentDetailId, PeriodId, ProposalId, YearId,
};
pub use leave::{
    Attendance, LeaveApplication, LeaveBalances, LeaveType, NewAttendance, NewLeaveApplication,
};
pub use profile::{
    EmployeeChange, EmployeeHistory, NewPaymentDetail, PaymentDetail, PaymentMode, Responsibility,
    Skill, Team,
};
pub use scope::Scope;
pub use transfer::{
    NewTransferProposal, NewTransferRemark, RemarkKind, TransferProposal, TransferRemark,
    TransferState,
};
