//! Leave applications, attendance rows and leave balances.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{AttendanceId, EmployeeRef, LeaveApplicationId, YearId};

/// The kinds of leave tracked against a payroll year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Casual leave (CL).
    Casual,
    /// Sick leave (SL).
    Sick,
    /// Earned leave (EL).
    Earned,
    /// Study leave (DL).
    Study,
    /// Paternity leave (PL).
    Paternity,
    /// Annual leave (AL).
    Annual,
}

impl LeaveType {
    /// Every leave type, in display order.
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Casual,
        LeaveType::Sick,
        LeaveType::Earned,
        LeaveType::Study,
        LeaveType::Paternity,
        LeaveType::Annual,
    ];

    /// Returns the snake_case label.
    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Casual => "casual",
            LeaveType::Sick => "sick",
            LeaveType::Earned => "earned",
            LeaveType::Study => "study",
            LeaveType::Paternity => "paternity",
            LeaveType::Annual => "annual",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A request for leave by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// Record id.
    pub id: LeaveApplicationId,
    /// The applicant.
    pub employee: EmployeeRef,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave.
    pub from_date: NaiveDate,
    /// Last day of leave.
    pub to_date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Input for a leave application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLeaveApplication {
    /// The applicant.
    pub employee: EmployeeRef,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave.
    pub from_date: NaiveDate,
    /// Last day of leave.
    pub to_date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

/// One day of attendance for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// Record id.
    pub id: AttendanceId,
    /// The employee.
    pub employee: EmployeeRef,
    /// The attendance day.
    pub date: NaiveDate,
    /// Whether the employee was on leave that day.
    pub on_leave: bool,
    /// The leave application covering the day.
    #[serde(default)]
    pub leave_application: Option<LeaveApplicationId>,
}

/// Input for recording attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendance {
    /// The employee.
    pub employee: EmployeeRef,
    /// The attendance day.
    pub date: NaiveDate,
    /// Whether the employee was on leave that day.
    #[serde(default)]
    pub on_leave: bool,
    /// The leave application covering the day.
    #[serde(default)]
    pub leave_application: Option<LeaveApplicationId>,
}

/// Remaining leave per type in the current payroll year.
///
/// Values are `allowed - taken` and go negative when an employee overdraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalances {
    /// The payroll year the balances were computed against.
    pub payroll_year: YearId,
    /// Available casual leaves.
    pub available_cl: i64,
    /// Available sick leaves.
    pub available_sl: i64,
    /// Available earned leaves.
    pub available_el: i64,
    /// Available study leaves.
    pub available_dl: i64,
    /// Available paternity leaves.
    pub available_pl: i64,
    /// Available annual leaves.
    pub available_al: i64,
}

impl LeaveBalances {
    /// All counters at zero.
    pub fn new(payroll_year: YearId) -> Self {
        Self {
            payroll_year,
            available_cl: 0,
            available_sl: 0,
            available_el: 0,
            available_dl: 0,
            available_pl: 0,
            available_al: 0,
        }
    }

    /// Returns the balance for one leave type.
    pub fn get(&self, leave_type: LeaveType) -> i64 {
        match leave_type {
            LeaveType::Casual => self.available_cl,
            LeaveType::Sick => self.available_sl,
            LeaveType::Earned => self.available_el,
            LeaveType::Study => self.available_dl,
            LeaveType::Paternity => self.available_pl,
            LeaveType::Annual => self.available_al,
        }
    }

    /// Sets the balance for one leave type.
    pub fn set(&mut self, leave_type: LeaveType, value: i64) {
        let slot = match leave_type {
            LeaveType::Casual => &mut self.available_cl,
            LeaveType::Sick => &mut self.available_sl,
            LeaveType::Earned => &mut self.available_el,
            LeaveType::Study => &mut self.available_dl,
            LeaveType::Paternity => &mut self.available_pl,
            LeaveType::Annual => &mut self.available_al,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_type_labels_match_serde() {
        for leave_type in LeaveType::ALL {
            let json = serde_json::to_string(&leave_type).unwrap();
            assert_eq!(json, format!("\"{}\"", leave_type.label()));
        }
    }

    #[test]
    fn test_balances_get_set() {
        let mut balances = LeaveBalances::new(YearId::new());
        balances.set(LeaveType::Study, 3);
        balances.set(LeaveType::Annual, -1);
        assert_eq!(balances.get(LeaveType::Study), 3);
        assert_eq!(balances.available_dl, 3);
        assert_eq!(balances.get(LeaveType::Annual), -1);
        assert_eq!(balances.get(LeaveType::Casual), 0);
    }
}
