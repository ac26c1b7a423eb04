//! Configuration types for the HR payroll module.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{EmployeeType, LeaveType};

fn default_interval() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_allowance() -> u32 {
    2
}

/// How generated employee IDs look.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeIdSettings {
    /// Prefix put before the counter (e.g., "EMP").
    pub prefix: String,
    /// Minimum number of digits; the counter is zero-padded to this width.
    pub padding: usize,
    /// First number handed out.
    #[serde(default = "EmployeeIdSettings::default_start")]
    pub start: u64,
}

impl EmployeeIdSettings {
    fn default_start() -> u64 {
        1
    }
}

impl Default for EmployeeIdSettings {
    fn default() -> Self {
        Self {
            prefix: "EMP".to_string(),
            padding: 4,
            start: Self::default_start(),
        }
    }
}

/// Values given to new departments when the request omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DepartmentDefaults {
    /// Early departures tolerated per month.
    #[serde(default = "default_allowance")]
    pub allowed_early_departures: u32,
    /// Late comings tolerated per month.
    #[serde(default = "default_allowance")]
    pub allowed_late_comings: u32,
}

impl Default for DepartmentDefaults {
    fn default() -> Self {
        Self {
            allowed_early_departures: default_allowance(),
            allowed_late_comings: default_allowance(),
        }
    }
}

/// Contents of `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Company timezone, in minutes east of UTC. Decides what "today" is.
    #[serde(default)]
    pub timezone_offset_minutes: i32,
    /// Months per period when "create periods" is called without an interval.
    #[serde(default = "default_interval")]
    pub default_period_interval_months: u32,
    /// Employee ID generation.
    #[serde(default)]
    pub employee_id: EmployeeIdSettings,
    /// Department defaults.
    #[serde(default)]
    pub department_defaults: DepartmentDefaults,
    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone_offset_minutes: 0,
            default_period_interval_months: default_interval(),
            employee_id: EmployeeIdSettings::default(),
            department_defaults: DepartmentDefaults::default(),
            log_level: default_log_level(),
        }
    }
}

/// Leave days allowed per payroll year, by leave type.
///
/// Missing entries count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LeaveAllowances {
    /// Casual leave.
    #[serde(default)]
    pub casual: Option<i64>,
    /// Sick leave.
    #[serde(default)]
    pub sick: Option<i64>,
    /// Earned leave.
    #[serde(default)]
    pub earned: Option<i64>,
    /// Study leave.
    #[serde(default)]
    pub study: Option<i64>,
    /// Paternity leave.
    #[serde(default)]
    pub paternity: Option<i64>,
    /// Annual leave.
    #[serde(default)]
    pub annual: Option<i64>,
}

impl LeaveAllowances {
    /// Returns the allowance for one leave type.
    pub fn allowed(&self, leave_type: LeaveType) -> i64 {
        let value = match leave_type {
            LeaveType::Casual => self.casual,
            LeaveType::Sick => self.sick,
            LeaveType::Earned => self.earned,
            LeaveType::Study => self.study,
            LeaveType::Paternity => self.paternity,
            LeaveType::Annual => self.annual,
        };
        value.unwrap_or(0)
    }
}

/// Contents of `leave.yaml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LeaveConfig {
    /// Allowances for employees on probation.
    #[serde(default)]
    pub probation: LeaveAllowances,
    /// Allowances for confirmed employees.
    #[serde(default)]
    pub confirmed: LeaveAllowances,
}

impl LeaveConfig {
    /// Returns the allowance for an employee type and leave type.
    pub fn allowed(&self, employee_type: EmployeeType, leave_type: LeaveType) -> i64 {
        match employee_type {
            EmployeeType::Probation => self.probation.allowed(leave_type),
            EmployeeType::Confirmed => self.confirmed.allowed(leave_type),
        }
    }
}

/// Complete HR configuration.
///
/// This struct aggregates all configuration loaded from the YAML files in a
/// configuration directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HrConfig {
    settings: Settings,
    leave: LeaveConfig,
}

impl HrConfig {
    /// Creates a new HrConfig from its component parts.
    pub fn new(settings: Settings, leave: LeaveConfig) -> Self {
        Self { settings, leave }
    }

    /// Returns the general settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the leave allowances.
    pub fn leave(&self) -> &LeaveConfig {
        &self.leave
    }
}
