//! Configuration loading and management for the HR payroll module.
//!
//! This module loads the general settings (timezone, period interval,
//! employee ID format, department defaults) and the leave allowances from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hr_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hr").unwrap();
//! println!("Timezone offset: {} min", config.settings().timezone_offset_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DepartmentDefaults, EmployeeIdSettings, HrConfig, LeaveAllowances, LeaveConfig, Settings,
};
