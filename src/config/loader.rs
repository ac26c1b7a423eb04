//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading HR
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{HrError, HrResult};
use crate::models::{EmployeeType, LeaveType};

use super::types::{HrConfig, LeaveConfig, Settings};

/// Loads and provides access to HR configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hr/
/// ├── settings.yaml   # Timezone, period interval, ID format, defaults
/// └── leave.yaml      # Leave allowances per employee type
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_payroll::config::ConfigLoader;
/// use hr_payroll::models::{EmployeeType, LeaveType};
///
/// let loader = ConfigLoader::load("./config/hr").unwrap();
/// let casual = loader.allowed_leave(EmployeeType::Probation, LeaveType::Casual);
/// println!("Probation casual leave: {}", casual);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: HrConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/hr")?;
    /// # Ok::<(), hr_payroll::error::HrError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> HrResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;
        let leave = Self::load_yaml::<LeaveConfig>(&path.join("leave.yaml"))?;

        if settings.default_period_interval_months == 0 {
            return Err(HrError::ConfigParseError {
                path: path.join("settings.yaml").display().to_string(),
                message: "default_period_interval_months must be at least 1".to_string(),
            });
        }

        Ok(Self {
            config: HrConfig::new(settings, leave),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: HrConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> HrResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| HrError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| HrError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &HrConfig {
        &self.config
    }

    /// Returns the general settings.
    pub fn settings(&self) -> &Settings {
        self.config.settings()
    }

    /// Returns the leave allowances.
    pub fn leave(&self) -> &LeaveConfig {
        self.config.leave()
    }

    /// Gets the yearly allowance for a leave type. Unconfigured values are 0.
    pub fn allowed_leave(&self, employee_type: EmployeeType, leave_type: LeaveType) -> i64 {
        self.config.leave().allowed(employee_type, leave_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/hr"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hr-payroll-{}-{}", name, uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().default_period_interval_months, 1);
        assert_eq!(loader.settings().employee_id.prefix, "EMP");
        assert_eq!(loader.settings().employee_id.padding, 4);
    }

    #[test]
    fn test_leave_allowances_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(
            loader.allowed_leave(EmployeeType::Probation, LeaveType::Casual),
            1
        );
        assert_eq!(
            loader.allowed_leave(EmployeeType::Confirmed, LeaveType::Annual),
            20
        );
        assert_eq!(
            loader.allowed_leave(EmployeeType::Probation, LeaveType::Paternity),
            0
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(HrError::ConfigNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("settings.yaml"), "timezone_offset_minutes: [oops\n").unwrap();
        fs::write(dir.join("leave.yaml"), "{}\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(HrError::ConfigParseError { path, .. }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_zero_default_interval_rejected() {
        let dir = scratch_dir("zero-interval");
        fs::write(dir.join("settings.yaml"), "default_period_interval_months: 0\n").unwrap();
        fs::write(dir.join("leave.yaml"), "{}\n").unwrap();

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(HrError::ConfigParseError { .. })
        ));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_default_loader_has_no_allowances() {
        let loader = ConfigLoader::default();
        for leave_type in LeaveType::ALL {
            assert_eq!(loader.allowed_leave(EmployeeType::Confirmed, leave_type), 0);
        }
    }
}
