//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, its classification enums,
//! the derived [`Age`], and the language and academic sub-records.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{AcademicId, CompanyId, DepartmentId, EmployeeRef};

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeState {
    /// Currently employed.
    #[default]
    Current,
    /// Retired.
    Retired,
    /// Employment ended.
    Closed,
}

/// Contract type, which selects the leave allowances that apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// On probation.
    Probation,
    /// Confirmed in post.
    #[default]
    Confirmed,
}

/// Recorded sex of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male.
    #[default]
    Male,
    /// Female.
    Female,
}

/// Marital status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Single.
    #[default]
    Single,
    /// Married. Requires a wedding date and marriage licence.
    Married,
}

/// Represents an employee of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Record id.
    pub id: EmployeeRef,
    /// Unique human-readable identifier (e.g. "EMP0042").
    pub employee_id: String,
    /// The employing company.
    pub company: CompanyId,
    /// The department, which must belong to `company`.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    /// Employment status.
    pub state: EmployeeState,
    /// Contract type.
    pub employee_type: EmployeeType,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Middle name.
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Line manager, never the employee itself.
    #[serde(default)]
    pub manager: Option<EmployeeRef>,
    /// Recorded sex.
    pub sex: Sex,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Place of birth.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Marital status.
    pub marital_status: MaritalStatus,
    /// Wedding date, set when married.
    #[serde(default)]
    pub wedding_date: Option<NaiveDate>,
    /// Marriage licence number, set when married.
    #[serde(default)]
    pub marriage_license: Option<String>,
    /// Nationality (country code).
    #[serde(default)]
    pub nationality: Option<String>,
    /// Driving licence number.
    #[serde(default)]
    pub driving_license: Option<String>,
    /// Required when `driving_license` is set.
    #[serde(default)]
    pub driving_license_validity: Option<NaiveDate>,
    /// Passport number.
    #[serde(default)]
    pub passport_number: Option<String>,
    /// Required when `passport_number` is set.
    #[serde(default)]
    pub passport_validity: Option<NaiveDate>,
}

impl Employee {
    /// Returns the employee's name parts joined by spaces, or the employee ID when unnamed.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            self.employee_id.clone()
        } else {
            parts.join(" ")
        }
    }

    /// Returns the employee's age on `today`, or `None` without a date of birth.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_payroll::models::Age;
    /// use chrono::NaiveDate;
    ///
    /// let age = Age::between(
    ///     NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
    /// );
    /// assert_eq!(age.to_string(), "34y 2m 5d");
    /// ```
    pub fn age(&self, today: NaiveDate) -> Option<Age> {
        self.date_of_birth.map(|dob| Age::between(dob, today))
    }

    /// Returns true if the employee is on probation.
    pub fn is_probation(&self) -> bool {
        self.employee_type == EmployeeType::Probation
    }
}

/// Input for hiring an employee. Omitted values take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Generated from the sequence when absent.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Department, which must belong to the scope's company.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    /// Defaults to current.
    #[serde(default)]
    pub state: Option<EmployeeState>,
    /// Defaults to confirmed.
    #[serde(default)]
    pub employee_type: Option<EmployeeType>,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Middle name.
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Line manager.
    #[serde(default)]
    pub manager: Option<EmployeeRef>,
    /// Defaults to male.
    #[serde(default)]
    pub sex: Option<Sex>,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Place of birth.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Defaults to single.
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    /// Wedding date.
    #[serde(default)]
    pub wedding_date: Option<NaiveDate>,
    /// Marriage licence number.
    #[serde(default)]
    pub marriage_license: Option<String>,
    /// Nationality.
    #[serde(default)]
    pub nationality: Option<String>,
    /// Driving licence number.
    #[serde(default)]
    pub driving_license: Option<String>,
    /// Driving licence validity.
    #[serde(default)]
    pub driving_license_validity: Option<NaiveDate>,
    /// Passport number.
    #[serde(default)]
    pub passport_number: Option<String>,
    /// Passport validity.
    #[serde(default)]
    pub passport_validity: Option<NaiveDate>,
}

/// Requested edits to an employee. Omitted fields keep their stored value.
///
/// The company is not editable here; it only changes through an approved
/// transfer proposal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeChanges {
    /// New department.
    #[serde(default)]
    pub department: Option<DepartmentId>,
    /// New employment status.
    #[serde(default)]
    pub state: Option<EmployeeState>,
    /// New contract type.
    #[serde(default)]
    pub employee_type: Option<EmployeeType>,
    /// New first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// New middle name.
    #[serde(default)]
    pub middle_name: Option<String>,
    /// New last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// New manager.
    #[serde(default)]
    pub manager: Option<EmployeeRef>,
    /// New sex.
    #[serde(default)]
    pub sex: Option<Sex>,
    /// New date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// New place of birth.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// New marital status.
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    /// New wedding date.
    #[serde(default)]
    pub wedding_date: Option<NaiveDate>,
    /// New marriage licence.
    #[serde(default)]
    pub marriage_license: Option<String>,
    /// New nationality.
    #[serde(default)]
    pub nationality: Option<String>,
    /// New driving licence.
    #[serde(default)]
    pub driving_license: Option<String>,
    /// New driving licence validity.
    #[serde(default)]
    pub driving_license_validity: Option<NaiveDate>,
    /// New passport number.
    #[serde(default)]
    pub passport_number: Option<String>,
    /// New passport validity.
    #[serde(default)]
    pub passport_validity: Option<NaiveDate>,
}

impl EmployeeChanges {
    /// Writes every provided field onto `employee`.
    pub fn apply_to(self, employee: &mut Employee) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }
        fn set_opt<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        set_opt(&mut employee.department, self.department);
        set(&mut employee.state, self.state);
        set(&mut employee.employee_type, self.employee_type);
        set_opt(&mut employee.first_name, self.first_name);
        set_opt(&mut employee.middle_name, self.middle_name);
        set_opt(&mut employee.last_name, self.last_name);
        set_opt(&mut employee.manager, self.manager);
        set(&mut employee.sex, self.sex);
        set_opt(&mut employee.date_of_birth, self.date_of_birth);
        set_opt(&mut employee.place_of_birth, self.place_of_birth);
        set(&mut employee.marital_status, self.marital_status);
        set_opt(&mut employee.wedding_date, self.wedding_date);
        set_opt(&mut employee.marriage_license, self.marriage_license);
        set_opt(&mut employee.nationality, self.nationality);
        set_opt(&mut employee.driving_license, self.driving_license);
        set_opt(&mut employee.driving_license_validity, self.driving_license_validity);
        set_opt(&mut employee.passport_number, self.passport_number);
        set_opt(&mut employee.passport_validity, self.passport_validity);
    }
}

/// Calendar difference between a date of birth and a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    /// Whole years.
    pub years: u32,
    /// Whole months after the years.
    pub months: u32,
    /// Remaining days.
    pub days: u32,
}

impl Age {
    /// Computes the years / months / days between `birth` and `today`.
    ///
    /// Month arithmetic clamps to the end of shorter months, so someone born
    /// on 31 January is one month old on 29 February of a leap year.
    /// A `today` before `birth` yields zero.
    pub fn between(birth: NaiveDate, today: NaiveDate) -> Self {
        if today <= birth {
            return Self {
                years: 0,
                months: 0,
                days: 0,
            };
        }

        let mut total_months = (today.year() - birth.year()) * 12 + today.month() as i32
            - birth.month() as i32;
        let mut anchor = add_months(birth, total_months);
        if anchor > today {
            total_months -= 1;
            anchor = add_months(birth, total_months);
        }
        let days = (today - anchor).num_days();

        Self {
            years: (total_months / 12) as u32,
            months: (total_months % 12) as u32,
            days: days as u32,
        }
    }
}

fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    date.checked_add_months(Months::new(months.max(0) as u32))
        .unwrap_or(NaiveDate::MAX)
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m {}d", self.years, self.months, self.days)
    }
}

/// A language an employee knows. Unique per (employee, language).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    /// The employee.
    pub employee: EmployeeRef,
    /// Language code (e.g. "en", "fr").
    pub language: String,
    /// Native language.
    #[serde(default)]
    pub mother_tongue: bool,
    /// Can read.
    #[serde(default)]
    pub can_read: bool,
    /// Can write.
    #[serde(default)]
    pub can_write: bool,
    /// Can speak.
    #[serde(default)]
    pub can_speak: bool,
}

/// A qualification obtained by an employee. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicRecord {
    /// Record id.
    pub id: AcademicId,
    /// The employee.
    pub employee: EmployeeRef,
    /// Awarding institution.
    pub institution: String,
    /// Major subject.
    pub major: String,
    /// Level (e.g. "bachelor").
    #[serde(default)]
    pub level: Option<String>,
    /// Graduation year.
    pub year: i32,
    /// Final percentage.
    pub percentage: Decimal,
}

/// Input for recording a qualification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAcademicRecord {
    /// The employee.
    pub employee: EmployeeRef,
    /// Awarding institution.
    pub institution: String,
    /// Major subject.
    pub major: String,
    /// Level.
    #[serde(default)]
    pub level: Option<String>,
    /// Graduation year.
    pub year: i32,
    /// Final percentage.
    pub percentage: Decimal,
}

/// Requested changes to an academic record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcademicChanges {
    /// New institution.
    #[serde(default)]
    pub institution: Option<String>,
    /// New major.
    #[serde(default)]
    pub major: Option<String>,
    /// New level.
    #[serde(default)]
    pub level: Option<String>,
    /// New year.
    #[serde(default)]
    pub year: Option<i32>,
    /// New percentage.
    #[serde(default)]
    pub percentage: Option<Decimal>,
}
