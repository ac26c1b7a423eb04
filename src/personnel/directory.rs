//! Departments, employees and the records hanging off them.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::sequence::EmployeeSequence;
use crate::config::DepartmentDefaults;
use crate::error::{HrError, HrResult};
use crate::models::{
    AcademicChanges, AcademicId, AcademicRecord, Age, Attendance, AttendanceId, CompanyId,
    Department, DepartmentId, Employee, EmployeeChanges, EmployeeHistory, EmployeeRef,
    LanguageSkill, LeaveApplication, LeaveApplicationId, MaritalStatus, NewAcademicRecord,
    NewAttendance, NewDepartment, NewEmployee, NewLeaveApplication, NewPaymentDetail,
    PaymentDetail, Responsibility, Scope, Skill, Team,
};
use crate::store::PersonnelRepository;

/// Entry point for personnel record keeping.
pub struct PersonnelDirectory<R> {
    store: Arc<R>,
    sequence: Arc<dyn EmployeeSequence>,
    department_defaults: DepartmentDefaults,
}

impl<R: PersonnelRepository> PersonnelDirectory<R> {
    /// Creates a directory over `store`, issuing employee IDs from `sequence`.
    pub fn new(
        store: Arc<R>,
        sequence: Arc<dyn EmployeeSequence>,
        department_defaults: DepartmentDefaults,
    ) -> Self {
        Self {
            store,
            sequence,
            department_defaults,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<R> {
        &self.store
    }

    /// Creates a department, filling omitted values from the configured defaults.
    ///
    /// # Errors
    ///
    /// - [`HrError::NotFound`] when the parent does not exist
    /// - [`HrError::InvalidRecord`] when the parent belongs to another company
    pub fn create_department(&self, draft: NewDepartment) -> HrResult<Department> {
        if let Some(parent_id) = draft.parent {
            let parent = self.department(parent_id)?;
            if parent.company != draft.company {
                return Err(HrError::invalid(
                    "department",
                    "parent",
                    format!("'{}' belongs to another company", parent.name),
                ));
            }
        }

        let department = Department {
            id: DepartmentId::new(),
            name: draft.name,
            company: draft.company,
            active: draft.active.unwrap_or(true),
            parent: draft.parent,
            early_departure_time: draft.early_departure_time,
            allowed_early_departures: draft
                .allowed_early_departures
                .unwrap_or(self.department_defaults.allowed_early_departures),
            late_coming_time: draft.late_coming_time,
            allowed_late_comings: draft
                .allowed_late_comings
                .unwrap_or(self.department_defaults.allowed_late_comings),
        };
        let department = self.store.insert_department(department)?;
        debug!(department_id = %department.id, company = %department.company, "Department created");
        Ok(department)
    }

    /// Looks up a department.
    pub fn department(&self, id: DepartmentId) -> HrResult<Department> {
        self.store
            .department(id)?
            .ok_or_else(|| HrError::not_found("department", id))
    }

    /// Looks up a department and checks that it belongs to `company`.
    ///
    /// `entity` names the record that refers to the department in the error.
    ///
    /// # Errors
    ///
    /// - [`HrError::NotFound`] for an unknown department
    /// - [`HrError::InvalidRecord`] when the department is in another company
    pub fn ensure_department(
        &self,
        entity: &'static str,
        company: CompanyId,
        id: DepartmentId,
    ) -> HrResult<Department> {
        let department = self.department(id)?;
        if department.company != company {
            return Err(HrError::invalid(
                entity,
                "department",
                format!("'{}' belongs to another company", department.name),
            ));
        }
        Ok(department)
    }

    /// Hires an employee into the scope's company.
    ///
    /// The department defaults to the scope's department. A missing or blank
    /// `employee_id` is taken from the sequence.
    ///
    /// # Errors
    ///
    /// - [`HrError::Duplicate`] when the employee ID is already taken
    /// - [`HrError::InvalidRecord`] when the department is in another company,
    ///   or a marital, passport or licence field is missing its companion
    /// - [`HrError::NotFound`] for an unknown department or manager
    pub fn hire(&self, scope: &Scope, draft: NewEmployee) -> HrResult<Employee> {
        let employee_id = match draft.employee_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => self.sequence.next_id(),
        };

        let employee = Employee {
            id: EmployeeRef::new(),
            employee_id,
            company: scope.company,
            department: draft.department.or(scope.department),
            state: draft.state.unwrap_or_default(),
            employee_type: draft.employee_type.unwrap_or_default(),
            first_name: draft.first_name,
            middle_name: draft.middle_name,
            last_name: draft.last_name,
            manager: draft.manager,
            sex: draft.sex.unwrap_or_default(),
            date_of_birth: draft.date_of_birth,
            place_of_birth: draft.place_of_birth,
            marital_status: draft.marital_status.unwrap_or_default(),
            wedding_date: draft.wedding_date,
            marriage_license: draft.marriage_license,
            nationality: draft.nationality,
            driving_license: draft.driving_license,
            driving_license_validity: draft.driving_license_validity,
            passport_number: draft.passport_number,
            passport_validity: draft.passport_validity,
        };
        self.validate_employee(&employee)?;

        let employee = self.store.insert_employee(employee)?;
        info!(
            employee = %employee.id,
            employee_id = %employee.employee_id,
            company = %employee.company,
            "Employee hired"
        );
        Ok(employee)
    }

    /// Duplicates an employee under a fresh record id and employee ID.
    pub fn copy_employee(&self, id: EmployeeRef) -> HrResult<Employee> {
        let source = self.employee(id)?;
        let copy = Employee {
            id: EmployeeRef::new(),
            employee_id: self.sequence.next_id(),
            ..source
        };
        let copy = self.store.insert_employee(copy)?;
        debug!(source = %id, copy = %copy.id, "Employee copied");
        Ok(copy)
    }

    /// Looks up an employee.
    pub fn employee(&self, id: EmployeeRef) -> HrResult<Employee> {
        self.store
            .employee(id)?
            .ok_or_else(|| HrError::not_found("employee", id))
    }

    /// Returns the employee's age on `today`, or `None` without a date of birth.
    pub fn age(&self, id: EmployeeRef, today: NaiveDate) -> HrResult<Option<Age>> {
        Ok(self.employee(id)?.age(today))
    }

    /// Sets or clears the employee's manager.
    pub fn assign_manager(
        &self,
        id: EmployeeRef,
        manager: Option<EmployeeRef>,
    ) -> HrResult<Employee> {
        let mut employee = self.employee(id)?;
        employee.manager = manager;
        self.validate_employee(&employee)?;
        self.store.update_employee(employee.clone())?;
        Ok(employee)
    }

    /// Edits an employee and records the change in its history.
    ///
    /// The result is validated like a new hire.
    pub fn update_employee(&self, id: EmployeeRef, changes: EmployeeChanges) -> HrResult<Employee> {
        let mut employee = self.employee(id)?;
        changes.apply_to(&mut employee);
        self.validate_employee(&employee)?;
        self.store.update_employee(employee.clone())?;
        info!(employee = %id, employee_id = %employee.employee_id, "Employee updated");
        Ok(employee)
    }

    /// Lists an employee's recorded changes, newest first.
    pub fn history(&self, id: EmployeeRef) -> HrResult<Vec<EmployeeHistory>> {
        self.employee(id)?;
        self.store.history_of(id)
    }

    /// Records how an employee is paid.
    pub fn add_payment_detail(
        &self,
        id: EmployeeRef,
        draft: NewPaymentDetail,
    ) -> HrResult<PaymentDetail> {
        self.employee(id)?;
        let detail = self.store.insert_payment_detail(draft.into_detail(id))?;
        debug!(employee = %id, payment_detail = %detail.id, mode = ?detail.payment_mode, "Payment detail added");
        Ok(detail)
    }

    /// Lists an employee's payment details.
    pub fn payment_details(&self, id: EmployeeRef) -> HrResult<Vec<PaymentDetail>> {
        self.employee(id)?;
        self.store.payment_details_of(id)
    }

    /// Records a responsibility.
    pub fn add_responsibility(&self, responsibility: Responsibility) -> HrResult<Responsibility> {
        self.employee(responsibility.employee)?;
        require_name("employee responsibility", &responsibility.name)?;
        self.store.insert_responsibility(responsibility)
    }

    /// Lists an employee's responsibilities.
    pub fn responsibilities(&self, id: EmployeeRef) -> HrResult<Vec<Responsibility>> {
        self.employee(id)?;
        self.store.responsibilities_of(id)
    }

    /// Records a skill.
    pub fn add_skill(&self, skill: Skill) -> HrResult<Skill> {
        self.employee(skill.employee)?;
        require_name("employee skill", &skill.name)?;
        self.store.insert_skill(skill)
    }

    /// Lists an employee's skills.
    pub fn skills(&self, id: EmployeeRef) -> HrResult<Vec<Skill>> {
        self.employee(id)?;
        self.store.skills_of(id)
    }

    /// Records a team membership.
    pub fn add_team(&self, team: Team) -> HrResult<Team> {
        self.employee(team.employee)?;
        require_name("employee team", &team.name)?;
        self.store.insert_team(team)
    }

    /// Lists an employee's teams.
    pub fn teams(&self, id: EmployeeRef) -> HrResult<Vec<Team>> {
        self.employee(id)?;
        self.store.teams_of(id)
    }

    /// Records a language skill. Each language may appear once per employee.
    pub fn add_language(&self, skill: LanguageSkill) -> HrResult<LanguageSkill> {
        self.employee(skill.employee)?;
        if skill.language.trim().is_empty() {
            return Err(HrError::invalid("employee language", "language", "is required"));
        }
        self.store.insert_language(skill)
    }

    /// Lists an employee's language skills.
    pub fn languages(&self, id: EmployeeRef) -> HrResult<Vec<LanguageSkill>> {
        self.employee(id)?;
        self.store.languages_of(id)
    }

    /// Records a qualification.
    pub fn add_academic(&self, draft: NewAcademicRecord) -> HrResult<AcademicRecord> {
        self.employee(draft.employee)?;
        let record = AcademicRecord {
            id: AcademicId::new(),
            employee: draft.employee,
            institution: draft.institution,
            major: draft.major,
            level: draft.level,
            year: draft.year,
            percentage: draft.percentage,
        };
        self.store.insert_academic(record)
    }

    /// Academic records are immutable: this returns the stored record unchanged.
    pub fn update_academic(
        &self,
        id: AcademicId,
        changes: AcademicChanges,
    ) -> HrResult<AcademicRecord> {
        let record = self
            .store
            .academic(id)?
            .ok_or_else(|| HrError::not_found("academic record", id))?;
        debug!(academic_id = %id, ?changes, "Academic record update ignored");
        Ok(record)
    }

    /// Files a leave application.
    pub fn apply_leave(&self, draft: NewLeaveApplication) -> HrResult<LeaveApplication> {
        self.employee(draft.employee)?;
        if draft.from_date > draft.to_date {
            return Err(HrError::InvalidDateRange {
                name: format!("{} leave", draft.leave_type),
                start: draft.from_date,
                end: draft.to_date,
            });
        }
        let application = LeaveApplication {
            id: LeaveApplicationId::new(),
            employee: draft.employee,
            leave_type: draft.leave_type,
            from_date: draft.from_date,
            to_date: draft.to_date,
            reason: draft.reason,
        };
        self.store.insert_leave_application(application)
    }

    /// Records one day of attendance, optionally linked to a leave application
    /// of the same employee.
    pub fn record_attendance(&self, draft: NewAttendance) -> HrResult<Attendance> {
        self.employee(draft.employee)?;
        if let Some(application_id) = draft.leave_application {
            let application = self
                .store
                .leave_application(application_id)?
                .ok_or_else(|| HrError::not_found("leave application", application_id))?;
            if application.employee != draft.employee {
                return Err(HrError::invalid(
                    "attendance",
                    "leave_application",
                    "belongs to another employee",
                ));
            }
        }
        let attendance = Attendance {
            id: AttendanceId::new(),
            employee: draft.employee,
            date: draft.date,
            on_leave: draft.on_leave,
            leave_application: draft.leave_application,
        };
        self.store.insert_attendance(attendance)
    }

    fn validate_employee(&self, employee: &Employee) -> HrResult<()> {
        if let Some(department_id) = employee.department {
            self.ensure_department("employee", employee.company, department_id)?;
        }

        if let Some(manager) = employee.manager {
            if manager == employee.id {
                return Err(HrError::invalid(
                    "employee",
                    "manager",
                    "an employee can not manage themselves",
                ));
            }
            self.employee(manager)?;
        }

        if employee.marital_status == MaritalStatus::Married {
            if employee.wedding_date.is_none() {
                return Err(HrError::invalid("employee", "wedding_date", "required when married"));
            }
            if is_blank(&employee.marriage_license) {
                return Err(HrError::invalid(
                    "employee",
                    "marriage_license",
                    "required when married",
                ));
            }
        }

        if !is_blank(&employee.passport_number) && employee.passport_validity.is_none() {
            return Err(HrError::invalid(
                "employee",
                "passport_validity",
                "required with a passport number",
            ));
        }
        if !is_blank(&employee.driving_license) && employee.driving_license_validity.is_none() {
            return Err(HrError::invalid(
                "employee",
                "driving_license_validity",
                "required with a driving licence",
            ));
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn require_name(entity: &'static str, name: &str) -> HrResult<()> {
    if name.trim().is_empty() {
        return Err(HrError::invalid(entity, "name", "is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanyId, EmployeeType, LeaveType};
    use crate::personnel::PrefixedSequence;
    use crate::store::InMemoryPersonnelStore;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn directory() -> PersonnelDirectory<InMemoryPersonnelStore> {
        PersonnelDirectory::new(
            Arc::new(InMemoryPersonnelStore::new()),
            Arc::new(PrefixedSequence::new("EMP", 4, 1)),
            DepartmentDefaults::default(),
        )
    }

    fn new_department(company: CompanyId, name: &str) -> NewDepartment {
        NewDepartment {
            name: name.to_string(),
            company,
            parent: None,
            active: None,
            early_departure_time: None,
            allowed_early_departures: None,
            late_coming_time: None,
            allowed_late_comings: None,
        }
    }

    #[test]
    fn test_department_takes_defaults() {
        let dir = directory();
        let dept = dir
            .create_department(new_department(CompanyId::new(), "Finance"))
            .unwrap();
        assert!(dept.active);
        assert_eq!(dept.allowed_early_departures, 2);
        assert_eq!(dept.allowed_late_comings, 2);
    }

    #[test]
    fn test_department_parent_must_share_company() {
        let dir = directory();
        let parent = dir
            .create_department(new_department(CompanyId::new(), "Head office"))
            .unwrap();
        let mut draft = new_department(CompanyId::new(), "Branch");
        draft.parent = Some(parent.id);
        assert!(matches!(
            dir.create_department(draft),
            Err(HrError::InvalidRecord { .. })
        ));

        let mut draft = new_department(parent.company, "Accounts");
        draft.parent = Some(parent.id);
        assert_eq!(dir.create_department(draft).unwrap().parent, Some(parent.id));
    }

    #[test]
    fn test_hire_assigns_sequence_ids_and_defaults() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let first = dir.hire(&scope, NewEmployee::default()).unwrap();
        let second = dir.hire(&scope, NewEmployee::default()).unwrap();

        assert_eq!(first.employee_id, "EMP0001");
        assert_eq!(second.employee_id, "EMP0002");
        assert_eq!(first.employee_type, EmployeeType::Confirmed);
        assert_eq!(first.marital_status, MaritalStatus::Single);
    }

    #[test]
    fn test_hire_rejects_duplicate_employee_id() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let draft = NewEmployee {
            employee_id: Some("X-1".to_string()),
            ..NewEmployee::default()
        };
        dir.hire(&scope, draft.clone()).unwrap();
        assert!(matches!(
            dir.hire(&scope, draft),
            Err(HrError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_hire_rejects_department_of_other_company() {
        let dir = directory();
        let dept = dir
            .create_department(new_department(CompanyId::new(), "Ops"))
            .unwrap();
        let scope = Scope::company(CompanyId::new());
        let draft = NewEmployee {
            department: Some(dept.id),
            ..NewEmployee::default()
        };
        assert!(matches!(
            dir.hire(&scope, draft),
            Err(HrError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_married_employee_needs_wedding_details() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let draft = NewEmployee {
            marital_status: Some(MaritalStatus::Married),
            wedding_date: Some(date(2015, 5, 1)),
            ..NewEmployee::default()
        };
        match dir.hire(&scope, draft.clone()) {
            Err(HrError::InvalidRecord { field, .. }) => assert_eq!(field, "marriage_license"),
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }

        let draft = NewEmployee {
            marriage_license: Some("ML-77".to_string()),
            ..draft
        };
        assert!(dir.hire(&scope, draft).is_ok());
    }

    #[test]
    fn test_passport_needs_validity() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let draft = NewEmployee {
            passport_number: Some("P123".to_string()),
            ..NewEmployee::default()
        };
        assert!(matches!(
            dir.hire(&scope, draft),
            Err(HrError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_manager_can_not_be_self() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let employee = dir.hire(&scope, NewEmployee::default()).unwrap();
        assert!(matches!(
            dir.assign_manager(employee.id, Some(employee.id)),
            Err(HrError::InvalidRecord { .. })
        ));

        let boss = dir.hire(&scope, NewEmployee::default()).unwrap();
        let updated = dir.assign_manager(employee.id, Some(boss.id)).unwrap();
        assert_eq!(updated.manager, Some(boss.id));
    }

    #[test]
    fn test_copy_gets_new_employee_id() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let original = dir
            .hire(
                &scope,
                NewEmployee {
                    first_name: Some("Ada".to_string()),
                    ..NewEmployee::default()
                },
            )
            .unwrap();
        let copy = dir.copy_employee(original.id).unwrap();
        assert_ne!(copy.id, original.id);
        assert_ne!(copy.employee_id, original.employee_id);
        assert_eq!(copy.first_name, original.first_name);
    }

    #[test]
    fn test_age_of_employee() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let employee = dir
            .hire(
                &scope,
                NewEmployee {
                    date_of_birth: Some(date(1990, 1, 15)),
                    ..NewEmployee::default()
                },
            )
            .unwrap();
        let age = dir.age(employee.id, date(2024, 3, 20)).unwrap().unwrap();
        assert_eq!(age.to_string(), "34y 2m 5d");

        let unborn = dir.hire(&scope, NewEmployee::default()).unwrap();
        assert!(dir.age(unborn.id, date(2024, 3, 20)).unwrap().is_none());
    }

    #[test]
    fn test_language_is_unique_per_employee() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let employee = dir.hire(&scope, NewEmployee::default()).unwrap();
        let skill = LanguageSkill {
            employee: employee.id,
            language: "French".to_string(),
            mother_tongue: false,
            can_read: true,
            can_write: false,
            can_speak: true,
        };
        dir.add_language(skill.clone()).unwrap();
        assert!(matches!(
            dir.add_language(skill),
            Err(HrError::Duplicate { .. })
        ));
        assert_eq!(dir.languages(employee.id).unwrap().len(), 1);
    }

    #[test]
    fn test_academic_update_is_ignored() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let employee = dir.hire(&scope, NewEmployee::default()).unwrap();
        let record = dir
            .add_academic(NewAcademicRecord {
                employee: employee.id,
                institution: "State University".to_string(),
                major: "Economics".to_string(),
                level: None,
                year: 2012,
                percentage: Decimal::new(7850, 2),
            })
            .unwrap();

        let after = dir
            .update_academic(
                record.id,
                AcademicChanges {
                    major: Some("History".to_string()),
                    ..AcademicChanges::default()
                },
            )
            .unwrap();
        assert_eq!(after, record);
    }

    #[test]
    fn test_leave_dates_must_be_ordered() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let employee = dir.hire(&scope, NewEmployee::default()).unwrap();
        let result = dir.apply_leave(NewLeaveApplication {
            employee: employee.id,
            leave_type: LeaveType::Sick,
            from_date: date(2024, 3, 5),
            to_date: date(2024, 3, 1),
            reason: None,
        });
        assert!(matches!(result, Err(HrError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_attendance_link_must_match_employee() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let alice = dir.hire(&scope, NewEmployee::default()).unwrap();
        let bob = dir.hire(&scope, NewEmployee::default()).unwrap();
        let leave = dir
            .apply_leave(NewLeaveApplication {
                employee: alice.id,
                leave_type: LeaveType::Casual,
                from_date: date(2024, 3, 1),
                to_date: date(2024, 3, 1),
                reason: None,
            })
            .unwrap();

        let result = dir.record_attendance(NewAttendance {
            employee: bob.id,
            date: date(2024, 3, 1),
            on_leave: true,
            leave_application: Some(leave.id),
        });
        assert!(matches!(result, Err(HrError::InvalidRecord { .. })));
    }

    #[test]
    fn test_ensure_department_checks_company() {
        let dir = directory();
        let dept = dir
            .create_department(new_department(CompanyId::new(), "Payroll"))
            .unwrap();

        assert_eq!(
            dir.ensure_department("payroll year", dept.company, dept.id)
                .unwrap()
                .id,
            dept.id
        );
        assert!(matches!(
            dir.ensure_department("payroll year", CompanyId::new(), dept.id),
            Err(HrError::InvalidRecord { entity: "payroll year", .. })
        ));
        assert!(matches!(
            dir.ensure_department("payroll year", dept.company, DepartmentId::new()),
            Err(HrError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_employee_validates_and_records_history() {
        let dir = directory();
        let scope = Scope::company(CompanyId::new());
        let hired = dir.hire(&scope, NewEmployee::default()).unwrap();

        let bad = EmployeeChanges {
            passport_number: Some("P-778".to_string()),
            ..EmployeeChanges::default()
        };
        assert!(matches!(
            dir.update_employee(hired.id, bad),
            Err(HrError::InvalidRecord { .. })
        ));

        let good = EmployeeChanges {
            passport_number: Some("P-778".to_string()),
            passport_validity: Some(date(2030, 1, 1)),
            ..EmployeeChanges::default()
        };
        let updated = dir.update_employee(hired.id, good).unwrap();
        assert_eq!(updated.passport_number.as_deref(), Some("P-778"));

        let history = dir.history(hired.id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].snapshot, updated);
        assert_eq!(history[1].snapshot, hired);
    }

    #[test]
    fn test_payment_details_default_to_active_cash() {
        let dir = directory();
        let employee = dir
            .hire(&Scope::company(CompanyId::new()), NewEmployee::default())
            .unwrap();
        let detail = dir
            .add_payment_detail(employee.id, NewPaymentDetail::default())
            .unwrap();
        assert!(detail.active);
        assert_eq!(detail.payment_mode, crate::models::PaymentMode::Cash);
        assert_eq!(dir.payment_details(employee.id).unwrap(), vec![detail]);

        assert!(matches!(
            dir.add_payment_detail(EmployeeRef::new(), NewPaymentDetail::default()),
            Err(HrError::NotFound { .. })
        ));
    }

    #[test]
    fn test_profile_records_need_a_name() {
        let dir = directory();
        let employee = dir
            .hire(&Scope::company(CompanyId::new()), NewEmployee::default())
            .unwrap();

        let blank = Skill {
            employee: employee.id,
            name: "  ".to_string(),
        };
        assert!(matches!(dir.add_skill(blank), Err(HrError::InvalidRecord { .. })));

        dir.add_skill(Skill {
            employee: employee.id,
            name: "Forklift".to_string(),
        })
        .unwrap();
        dir.add_team(Team {
            employee: employee.id,
            name: "Night shift".to_string(),
            description: None,
        })
        .unwrap();
        dir.add_responsibility(Responsibility {
            employee: employee.id,
            name: "Fire warden".to_string(),
            description: Some("Floor 2".to_string()),
        })
        .unwrap();

        assert_eq!(dir.skills(employee.id).unwrap().len(), 1);
        assert_eq!(dir.teams(employee.id).unwrap()[0].name, "Night shift");
        assert_eq!(dir.responsibilities(employee.id).unwrap().len(), 1);
    }
}
