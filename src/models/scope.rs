//! Organizational scope passed explicitly through calls.

use serde::{Deserialize, Serialize};

use super::ids::{CompanyId, DepartmentId};

/// The company (and optionally department) an operation acts on behalf of.
///
/// Used to fill default values and to keep queries inside one tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// The current company.
    pub company: CompanyId,
    /// The current department, when one is selected.
    #[serde(default)]
    pub department: Option<DepartmentId>,
}

impl Scope {
    /// A scope covering a whole company.
    pub fn company(company: CompanyId) -> Self {
        Self {
            company,
            department: None,
        }
    }

    /// Narrows the scope to a department.
    pub fn with_department(mut self, department: DepartmentId) -> Self {
        self.department = Some(department);
        self
    }
}
