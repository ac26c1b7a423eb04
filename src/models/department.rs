//! Company department model.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::ids::{CompanyId, DepartmentId};

/// A department inside a company, with its attendance rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Record id.
    pub id: DepartmentId,
    /// Department name.
    pub name: String,
    /// The owning company.
    pub company: CompanyId,
    /// Inactive departments are kept for history only.
    pub active: bool,
    /// Parent department in the same company.
    #[serde(default)]
    pub parent: Option<DepartmentId>,
    /// Leaving before this time counts as an early departure.
    #[serde(default)]
    pub early_departure_time: Option<NaiveTime>,
    /// Early departures tolerated per month.
    pub allowed_early_departures: u32,
    /// Arriving after this time counts as a late coming.
    #[serde(default)]
    pub late_coming_time: Option<NaiveTime>,
    /// Late comings tolerated per month.
    pub allowed_late_comings: u32,
}

/// Input for creating a department. Omitted values take the configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepartment {
    /// Department name.
    pub name: String,
    /// The owning company.
    pub company: CompanyId,
    /// Parent department in the same company.
    #[serde(default)]
    pub parent: Option<DepartmentId>,
    /// Defaults to true.
    #[serde(default)]
    pub active: Option<bool>,
    /// Early departure cut-off.
    #[serde(default)]
    pub early_departure_time: Option<NaiveTime>,
    /// Defaults to the configured allowance.
    #[serde(default)]
    pub allowed_early_departures: Option<u32>,
    /// Late coming cut-off.
    #[serde(default)]
    pub late_coming_time: Option<NaiveTime>,
    /// Defaults to the configured allowance.
    #[serde(default)]
    pub allowed_late_comings: Option<u32>,
}
