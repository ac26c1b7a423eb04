//! Typed record identifiers.
//!
//! Each entity gets its own UUID newtype so a period id can never be passed
//! where a year id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identifies a company (the owning organizational unit).
    CompanyId
);
entity_id!(
    /// Identifies a department.
    DepartmentId
);
entity_id!(
    /// Identifies a payroll year.
    YearId
);
entity_id!(
    /// Identifies a payroll period.
    PeriodId
);
entity_id!(
    /// Identifies a payroll holiday.
    HolidayId
);
entity_id!(
    /// Identifies an employee record (distinct from the human-readable employee ID).
    EmployeeRef
);
entity_id!(
    /// Identifies a leave application.
    LeaveApplicationId
);
entity_id!(
    /// Identifies an attendance row.
    AttendanceId
);
entity_id!(
    /// Identifies an academic record.
    AcademicId
);
entity_id!(
    /// Identifies a promotion / transfer proposal.
    ProposalId
);
entity_id!(
    /// Identifies an employee payment detail.
    PaymentDetailId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(YearId::new(), YearId::new());
    }

    #[test]
    fn test_id_serializes_as_bare_uuid() {
        let id = PeriodId(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
