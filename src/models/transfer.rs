//! Promotion / transfer proposal models.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{CompanyId, DepartmentId, EmployeeRef, ProposalId};

/// Approval state of a transfer proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransferState {
    /// Being drafted.
    #[default]
    Draft,
    /// Submitted for review.
    #[serde(rename = "In Review")]
    InReview,
    /// Approved; the employee has been moved.
    Approved,
    /// Rejected.
    Rejected,
}

impl TransferState {
    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            TransferState::Draft => "Draft",
            TransferState::InReview => "In Review",
            TransferState::Approved => "Approved",
            TransferState::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reviewer's verdict on a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemarkKind {
    /// Recommended.
    #[default]
    Recommended,
    /// Not recommended.
    NotRecommended,
    /// Average.
    Average,
    /// Rejected.
    Rejected,
}

/// A comment left on a transfer proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRemark {
    /// The reviewing employee.
    pub employee: EmployeeRef,
    /// Remark date.
    pub date: NaiveDate,
    /// Free-text comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// The verdict.
    pub remark: RemarkKind,
}

/// A proposal to move an employee to another company or department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferProposal {
    /// Record id.
    pub id: ProposalId,
    /// The employee being moved.
    pub employee: EmployeeRef,
    /// Destination company.
    pub proposed_company: CompanyId,
    /// Destination department, which must belong to `proposed_company`.
    pub proposed_department: DepartmentId,
    /// Proposed allowance.
    pub proposed_allowance: Decimal,
    /// Proposed date of joining.
    pub proposed_doj: NaiveDate,
    /// Approval state.
    pub state: TransferState,
    /// Remarks, oldest first.
    #[serde(default)]
    pub remarks: Vec<TransferRemark>,
}

/// Input for drafting a transfer proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransferProposal {
    /// The employee being moved.
    pub employee: EmployeeRef,
    /// Destination company.
    pub proposed_company: CompanyId,
    /// Destination department.
    pub proposed_department: DepartmentId,
    /// Proposed allowance.
    pub proposed_allowance: Decimal,
    /// Proposed date of joining.
    pub proposed_doj: NaiveDate,
}

/// Input for a remark. Date defaults to today and verdict to recommended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransferRemark {
    /// The reviewing employee.
    pub employee: EmployeeRef,
    /// Remark date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Free-text comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// The verdict.
    #[serde(default)]
    pub remark: Option<RemarkKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&TransferState::InReview).unwrap(),
            "\"In Review\""
        );
        let state: TransferState = serde_json::from_str("\"Approved\"").unwrap();
        assert_eq!(state, TransferState::Approved);
        assert_eq!(TransferState::default(), TransferState::Draft);
    }

    #[test]
    fn test_remark_kind_defaults_to_recommended() {
        assert_eq!(RemarkKind::default(), RemarkKind::Recommended);
        assert_eq!(
            serde_json::to_string(&RemarkKind::NotRecommended).unwrap(),
            "\"not_recommended\""
        );
    }
}
