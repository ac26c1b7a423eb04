//! Transfer / promotion proposals and their approval workflow.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HrError, HrResult};
use crate::models::{
    NewTransferProposal, NewTransferRemark, ProposalId, TransferProposal, TransferRemark,
    TransferState,
};
use crate::store::PersonnelRepository;

/// A reviewer action on a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferEvent {
    /// Submit a draft for review.
    Review,
    /// Accept the proposal and move the employee.
    Approve,
    /// Turn the proposal down.
    Reject,
}

impl fmt::Display for TransferEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransferEvent::Review => "review",
            TransferEvent::Approve => "approve",
            TransferEvent::Reject => "reject",
        })
    }
}

impl FromStr for TransferEvent {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "review" => Ok(TransferEvent::Review),
            "approve" => Ok(TransferEvent::Approve),
            "reject" => Ok(TransferEvent::Reject),
            other => Err(HrError::invalid(
                "transfer proposal",
                "event",
                format!("unknown event '{other}'"),
            )),
        }
    }
}

/// `(from, event, to)` rows; anything else is rejected.
pub const TRANSFER_TRANSITIONS: [(TransferState, TransferEvent, TransferState); 3] = [
    (TransferState::Draft, TransferEvent::Review, TransferState::InReview),
    (TransferState::InReview, TransferEvent::Approve, TransferState::Approved),
    (TransferState::InReview, TransferEvent::Reject, TransferState::Rejected),
];

/// Returns the state reached by applying `event` in `state`, if allowed.
pub fn next_transfer_state(state: TransferState, event: TransferEvent) -> Option<TransferState> {
    TRANSFER_TRANSITIONS
        .iter()
        .find(|(from, on, _)| *from == state && *on == event)
        .map(|(_, _, to)| *to)
}

/// Drives transfer proposals through review.
pub struct TransferDesk<R> {
    store: Arc<R>,
}

impl<R: PersonnelRepository> TransferDesk<R> {
    /// Creates a desk over `store`.
    pub fn new(store: Arc<R>) -> Self {
        Self { store }
    }

    /// Drafts a proposal.
    ///
    /// # Errors
    ///
    /// - [`HrError::NotFound`] for an unknown employee or department
    /// - [`HrError::InvalidRecord`] when the department is not in the proposed company
    pub fn propose(&self, draft: NewTransferProposal) -> HrResult<TransferProposal> {
        self.store
            .employee(draft.employee)?
            .ok_or_else(|| HrError::not_found("employee", draft.employee))?;
        let department = self
            .store
            .department(draft.proposed_department)?
            .ok_or_else(|| HrError::not_found("department", draft.proposed_department))?;
        if department.company != draft.proposed_company {
            return Err(HrError::invalid(
                "transfer proposal",
                "proposed_department",
                format!("'{}' does not belong to the proposed company", department.name),
            ));
        }

        let proposal = TransferProposal {
            id: ProposalId::new(),
            employee: draft.employee,
            proposed_company: draft.proposed_company,
            proposed_department: draft.proposed_department,
            proposed_allowance: draft.proposed_allowance,
            proposed_doj: draft.proposed_doj,
            state: TransferState::Draft,
            remarks: Vec::new(),
        };
        self.store.insert_proposal(proposal)
    }

    /// Looks up a proposal.
    pub fn proposal(&self, id: ProposalId) -> HrResult<TransferProposal> {
        self.store
            .proposal(id)?
            .ok_or_else(|| HrError::not_found("transfer proposal", id))
    }

    /// Applies a workflow event. Approval moves the employee in the same write.
    ///
    /// # Errors
    ///
    /// - [`HrError::InvalidTransition`] when the event is not allowed from the current state
    /// - [`HrError::StaleRecord`] when another event moved the proposal after it was read
    pub fn apply(&self, id: ProposalId, event: TransferEvent) -> HrResult<TransferProposal> {
        let from = self.proposal(id)?.state;
        let to = next_transfer_state(from, event).ok_or_else(|| HrError::InvalidTransition {
            entity: "transfer proposal",
            name: id.to_string(),
            state: from.to_string(),
            event: event.to_string(),
        })?;

        let relocate = event == TransferEvent::Approve;
        let proposal = self.store.transition_proposal(id, from, to, relocate)?;
        info!(proposal = %id, event = %event, state = %proposal.state, "Transfer proposal updated");
        Ok(proposal)
    }

    /// Appends a remark, dated `today` and recommended unless stated otherwise.
    pub fn add_remark(
        &self,
        id: ProposalId,
        remark: NewTransferRemark,
        today: NaiveDate,
    ) -> HrResult<TransferProposal> {
        self.store
            .employee(remark.employee)?
            .ok_or_else(|| HrError::not_found("employee", remark.employee))?;

        self.store.append_remark(
            id,
            TransferRemark {
                employee: remark.employee,
                date: remark.date.unwrap_or(today),
                comment: remark.comment,
                remark: remark.remark.unwrap_or_default(),
            },
        )
    }
}
