//! Personnel records around the payroll calendar.
//!
//! This module provides the [`PersonnelDirectory`] for departments,
//! employees and their side records, the [`LeaveLedger`] that derives leave
//! balances from the current payroll year, and the [`TransferDesk`] that runs
//! transfer proposals through review.

mod directory;
mod leave_balance;
mod sequence;
mod transfer;

pub use directory::PersonnelDirectory;
pub use leave_balance::LeaveLedger;
pub use sequence::{EmployeeSequence, PrefixedSequence};
pub use transfer::{TRANSFER_TRANSITIONS, TransferDesk, TransferEvent, next_transfer_state};
