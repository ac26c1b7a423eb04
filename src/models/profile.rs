//! Employee profile records: payment details, responsibilities, skills,
//! teams, and the change history kept for every employee write.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::employee::Employee;
use super::ids::{EmployeeRef, PaymentDetailId};

/// How an employee's salary is paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Paid in cash.
    #[default]
    Cash,
    /// Paid by cheque.
    Cheque,
    /// Paid into a bank account.
    Bank,
}

/// A payment arrangement for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetail {
    /// Record id.
    pub id: PaymentDetailId,
    /// The employee paid.
    pub employee: EmployeeRef,
    /// Inactive details are kept for reference only.
    pub active: bool,
    /// Payment mode.
    pub payment_mode: PaymentMode,
    /// Date of payment.
    pub payment_date: Option<NaiveDate>,
    /// Bank code.
    pub bank_code: Option<String>,
    /// Bank branch code.
    pub bank_branch_code: Option<String>,
    /// Name on the bank account.
    pub bank_account_name: Option<String>,
    /// Name the cheque is payable at.
    pub payable_at_name: Option<String>,
    /// Date a payment came back.
    pub return_date: Option<NaiveDate>,
    /// Why it came back.
    pub return_reason: Option<String>,
}

/// Input for recording a payment arrangement. Active cash payment by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPaymentDetail {
    /// Defaults to true.
    #[serde(default)]
    pub active: Option<bool>,
    /// Defaults to cash.
    #[serde(default)]
    pub payment_mode: Option<PaymentMode>,
    /// Date of payment.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// Bank code.
    #[serde(default)]
    pub bank_code: Option<String>,
    /// Bank branch code.
    #[serde(default)]
    pub bank_branch_code: Option<String>,
    /// Name on the bank account.
    #[serde(default)]
    pub bank_account_name: Option<String>,
    /// Name the cheque is payable at.
    #[serde(default)]
    pub payable_at_name: Option<String>,
    /// Date a payment came back.
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    /// Why it came back.
    #[serde(default)]
    pub return_reason: Option<String>,
}

impl NewPaymentDetail {
    /// Builds the stored record for `employee`, applying the defaults.
    pub fn into_detail(self, employee: EmployeeRef) -> PaymentDetail {
        PaymentDetail {
            id: PaymentDetailId::new(),
            employee,
            active: self.active.unwrap_or(true),
            payment_mode: self.payment_mode.unwrap_or_default(),
            payment_date: self.payment_date,
            bank_code: self.bank_code,
            bank_branch_code: self.bank_branch_code,
            bank_account_name: self.bank_account_name,
            payable_at_name: self.payable_at_name,
            return_date: self.return_date,
            return_reason: self.return_reason,
        }
    }
}

/// A responsibility held by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsibility {
    /// The employee.
    pub employee: EmployeeRef,
    /// Short name.
    pub name: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A skill of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// The employee.
    pub employee: EmployeeRef,
    /// Skill name.
    pub name: String,
}

/// A team the employee belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The employee.
    pub employee: EmployeeRef,
    /// Team name.
    pub name: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
}

/// What produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeChange {
    /// The record was created.
    Hired,
    /// The record was edited.
    Updated,
    /// An approved transfer moved the employee.
    Transferred,
}

/// A snapshot of an employee taken right after a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeHistory {
    /// The employee.
    pub employee: EmployeeRef,
    /// Starts at 1 and grows by one per write.
    pub revision: u64,
    /// When the write happened.
    pub changed_at: DateTime<Utc>,
    /// What kind of write it was.
    pub change: EmployeeChange,
    /// The record as stored after the write.
    pub snapshot: Employee,
}
