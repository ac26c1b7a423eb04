//! Payroll calendar and personnel records for an HR system.
//!
//! This crate manages payroll years, their periods and holidays (with overlap
//! validation and an ordered open/close lifecycle), together with the
//! personnel records that depend on them: departments, employees, leave
//! balances and transfer proposals.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod personnel;
pub mod store;
