//! HTTP API module for the HR payroll service.
//!
//! This module provides the REST API endpoints for managing the payroll
//! calendar, personnel records, leave balances and transfer proposals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreatePeriodsRequest, CreateYearRequest, HireRequest, HolidayRequest, ProfileEntryRequest,
};
pub use response::{ApiError, ApiErrorResponse, EmployeeResponse};
pub use state::AppState;
