//! HTTP request handlers for the HR payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::YearChanges;
use crate::error::HrResult;
use crate::models::{
    CompanyId, DepartmentId, EmployeeChanges, EmployeeRef, NewAttendance, NewDepartment,
    NewLeaveApplication, NewPaymentDetail, NewTransferProposal, PeriodId, ProposalId,
    Responsibility, Scope, Skill, Team, YearId,
};
use crate::personnel::TransferEvent;

use super::request::{
    CreatePeriodsRequest, CreateYearRequest, HireRequest, HolidayRequest, ProfileEntryRequest,
};
use super::response::{ApiError, ApiErrorResponse, EmployeeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll-years", post(create_year))
        .route("/payroll-years/:id", get(get_year).put(update_year))
        .route(
            "/payroll-years/:id/periods",
            get(list_periods).post(create_periods),
        )
        .route("/payroll-years/:id/close", post(close_year))
        .route("/payroll-years/:id/reopen", post(reopen_year))
        .route("/payroll-periods/:id/close", post(close_period))
        .route("/payroll-periods/:id/reopen", post(reopen_period))
        .route(
            "/payroll-periods/:id/holidays",
            get(list_holidays).post(add_holiday),
        )
        .route("/departments", post(create_department))
        .route("/employees", post(hire_employee))
        .route("/employees/:id", get(get_employee).put(update_employee))
        .route("/employees/:id/history", get(employee_history))
        .route(
            "/employees/:id/payment-details",
            get(list_payment_details).post(add_payment_detail),
        )
        .route(
            "/employees/:id/responsibilities",
            get(list_responsibilities).post(add_responsibility),
        )
        .route("/employees/:id/skills", get(list_skills).post(add_skill))
        .route("/employees/:id/teams", get(list_teams).post(add_team))
        .route("/employees/:id/leave-balances", get(leave_balances))
        .route("/leave-applications", post(apply_leave))
        .route("/attendance", post(record_attendance))
        .route("/transfer-proposals", post(propose_transfer))
        .route("/transfer-proposals/:id/:event", post(transfer_event))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

/// Turns a path parameter that failed to parse into a 400 response.
fn parse_path<T>(
    correlation_id: Uuid,
    path: Result<Path<T>, PathRejection>,
) -> Result<T, ApiErrorResponse> {
    path.map(|Path(value)| value).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(correlation_id = %correlation_id, error = %body_text, "Path parameter rejected");
        ApiErrorResponse::bad_request(ApiError::invalid_path(body_text))
    })
}

/// Parses an optional JSON body; an empty body yields the default value.
fn parse_optional_body<T: DeserializeOwned + Default>(
    correlation_id: Uuid,
    body: &Bytes,
) -> Result<T, ApiErrorResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "JSON body rejected");
        ApiErrorResponse::bad_request(ApiError::malformed_json(err.to_string()))
    })
}

/// Logs the outcome of an operation and renders it.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    operation: &'static str,
    success: StatusCode,
    result: HrResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(correlation_id = %correlation_id, operation, "Request completed");
            (
                success,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn start(operation: &'static str) -> Uuid {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, operation, "Processing request");
    correlation_id
}

/// Checks that a payroll year's department exists and belongs to its company.
fn check_year_department(
    state: &AppState,
    company: CompanyId,
    department: Option<DepartmentId>,
) -> HrResult<()> {
    if let Some(id) = department {
        state
            .directory()
            .ensure_department("payroll year", company, id)?;
    }
    Ok(())
}

/// Handler for `POST /payroll-years`.
async fn create_year(
    State(state): State<AppState>,
    payload: Result<Json<CreateYearRequest>, JsonRejection>,
) -> Response {
    let correlation_id = start("create_year");
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let (scope, draft) = request.into_parts();
    let result = check_year_department(&state, scope.company, draft.department.or(scope.department))
        .and_then(|()| state.calendar().create_year(&scope, draft));
    respond(correlation_id, "create_year", StatusCode::CREATED, result)
}

/// Handler for `GET /payroll-years/:id`.
async fn get_year(
    State(state): State<AppState>,
    path: Result<Path<YearId>, PathRejection>,
) -> Response {
    let correlation_id = start("get_year");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(correlation_id, "get_year", StatusCode::OK, state.calendar().year(id))
}

/// Handler for `PUT /payroll-years/:id`.
async fn update_year(
    State(state): State<AppState>,
    path: Result<Path<YearId>, PathRejection>,
    payload: Result<Json<YearChanges>, JsonRejection>,
) -> Response {
    let correlation_id = start("update_year");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let changes = match parse_body(correlation_id, payload) {
        Ok(changes) => changes,
        Err(err) => return err.into_response(),
    };
    let result = match changes.department {
        Some(department) => state
            .calendar()
            .year(id)
            .and_then(|year| check_year_department(&state, year.company, Some(department))),
        None => Ok(()),
    }
    .and_then(|()| state.calendar().update_year(id, changes));
    respond(correlation_id, "update_year", StatusCode::OK, result)
}

/// Handler for `GET /payroll-years/:id/periods`.
async fn list_periods(
    State(state): State<AppState>,
    path: Result<Path<YearId>, PathRejection>,
) -> Response {
    let correlation_id = start("list_periods");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "list_periods",
        StatusCode::OK,
        state.calendar().periods(id),
    )
}

/// Handler for `POST /payroll-years/:id/periods`.
///
/// The body is optional; without `interval_months` the configured default applies.
async fn create_periods(
    State(state): State<AppState>,
    path: Result<Path<YearId>, PathRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = start("create_periods");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let request: CreatePeriodsRequest = match parse_optional_body(correlation_id, &body) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let calendar = state.calendar();
    let interval = request
        .interval_months
        .unwrap_or_else(|| calendar.default_interval_months());
    respond(
        correlation_id,
        "create_periods",
        StatusCode::CREATED,
        calendar.create_periods(id, interval),
    )
}

/// Handler for `POST /payroll-years/:id/close`.
async fn close_year(
    State(state): State<AppState>,
    path: Result<Path<YearId>, PathRejection>,
) -> Response {
    let correlation_id = start("close_year");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "close_year",
        StatusCode::OK,
        state.calendar().close_year(id),
    )
}

/// Handler for `POST /payroll-years/:id/reopen`.
async fn reopen_year(
    State(state): State<AppState>,
    path: Result<Path<YearId>, PathRejection>,
) -> Response {
    let correlation_id = start("reopen_year");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "reopen_year",
        StatusCode::OK,
        state.calendar().reopen_year(id),
    )
}

/// Handler for `POST /payroll-periods/:id/close`.
async fn close_period(
    State(state): State<AppState>,
    path: Result<Path<PeriodId>, PathRejection>,
) -> Response {
    let correlation_id = start("close_period");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "close_period",
        StatusCode::OK,
        state.calendar().close_period(id),
    )
}

/// Handler for `POST /payroll-periods/:id/reopen`.
async fn reopen_period(
    State(state): State<AppState>,
    path: Result<Path<PeriodId>, PathRejection>,
) -> Response {
    let correlation_id = start("reopen_period");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "reopen_period",
        StatusCode::OK,
        state.calendar().reopen_period(id),
    )
}

/// Handler for `GET /payroll-periods/:id/holidays`.
async fn list_holidays(
    State(state): State<AppState>,
    path: Result<Path<PeriodId>, PathRejection>,
) -> Response {
    let correlation_id = start("list_holidays");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "list_holidays",
        StatusCode::OK,
        state.calendar().holidays(id),
    )
}

/// Handler for `POST /payroll-periods/:id/holidays`.
async fn add_holiday(
    State(state): State<AppState>,
    path: Result<Path<PeriodId>, PathRejection>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = start("add_holiday");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "add_holiday",
        StatusCode::CREATED,
        state.calendar().add_holiday(id, request.date, request.name),
    )
}

/// Handler for `POST /departments`.
async fn create_department(
    State(state): State<AppState>,
    payload: Result<Json<NewDepartment>, JsonRejection>,
) -> Response {
    let correlation_id = start("create_department");
    let draft = match parse_body(correlation_id, payload) {
        Ok(draft) => draft,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "create_department",
        StatusCode::CREATED,
        state.directory().create_department(draft),
    )
}

/// Handler for `POST /employees`.
async fn hire_employee(
    State(state): State<AppState>,
    payload: Result<Json<HireRequest>, JsonRejection>,
) -> Response {
    let correlation_id = start("hire_employee");
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let scope = Scope::company(request.company);
    respond(
        correlation_id,
        "hire_employee",
        StatusCode::CREATED,
        state.directory().hire(&scope, request.employee),
    )
}

/// Handler for `GET /employees/:id`, including the derived age.
async fn get_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
) -> Response {
    let correlation_id = start("get_employee");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let today = state.today();
    let result = state.directory().employee(id).map(|employee| {
        let age = employee.age(today).map(|age| age.to_string());
        EmployeeResponse { employee, age }
    });
    respond(correlation_id, "get_employee", StatusCode::OK, result)
}

/// Handler for `PUT /employees/:id`.
async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
    payload: Result<Json<EmployeeChanges>, JsonRejection>,
) -> Response {
    let correlation_id = start("update_employee");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let changes = match parse_body(correlation_id, payload) {
        Ok(changes) => changes,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "update_employee",
        StatusCode::OK,
        state.directory().update_employee(id, changes),
    )
}

/// Handler for `GET /employees/:id/history`.
async fn employee_history(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
) -> Response {
    let correlation_id = start("employee_history");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "employee_history",
        StatusCode::OK,
        state.directory().history(id),
    )
}

/// Handler for `GET /employees/:id/payment-details`.
async fn list_payment_details(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
) -> Response {
    let correlation_id = start("list_payment_details");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "list_payment_details",
        StatusCode::OK,
        state.directory().payment_details(id),
    )
}

/// Handler for `POST /employees/:id/payment-details`.
async fn add_payment_detail(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = start("add_payment_detail");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let draft: NewPaymentDetail = match parse_optional_body(correlation_id, &body) {
        Ok(draft) => draft,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "add_payment_detail",
        StatusCode::CREATED,
        state.directory().add_payment_detail(id, draft),
    )
}

/// Handler for `GET /employees/:id/responsibilities`.
async fn list_responsibilities(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
) -> Response {
    let correlation_id = start("list_responsibilities");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "list_responsibilities",
        StatusCode::OK,
        state.directory().responsibilities(id),
    )
}

/// Handler for `POST /employees/:id/responsibilities`.
async fn add_responsibility(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
    payload: Result<Json<ProfileEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = start("add_responsibility");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let responsibility = Responsibility {
        employee: id,
        name: request.name,
        description: request.description,
    };
    respond(
        correlation_id,
        "add_responsibility",
        StatusCode::CREATED,
        state.directory().add_responsibility(responsibility),
    )
}

/// Handler for `GET /employees/:id/skills`.
async fn list_skills(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
) -> Response {
    let correlation_id = start("list_skills");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "list_skills",
        StatusCode::OK,
        state.directory().skills(id),
    )
}

/// Handler for `POST /employees/:id/skills`. Skills carry no description.
async fn add_skill(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
    payload: Result<Json<ProfileEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = start("add_skill");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let skill = Skill {
        employee: id,
        name: request.name,
    };
    respond(
        correlation_id,
        "add_skill",
        StatusCode::CREATED,
        state.directory().add_skill(skill),
    )
}

/// Handler for `GET /employees/:id/teams`.
async fn list_teams(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
) -> Response {
    let correlation_id = start("list_teams");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "list_teams",
        StatusCode::OK,
        state.directory().teams(id),
    )
}

/// Handler for `POST /employees/:id/teams`.
async fn add_team(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
    payload: Result<Json<ProfileEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = start("add_team");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };
    let team = Team {
        employee: id,
        name: request.name,
        description: request.description,
    };
    respond(
        correlation_id,
        "add_team",
        StatusCode::CREATED,
        state.directory().add_team(team),
    )
}

/// Handler for `GET /employees/:id/leave-balances`.
async fn leave_balances(
    State(state): State<AppState>,
    path: Result<Path<EmployeeRef>, PathRejection>,
) -> Response {
    let correlation_id = start("leave_balances");
    let id = match parse_path(correlation_id, path) {
        Ok(id) => id,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "leave_balances",
        StatusCode::OK,
        state.ledger().balances(id, state.today()),
    )
}

/// Handler for `POST /leave-applications`.
async fn apply_leave(
    State(state): State<AppState>,
    payload: Result<Json<NewLeaveApplication>, JsonRejection>,
) -> Response {
    let correlation_id = start("apply_leave");
    let draft = match parse_body(correlation_id, payload) {
        Ok(draft) => draft,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "apply_leave",
        StatusCode::CREATED,
        state.directory().apply_leave(draft),
    )
}

/// Handler for `POST /attendance`.
async fn record_attendance(
    State(state): State<AppState>,
    payload: Result<Json<NewAttendance>, JsonRejection>,
) -> Response {
    let correlation_id = start("record_attendance");
    let draft = match parse_body(correlation_id, payload) {
        Ok(draft) => draft,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "record_attendance",
        StatusCode::CREATED,
        state.directory().record_attendance(draft),
    )
}

/// Handler for `POST /transfer-proposals`.
async fn propose_transfer(
    State(state): State<AppState>,
    payload: Result<Json<NewTransferProposal>, JsonRejection>,
) -> Response {
    let correlation_id = start("propose_transfer");
    let draft = match parse_body(correlation_id, payload) {
        Ok(draft) => draft,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        "propose_transfer",
        StatusCode::CREATED,
        state.transfers().propose(draft),
    )
}

/// Handler for `POST /transfer-proposals/:id/:event`.
async fn transfer_event(
    State(state): State<AppState>,
    path: Result<Path<(ProposalId, String)>, PathRejection>,
) -> Response {
    let correlation_id = start("transfer_event");
    let (id, event) = match parse_path(correlation_id, path) {
        Ok(params) => params,
        Err(err) => return err.into_response(),
    };
    let result = event
        .parse::<TransferEvent>()
        .and_then(|event| state.transfers().apply(id, event));
    respond(correlation_id, "transfer_event", StatusCode::OK, result)
}
