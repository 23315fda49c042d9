//! HTTP request handlers for the engine API.
//!
//! This module contains the handler functions for all endpoints and the
//! router wiring them together.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PayrollConfigPatch;
use crate::error::EngineResult;
use crate::models::{LeaveType, PayPeriod};

use super::request::{
    AllocateBalanceRequest, ClockRequest, DecisionRequest, OnboardEmployeeRequest,
    PreviewRequest, ProcessOneRequest, ReprocessRequest, RunPeriodRequest, SubmitLeaveRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(onboard).get(directory))
        .route("/employees/:id/deactivate", post(deactivate))
        .route("/settings/payroll", get(get_settings).put(update_settings))
        .route("/payroll/preview", post(preview))
        .route("/payroll/process", post(process_one))
        .route("/payroll/reprocess", post(reprocess_one))
        .route("/payroll/run", post(run_period))
        .route("/payroll/records", get(records_for_period))
        .route("/attendance/clock-in", post(clock_in))
        .route("/attendance/clock-out", post(clock_out))
        .route("/attendance/:employee_id/:date", get(daily_status))
        .route("/leave/requests", post(submit_leave))
        .route("/leave/requests/:id/decision", post(decide_leave))
        .route("/leave/employees/:employee_id/requests", get(list_leave))
        .route("/leave/balances", post(allocate_balance))
        .route("/leave/balances/:employee_id/:leave_type", get(get_balance))
        .with_state(state)
}

/// Unwraps a JSON payload, converting extractor rejections into 400 responses.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Converts an engine result into a JSON response, logging failures.
fn respond<T: Serialize>(result: EngineResult<T>, correlation_id: Uuid) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Operation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Query parameters for the employee directory.
#[derive(Debug, Deserialize)]
struct DirectoryQuery {
    search: Option<String>,
    department: Option<String>,
}

/// Query parameters selecting a payroll period.
#[derive(Debug, Deserialize)]
struct PeriodQuery {
    month: u32,
    year: i32,
}

async fn onboard(
    State(state): State<AppState>,
    payload: Result<Json<OnboardEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(correlation_id = %correlation_id, name = %request.name, "Onboarding employee");
    let join_date = state.clock().today();
    respond(
        state.roster().onboard(request.into(), join_date),
        correlation_id,
    )
}

async fn directory(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Response {
    let employees = state
        .roster()
        .directory(query.search.as_deref(), query.department.as_deref());
    (StatusCode::OK, Json(employees)).into_response()
}

async fn deactivate(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Deactivating employee");
    respond(state.roster().deactivate(&id), correlation_id)
}

async fn get_settings(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.settings().current())).into_response()
}

async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<PayrollConfigPatch>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let patch = match parse_json(payload, correlation_id) {
        Ok(patch) => patch,
        Err(response) => return response,
    };

    info!(correlation_id = %correlation_id, "Updating payroll settings");
    respond(state.settings().update(patch), correlation_id)
}

async fn preview(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(state.payroll().preview(request.basic_salary), correlation_id)
}

async fn process_one(
    State(state): State<AppState>,
    payload: Result<Json<ProcessOneRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        month = request.month,
        year = request.year,
        "Processing payroll"
    );
    let result = PayPeriod::new(request.month, request.year).and_then(|period| {
        state
            .payroll()
            .process_one(&request.employee_id, request.basic_salary, period)
    });
    respond(result, correlation_id)
}

async fn reprocess_one(
    State(state): State<AppState>,
    payload: Result<Json<ReprocessRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Reprocessing payroll"
    );
    let result = PayPeriod::new(request.month, request.year)
        .and_then(|period| state.payroll().reprocess_one(&request.employee_id, period));
    respond(result, correlation_id)
}

async fn run_period(
    State(state): State<AppState>,
    payload: Result<Json<RunPeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        month = request.month,
        year = request.year,
        "Running batch payroll"
    );
    let result = PayPeriod::new(request.month, request.year)
        .and_then(|period| state.payroll().process_period(period));
    respond(result, correlation_id)
}

async fn records_for_period(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = PayPeriod::new(query.month, query.year)
        .map(|period| state.payroll().records_for_period(period));
    respond(result, correlation_id)
}

async fn clock_in(
    State(state): State<AppState>,
    payload: Result<Json<ClockRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Clock-in"
    );
    respond(
        state
            .attendance()
            .clock_in(&request.employee_id, request.timestamp),
        correlation_id,
    )
}

async fn clock_out(
    State(state): State<AppState>,
    payload: Result<Json<ClockRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Clock-out"
    );
    respond(
        state
            .attendance()
            .clock_out(&request.employee_id, request.timestamp),
        correlation_id,
    )
}

async fn daily_status(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        state.attendance().daily_status(&employee_id, date),
        correlation_id,
    )
}

async fn submit_leave(
    State(state): State<AppState>,
    payload: Result<Json<SubmitLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Submitting leave request"
    );
    respond(
        state.leave().submit_request(
            &request.employee_id,
            request.leave_type,
            request.start_date,
            request.end_date,
            &request.reason,
        ),
        correlation_id,
    )
}

async fn decide_leave(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    info!(
        correlation_id = %correlation_id,
        request_id = %id,
        approve = request.approve,
        "Deciding leave request"
    );
    respond(state.leave().decide(id, request.approve), correlation_id)
}

async fn list_leave(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let requests = state.leave().requests_for(&employee_id);
    (StatusCode::OK, Json(requests)).into_response()
}

async fn allocate_balance(
    State(state): State<AppState>,
    payload: Result<Json<AllocateBalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        state
            .leave()
            .allocate(&request.employee_id, request.leave_type, request.allocated),
        correlation_id,
    )
}

async fn get_balance(
    State(state): State<AppState>,
    Path((employee_id, leave_type)): Path<(String, LeaveType)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        state.leave().balance(&employee_id, leave_type),
        correlation_id,
    )
}
