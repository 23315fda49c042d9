//! HTTP API module for the Compensation & Time-Ledger Engine.
//!
//! This module provides the REST endpoints for payroll processing,
//! attendance tracking, leave management, the employee directory, and
//! payroll settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AllocateBalanceRequest, ClockRequest, DecisionRequest, OnboardEmployeeRequest,
    PreviewRequest, ProcessOneRequest, ReprocessRequest, RunPeriodRequest, SubmitLeaveRequest,
};
pub use response::ApiError;
pub use state::AppState;
