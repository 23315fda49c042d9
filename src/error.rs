//! Error types for the Compensation & Time-Ledger Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during engine operations.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{LeaveStatus, LeaveType, PayPeriod};

/// Broad classification of an engine error, used by callers (such as the
/// HTTP API) to decide how to surface a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range arguments.
    InvalidInput,
    /// A uniqueness or state-machine violation; the operation conflicts with
    /// existing records.
    Conflict,
    /// A referenced entity does not exist.
    NotFound,
    /// Configuration could not be loaded or parsed.
    Config,
}

/// The main error type for the engine.
///
/// All operations return this error type, making it easy to handle errors
/// consistently throughout the application. A failed operation never mutates
/// any record store.
///
/// # Example
///
/// ```
/// use talentflow_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "EMP999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An argument was malformed or out of range.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A payroll configuration value failed validation.
    #[error("Invalid rate for '{field}': {value} (must be >= 0)")]
    InvalidRate {
        /// The configuration field being updated.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// The employee already has an attendance record for the day.
    #[error("Employee {employee_id} already clocked in on {date}")]
    AlreadyClockedIn {
        /// The employee attempting to clock in.
        employee_id: String,
        /// The attendance day.
        date: NaiveDate,
    },

    /// No open clock-in record exists for the employee on the day.
    #[error("No open clock-in record for employee {employee_id} on {date}")]
    NoOpenClockIn {
        /// The employee attempting to clock out.
        employee_id: String,
        /// The attendance day.
        date: NaiveDate,
    },

    /// A clock-out would produce a zero or negative worked duration.
    #[error("Clock-out at {clock_out} is not after clock-in at {clock_in}")]
    InvalidDuration {
        /// The recorded clock-in time.
        clock_in: NaiveTime,
        /// The rejected clock-out time.
        clock_out: NaiveTime,
    },

    /// A payroll record already exists for the employee and period.
    #[error("Payroll already processed for employee {employee_id} in {period}")]
    AlreadyProcessed {
        /// The employee whose payroll was requested.
        employee_id: String,
        /// The payroll period.
        period: PayPeriod,
    },

    /// The leave request has already been approved or rejected.
    #[error("Leave request {request_id} already decided: {status}")]
    AlreadyDecided {
        /// The request that was decided earlier.
        request_id: Uuid,
        /// The terminal status it holds.
        status: LeaveStatus,
    },

    /// Approving the leave request would overdraw the employee's balance.
    #[error(
        "Insufficient {leave_type} balance for employee {employee_id}: \
         requested {requested} days, {remaining} remaining"
    )]
    InsufficientBalance {
        /// The employee whose balance would be overdrawn.
        employee_id: String,
        /// The leave type of the request.
        leave_type: LeaveType,
        /// Days the request needs.
        requested: i64,
        /// Days left in the allocation.
        remaining: i64,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The unknown employee id.
        id: String,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {id}")]
    RequestNotFound {
        /// The unknown request id.
        id: Uuid,
    },

    /// No payroll record exists for the employee and period.
    #[error("No payroll record for employee {employee_id} in {period}")]
    PayrollRecordNotFound {
        /// The employee whose record was requested.
        employee_id: String,
        /// The payroll period.
        period: PayPeriod,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidInput { .. } | EngineError::InvalidRate { .. } => {
                ErrorKind::InvalidInput
            }
            EngineError::AlreadyClockedIn { .. }
            | EngineError::NoOpenClockIn { .. }
            | EngineError::InvalidDuration { .. }
            | EngineError::AlreadyProcessed { .. }
            | EngineError::AlreadyDecided { .. }
            | EngineError::InsufficientBalance { .. } => ErrorKind::Conflict,
            EngineError::EmployeeNotFound { .. }
            | EngineError::RequestNotFound { .. }
            | EngineError::PayrollRecordNotFound { .. } => ErrorKind::NotFound,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ErrorKind::Config
            }
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
