//! Request types for the engine API.
//!
//! This module defines the JSON request structures for every mutating
//! endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LeaveType;
use crate::store::NewEmployee;

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardEmployeeRequest {
    /// The employee's full name.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// Department name.
    pub department: String,
    /// Work email address.
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
}

impl From<OnboardEmployeeRequest> for NewEmployee {
    fn from(req: OnboardEmployeeRequest) -> Self {
        NewEmployee {
            name: req.name,
            designation: req.designation,
            department: req.department,
            email: req.email,
            phone: req.phone,
            basic_salary: req.basic_salary,
        }
    }
}

/// Request body for `POST /payroll/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Monthly basic salary to break down.
    pub basic_salary: Decimal,
}

/// Request body for `POST /payroll/process`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOneRequest {
    /// The employee to process.
    pub employee_id: String,
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Optional basic salary override for this computation.
    #[serde(default)]
    pub basic_salary: Option<Decimal>,
}

/// Request body for `POST /payroll/reprocess`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReprocessRequest {
    /// The employee whose record to replace.
    pub employee_id: String,
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

/// Request body for `POST /payroll/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPeriodRequest {
    /// Calendar month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

/// Request body for `POST /attendance/clock-in` and `/clock-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockRequest {
    /// The employee clocking in or out.
    pub employee_id: String,
    /// The clock timestamp; its date is the attendance day.
    pub timestamp: NaiveDateTime,
}

/// Request body for `POST /leave/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeaveRequest {
    /// The employee requesting leave.
    pub employee_id: String,
    /// The leave category.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
}

/// Request body for `POST /leave/requests/:id/decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// `true` approves the request, `false` rejects it.
    pub approve: bool,
}

/// Request body for `POST /leave/balances`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocateBalanceRequest {
    /// The employee the allocation is for.
    pub employee_id: String,
    /// The leave category.
    pub leave_type: LeaveType,
    /// Days allocated for the entitlement period.
    pub allocated: i64,
}
