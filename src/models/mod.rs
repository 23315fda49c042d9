//! Core data models for the Compensation & Time-Ledger Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod payroll;

pub use attendance::{AttendanceRecord, AttendanceStatus, DailyStatus};
pub use employee::{Employee, EmployeeStatus};
pub use leave::{LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
pub use payroll::{PayPeriod, PayrollRecord};
