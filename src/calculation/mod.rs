//! Calculation logic for the Compensation & Time-Ledger Engine.
//!
//! This module contains the pure computation functions: the salary breakdown
//! with statutory deductions, whole-minute worked-duration arithmetic, and
//! inclusive leave-day counting. Nothing here touches a record store or a
//! clock; every function is deterministic in its arguments.

mod breakdown;
mod duration;
mod leave_days;

pub use breakdown::{SalaryBreakdown, compute_breakdown, monthly_tds_threshold};
pub use duration::{format_minutes, worked_minutes};
pub use leave_days::count_leave_days;
