//! Leave request and balance models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Planned annual leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Short-notice casual leave.
    Casual,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Casual => "casual",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
        };
        f.write_str(name)
    }
}

/// The decision state of a leave request.
///
/// Requests are created `Pending` and transition exactly once to either
/// `Approved` or `Rejected`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; the employee's balance has been debited.
    Approved,
    /// Rejected; no balance change.
    Rejected,
}

impl LeaveStatus {
    /// Returns true once the request has been approved or rejected.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// A request for a contiguous, inclusive range of leave days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for this request.
    pub id: Uuid,
    /// The employee requesting leave.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive; `end_date >= start_date`).
    pub end_date: NaiveDate,
    /// Number of days requested, counted inclusively: a single-day request
    /// has `days = 1`.
    pub days: i64,
    /// Free-text reason supplied by the employee.
    pub reason: String,
    /// Decision state.
    pub status: LeaveStatus,
    /// The date the request was submitted.
    pub applied_date: NaiveDate,
}

/// Per-employee, per-type leave entitlement tracking.
///
/// `used` is incremented only when a request transitions to `Approved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The leave category the balance covers.
    pub leave_type: LeaveType,
    /// Days allocated for the entitlement period.
    pub allocated: i64,
    /// Days consumed by approved requests.
    pub used: i64,
}

impl LeaveBalance {
    /// Days still available: `allocated - used`.
    pub fn remaining(&self) -> i64 {
        self.allocated - self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::Annual).unwrap(),
            "\"annual\""
        );
        assert_eq!(serde_json::to_string(&LeaveType::Sick).unwrap(), "\"sick\"");
        assert_eq!(
            serde_json::to_string(&LeaveType::Maternity).unwrap(),
            "\"maternity\""
        );
    }

    #[test]
    fn test_status_terminality() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_balance_remaining() {
        let balance = LeaveBalance {
            employee_id: "EMP001".to_string(),
            leave_type: LeaveType::Annual,
            allocated: 20,
            used: 6,
        };
        assert_eq!(balance.remaining(), 14);
    }

    #[test]
    fn test_request_serialization_round_trip() {
        let request = LeaveRequest {
            id: Uuid::nil(),
            employee_id: "EMP002".to_string(),
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            days: 6,
            reason: "Family vacation".to_string(),
            status: LeaveStatus::Pending,
            applied_date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"leave_type\":\"annual\""));
        assert!(json.contains("\"status\":\"pending\""));
        let deserialized: LeaveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }

    #[test]
    fn test_display_matches_serde_casing() {
        assert_eq!(LeaveType::Paternity.to_string(), "paternity");
        assert_eq!(LeaveStatus::Approved.to_string(), "approved");
    }
}
