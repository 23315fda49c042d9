//! Leave request workflow and balance tracking.
//!
//! Requests move `Pending -> Approved | Rejected`, one way. Approval is the
//! only operation that debits a balance, and it refuses to overdraw.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calculation::count_leave_days;
use crate::clock::TimeSource;
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
use crate::notify::{NotificationKind, NotificationSink};
use crate::store::{BalanceStore, EmployeeRoster, LeaveStore};

/// The leave registry component.
pub struct LeaveRegistry {
    roster: Arc<dyn EmployeeRoster>,
    requests: Arc<dyn LeaveStore>,
    balances: Arc<dyn BalanceStore>,
    clock: Arc<dyn TimeSource>,
    notifier: Arc<dyn NotificationSink>,
}

impl LeaveRegistry {
    /// Creates a registry over the given collaborators.
    pub fn new(
        roster: Arc<dyn EmployeeRoster>,
        requests: Arc<dyn LeaveStore>,
        balances: Arc<dyn BalanceStore>,
        clock: Arc<dyn TimeSource>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            roster,
            requests,
            balances,
            clock,
            notifier,
        }
    }

    /// Submits a leave request in `Pending` state.
    ///
    /// The day count is inclusive of both endpoints; `end_date` before
    /// `start_date` fails with `InvalidInput` and an unknown employee with
    /// `EmployeeNotFound`. Submission does not touch the balance.
    pub fn submit_request(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: &str,
    ) -> EngineResult<LeaveRequest> {
        let employee = self
            .roster
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        let days = count_leave_days(start_date, end_date)?;

        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            leave_type,
            start_date,
            end_date,
            days,
            reason: reason.to_string(),
            status: LeaveStatus::Pending,
            applied_date: self.clock.today(),
        };
        self.requests.insert(request.clone());

        self.notifier.notify(
            NotificationKind::Success,
            &format!(
                "Leave request submitted for {}: {} {} day(s)",
                employee.name, days, leave_type
            ),
        );
        Ok(request)
    }

    /// Decides a pending request, one way.
    ///
    /// A request that is already `Approved` or `Rejected` fails with
    /// `AlreadyDecided`. Approval debits the employee's balance for the
    /// request's leave type; if the request needs more days than remain,
    /// the decision fails with `InsufficientBalance` and the request stays
    /// `Pending` with the balance untouched.
    pub fn decide(&self, request_id: Uuid, approve: bool) -> EngineResult<LeaveRequest> {
        let request = self
            .requests
            .get(request_id)
            .ok_or(EngineError::RequestNotFound { id: request_id })?;

        if request.status.is_terminal() {
            return Err(EngineError::AlreadyDecided {
                request_id,
                status: request.status,
            });
        }

        let decided = if approve {
            let balance = self.balance(&request.employee_id, request.leave_type)?;
            if request.days > balance.remaining() {
                return Err(EngineError::InsufficientBalance {
                    employee_id: request.employee_id.clone(),
                    leave_type: request.leave_type,
                    requested: request.days,
                    remaining: balance.remaining(),
                });
            }

            self.balances.put(LeaveBalance {
                used: balance.used + request.days,
                ..balance
            });
            LeaveRequest {
                status: LeaveStatus::Approved,
                ..request
            }
        } else {
            LeaveRequest {
                status: LeaveStatus::Rejected,
                ..request
            }
        };

        if !self.requests.update(decided.clone()) {
            return Err(EngineError::RequestNotFound { id: request_id });
        }

        self.notifier.notify(
            NotificationKind::Success,
            &format!("Leave request {}", decided.status),
        );
        Ok(decided)
    }

    /// Sets the allocation for an employee and leave type, preserving any
    /// days already used. Negative allocations fail with `InvalidInput`.
    pub fn allocate(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
        allocated: i64,
    ) -> EngineResult<LeaveBalance> {
        if self.roster.get(employee_id).is_none() {
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }
        if allocated < 0 {
            return Err(EngineError::InvalidInput {
                field: "allocated".to_string(),
                message: format!("{} is negative", allocated),
            });
        }

        let balance = LeaveBalance {
            allocated,
            ..self.balance(employee_id, leave_type)?
        };
        self.balances.put(balance.clone());
        Ok(balance)
    }

    /// The balance for an employee and leave type; zero-valued if never
    /// allocated.
    pub fn balance(&self, employee_id: &str, leave_type: LeaveType) -> EngineResult<LeaveBalance> {
        if self.roster.get(employee_id).is_none() {
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }
        Ok(self
            .balances
            .get(employee_id, leave_type)
            .unwrap_or(LeaveBalance {
                employee_id: employee_id.to_string(),
                leave_type,
                allocated: 0,
                used: 0,
            }))
    }

    /// All requests submitted by an employee, newest first.
    pub fn requests_for(&self, employee_id: &str) -> Vec<LeaveRequest> {
        self.requests.list_for_employee(employee_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Employee, EmployeeStatus};
    use crate::notify::NullSink;
    use crate::store::{InMemoryBalanceStore, InMemoryLeaveStore, InMemoryRoster};
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;

    fn test_employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Priya Sharma".to_string(),
            designation: "Product Manager".to_string(),
            department: "Product".to_string(),
            email: "priya.sharma@company.com".to_string(),
            phone: "+91 9876543211".to_string(),
            basic_salary: Decimal::from(100000),
            status: EmployeeStatus::Active,
            join_date: NaiveDate::from_ymd_opt(2018, 7, 22).unwrap(),
        }
    }

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            DateTime::parse_from_rfc3339("2024-11-20T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        ))
    }

    fn test_registry() -> LeaveRegistry {
        let roster = Arc::new(InMemoryRoster::with_employees(vec![test_employee(
            "EMP002",
        )]));
        LeaveRegistry::new(
            roster,
            Arc::new(InMemoryLeaveStore::new()),
            Arc::new(InMemoryBalanceStore::new()),
            fixed_clock(),
            Arc::new(NullSink),
        )
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn submit_six_days(registry: &LeaveRegistry) -> LeaveRequest {
        registry
            .submit_request(
                "EMP002",
                LeaveType::Annual,
                make_date("2024-12-15"),
                make_date("2024-12-20"),
                "Family vacation",
            )
            .unwrap()
    }

    /// LR-001: submission counts days inclusively and starts Pending
    #[test]
    fn test_submit_counts_inclusive_days() {
        let registry = test_registry();
        let request = submit_six_days(&registry);

        assert_eq!(request.days, 6);
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.applied_date, make_date("2024-11-20"));
    }

    /// LR-002: reversed range is rejected
    #[test]
    fn test_submit_reversed_range_fails() {
        let registry = test_registry();
        let result = registry.submit_request(
            "EMP002",
            LeaveType::Sick,
            make_date("2024-12-20"),
            make_date("2024-12-15"),
            "Backwards",
        );
        assert!(matches!(
            result.unwrap_err(),
            EngineError::InvalidInput { .. }
        ));
        assert!(registry.requests_for("EMP002").is_empty());
    }

    /// LR-003: unknown employee cannot submit
    #[test]
    fn test_submit_unknown_employee_fails() {
        let registry = test_registry();
        let result = registry.submit_request(
            "EMP999",
            LeaveType::Sick,
            make_date("2024-12-15"),
            make_date("2024-12-15"),
            "Checkup",
        );
        assert!(matches!(
            result.unwrap_err(),
            EngineError::EmployeeNotFound { .. }
        ));
    }

    /// LR-004: approval debits the balance
    #[test]
    fn test_approval_debits_balance() {
        let registry = test_registry();
        registry.allocate("EMP002", LeaveType::Annual, 20).unwrap();
        let request = submit_six_days(&registry);

        let decided = registry.decide(request.id, true).unwrap();
        assert_eq!(decided.status, LeaveStatus::Approved);

        let balance = registry.balance("EMP002", LeaveType::Annual).unwrap();
        assert_eq!(balance.used, 6);
        assert_eq!(balance.remaining(), 14);
    }

    /// LR-005: rejection leaves the balance alone
    #[test]
    fn test_rejection_does_not_touch_balance() {
        let registry = test_registry();
        registry.allocate("EMP002", LeaveType::Annual, 20).unwrap();
        let request = submit_six_days(&registry);

        let decided = registry.decide(request.id, false).unwrap();
        assert_eq!(decided.status, LeaveStatus::Rejected);
        assert_eq!(
            registry
                .balance("EMP002", LeaveType::Annual)
                .unwrap()
                .used,
            0
        );
    }

    /// LR-006: a decided request cannot be decided again
    #[test]
    fn test_double_decision_fails() {
        let registry = test_registry();
        registry.allocate("EMP002", LeaveType::Annual, 20).unwrap();
        let request = submit_six_days(&registry);

        registry.decide(request.id, true).unwrap();
        match registry.decide(request.id, true).unwrap_err() {
            EngineError::AlreadyDecided { status, .. } => {
                assert_eq!(status, LeaveStatus::Approved);
            }
            other => panic!("Expected AlreadyDecided, got {:?}", other),
        }

        // the first decision persists and the balance was debited once
        let stored = registry.requests_for("EMP002");
        assert_eq!(stored[0].status, LeaveStatus::Approved);
        assert_eq!(
            registry
                .balance("EMP002", LeaveType::Annual)
                .unwrap()
                .used,
            6
        );
    }

    /// LR-007: rejecting then approving fails the same way
    #[test]
    fn test_decision_is_one_way_even_after_rejection() {
        let registry = test_registry();
        let request = submit_six_days(&registry);

        registry.decide(request.id, false).unwrap();
        assert!(matches!(
            registry.decide(request.id, true).unwrap_err(),
            EngineError::AlreadyDecided { .. }
        ));
    }

    /// LR-008: approval refuses to overdraw the balance
    #[test]
    fn test_approval_refuses_overdraft() {
        let registry = test_registry();
        registry.allocate("EMP002", LeaveType::Annual, 4).unwrap();
        let request = submit_six_days(&registry);

        match registry.decide(request.id, true).unwrap_err() {
            EngineError::InsufficientBalance {
                requested,
                remaining,
                ..
            } => {
                assert_eq!(requested, 6);
                assert_eq!(remaining, 4);
            }
            other => panic!("Expected InsufficientBalance, got {:?}", other),
        }

        // the request is still pending and nothing was debited
        assert_eq!(registry.requests_for("EMP002")[0].status, LeaveStatus::Pending);
        assert_eq!(
            registry
                .balance("EMP002", LeaveType::Annual)
                .unwrap()
                .used,
            0
        );
    }

    /// LR-009: an unallocated balance counts as zero
    #[test]
    fn test_unallocated_balance_is_zero() {
        let registry = test_registry();
        let request = submit_six_days(&registry);

        assert!(matches!(
            registry.decide(request.id, true).unwrap_err(),
            EngineError::InsufficientBalance { .. }
        ));
        let balance = registry.balance("EMP002", LeaveType::Annual).unwrap();
        assert_eq!(balance.allocated, 0);
        assert_eq!(balance.used, 0);
    }

    /// LR-010: unknown request id
    #[test]
    fn test_decide_unknown_request_fails() {
        let registry = test_registry();
        assert!(matches!(
            registry.decide(Uuid::nil(), true).unwrap_err(),
            EngineError::RequestNotFound { .. }
        ));
    }

    /// LR-011: re-allocation preserves used days
    #[test]
    fn test_reallocation_preserves_used_days() {
        let registry = test_registry();
        registry.allocate("EMP002", LeaveType::Annual, 20).unwrap();
        let request = submit_six_days(&registry);
        registry.decide(request.id, true).unwrap();

        let balance = registry.allocate("EMP002", LeaveType::Annual, 25).unwrap();
        assert_eq!(balance.allocated, 25);
        assert_eq!(balance.used, 6);
    }

    /// LR-012: balances are independent per leave type
    #[test]
    fn test_balances_independent_per_type() {
        let registry = test_registry();
        registry.allocate("EMP002", LeaveType::Annual, 20).unwrap();
        registry.allocate("EMP002", LeaveType::Sick, 10).unwrap();

        let request = registry
            .submit_request(
                "EMP002",
                LeaveType::Sick,
                make_date("2024-11-28"),
                make_date("2024-11-29"),
                "Medical checkup",
            )
            .unwrap();
        registry.decide(request.id, true).unwrap();

        assert_eq!(
            registry.balance("EMP002", LeaveType::Sick).unwrap().used,
            2
        );
        assert_eq!(
            registry
                .balance("EMP002", LeaveType::Annual)
                .unwrap()
                .used,
            0
        );
    }

    #[test]
    fn test_allocate_rejects_negative() {
        let registry = test_registry();
        assert!(matches!(
            registry
                .allocate("EMP002", LeaveType::Annual, -5)
                .unwrap_err(),
            EngineError::InvalidInput { .. }
        ));
    }
}
