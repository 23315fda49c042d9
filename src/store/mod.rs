//! Repository contracts for the engine's record collections.
//!
//! The engine owns no storage format: every collection sits behind one of
//! these traits, and the uniqueness invariants lean on the
//! `insert_if_absent`-style primitives. The in-memory implementations in
//! [`memory`] back the default deployment and the test suite; a database
//! implementation only needs to supply the same contracts.

mod memory;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    AttendanceRecord, Employee, LeaveBalance, LeaveRequest, LeaveType, PayPeriod, PayrollRecord,
};

pub use memory::{
    InMemoryAttendanceStore, InMemoryBalanceStore, InMemoryLeaveStore, InMemoryPayrollStore,
    InMemoryRoster, NewEmployee,
};

/// Read access to the employee roster.
pub trait EmployeeRoster: Send + Sync {
    /// All employees currently marked active.
    fn list_active(&self) -> Vec<Employee>;

    /// Looks up one employee by id.
    fn get(&self, id: &str) -> Option<Employee>;
}

/// Storage for payroll records, keyed by `(employee_id, period)`.
pub trait PayrollStore: Send + Sync {
    /// The record for an employee and period, if one exists.
    fn find(&self, employee_id: &str, period: PayPeriod) -> Option<PayrollRecord>;

    /// Inserts the record only if no record exists for its
    /// `(employee_id, period)` key. Returns whether the insert happened.
    fn insert_if_absent(&self, record: PayrollRecord) -> bool;

    /// Replaces the record for the key, only if one already exists.
    /// Returns whether the replacement happened.
    fn replace(&self, record: PayrollRecord) -> bool;

    /// All records for a period.
    fn list_for_period(&self, period: PayPeriod) -> Vec<PayrollRecord>;
}

/// Storage for attendance records, keyed by `(employee_id, date)`.
pub trait AttendanceStore: Send + Sync {
    /// The record for an employee and day, if one exists.
    fn find(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord>;

    /// Inserts the record only if no record exists for its
    /// `(employee_id, date)` key. Returns whether the insert happened.
    fn insert_if_absent(&self, record: AttendanceRecord) -> bool;

    /// Overwrites the record for the key, only if one already exists.
    /// Returns whether the update happened.
    fn update(&self, record: AttendanceRecord) -> bool;
}

/// Storage for leave requests, keyed by request id.
pub trait LeaveStore: Send + Sync {
    /// Looks up one request by id.
    fn get(&self, id: Uuid) -> Option<LeaveRequest>;

    /// Stores a new request.
    fn insert(&self, request: LeaveRequest);

    /// Overwrites an existing request. Returns whether the update happened.
    fn update(&self, request: LeaveRequest) -> bool;

    /// All requests submitted by an employee, newest first.
    fn list_for_employee(&self, employee_id: &str) -> Vec<LeaveRequest>;
}

/// Storage for leave balances, keyed by `(employee_id, leave_type)`.
pub trait BalanceStore: Send + Sync {
    /// The balance for an employee and leave type, if one was allocated.
    fn get(&self, employee_id: &str, leave_type: LeaveType) -> Option<LeaveBalance>;

    /// Stores or overwrites a balance.
    fn put(&self, balance: LeaveBalance);
}
