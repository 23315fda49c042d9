//! In-memory implementations of the repository contracts.
//!
//! Each store guards its map with a single mutex; check-then-act sequences
//! such as `insert_if_absent` run entirely under one guard, which is what
//! upholds the per-key uniqueness invariants under concurrent callers.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, Employee, EmployeeStatus, LeaveBalance, LeaveRequest, LeaveType, PayPeriod,
    PayrollRecord,
};

use super::{AttendanceStore, BalanceStore, EmployeeRoster, LeaveStore, PayrollStore};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// The details supplied when onboarding an employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// The employee's full name.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// Department name.
    pub department: String,
    /// Work email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
}

/// In-memory employee roster with onboarding and soft deactivation.
///
/// Employee ids are issued sequentially as `EMP001`, `EMP002`, and so on.
/// Employees are never removed: offboarding flips the status to `Inactive`
/// so historical payroll, attendance, and leave records stay resolvable.
#[derive(Default)]
pub struct InMemoryRoster {
    employees: Mutex<Vec<Employee>>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster seeded with existing employees, for tests and demos.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
        }
    }

    /// Onboards a new employee, issuing the next sequential id.
    ///
    /// Rejects empty `name`, `email`, or `designation`, and negative
    /// salaries, with `InvalidInput`.
    pub fn onboard(&self, new: NewEmployee, join_date: NaiveDate) -> EngineResult<Employee> {
        for (field, value) in [
            ("name", &new.name),
            ("email", &new.email),
            ("designation", &new.designation),
        ] {
            if value.trim().is_empty() {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if new.basic_salary < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "basic_salary".to_string(),
                message: format!("{} is negative", new.basic_salary),
            });
        }

        let mut employees = lock(&self.employees);
        let employee = Employee {
            id: format!("EMP{:03}", employees.len() + 1),
            name: new.name,
            designation: new.designation,
            department: new.department,
            email: new.email,
            phone: new.phone,
            basic_salary: new.basic_salary,
            status: EmployeeStatus::Active,
            join_date,
        };
        employees.push(employee.clone());
        Ok(employee)
    }

    /// Marks an employee inactive. Idempotent on already-inactive employees.
    pub fn deactivate(&self, id: &str) -> EngineResult<Employee> {
        let mut employees = lock(&self.employees);
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
        employee.status = EmployeeStatus::Inactive;
        Ok(employee.clone())
    }

    /// Directory listing with optional case-insensitive search over name,
    /// designation, and department, and an optional exact department filter.
    pub fn directory(&self, search: Option<&str>, department: Option<&str>) -> Vec<Employee> {
        lock(&self.employees)
            .iter()
            .filter(|e| search.is_none_or(|term| e.matches_search(term)))
            .filter(|e| department.is_none_or(|d| e.department == d))
            .cloned()
            .collect()
    }
}

impl EmployeeRoster for InMemoryRoster {
    fn list_active(&self) -> Vec<Employee> {
        lock(&self.employees)
            .iter()
            .filter(|e| e.is_active())
            .cloned()
            .collect()
    }

    fn get(&self, id: &str) -> Option<Employee> {
        lock(&self.employees).iter().find(|e| e.id == id).cloned()
    }
}

/// In-memory payroll record store.
#[derive(Default)]
pub struct InMemoryPayrollStore {
    records: Mutex<HashMap<(String, PayPeriod), PayrollRecord>>,
}

impl InMemoryPayrollStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PayrollStore for InMemoryPayrollStore {
    fn find(&self, employee_id: &str, period: PayPeriod) -> Option<PayrollRecord> {
        lock(&self.records)
            .get(&(employee_id.to_string(), period))
            .cloned()
    }

    fn insert_if_absent(&self, record: PayrollRecord) -> bool {
        let mut records = lock(&self.records);
        let key = (record.employee_id.clone(), record.period);
        if records.contains_key(&key) {
            return false;
        }
        records.insert(key, record);
        true
    }

    fn replace(&self, record: PayrollRecord) -> bool {
        let mut records = lock(&self.records);
        let key = (record.employee_id.clone(), record.period);
        if !records.contains_key(&key) {
            return false;
        }
        records.insert(key, record);
        true
    }

    fn list_for_period(&self, period: PayPeriod) -> Vec<PayrollRecord> {
        let mut result: Vec<PayrollRecord> = lock(&self.records)
            .values()
            .filter(|r| r.period == period)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        result
    }
}

/// In-memory attendance record store.
#[derive(Default)]
pub struct InMemoryAttendanceStore {
    records: Mutex<HashMap<(String, NaiveDate), AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn find(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord> {
        lock(&self.records)
            .get(&(employee_id.to_string(), date))
            .cloned()
    }

    fn insert_if_absent(&self, record: AttendanceRecord) -> bool {
        let mut records = lock(&self.records);
        let key = (record.employee_id.clone(), record.date);
        if records.contains_key(&key) {
            return false;
        }
        records.insert(key, record);
        true
    }

    fn update(&self, record: AttendanceRecord) -> bool {
        let mut records = lock(&self.records);
        let key = (record.employee_id.clone(), record.date);
        if !records.contains_key(&key) {
            return false;
        }
        records.insert(key, record);
        true
    }
}

/// In-memory leave request store.
#[derive(Default)]
pub struct InMemoryLeaveStore {
    requests: Mutex<Vec<LeaveRequest>>,
}

impl InMemoryLeaveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaveStore for InMemoryLeaveStore {
    fn get(&self, id: Uuid) -> Option<LeaveRequest> {
        lock(&self.requests).iter().find(|r| r.id == id).cloned()
    }

    fn insert(&self, request: LeaveRequest) {
        lock(&self.requests).push(request);
    }

    fn update(&self, request: LeaveRequest) -> bool {
        let mut requests = lock(&self.requests);
        match requests.iter_mut().find(|r| r.id == request.id) {
            Some(existing) => {
                *existing = request;
                true
            }
            None => false,
        }
    }

    fn list_for_employee(&self, employee_id: &str) -> Vec<LeaveRequest> {
        let mut result: Vec<LeaveRequest> = lock(&self.requests)
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        result
    }
}

/// In-memory leave balance store.
#[derive(Default)]
pub struct InMemoryBalanceStore {
    balances: Mutex<HashMap<(String, LeaveType), LeaveBalance>>,
}

impl InMemoryBalanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn get(&self, employee_id: &str, leave_type: LeaveType) -> Option<LeaveBalance> {
        lock(&self.balances)
            .get(&(employee_id.to_string(), leave_type))
            .cloned()
    }

    fn put(&self, balance: LeaveBalance) {
        let mut balances = lock(&self.balances);
        balances.insert((balance.employee_id.clone(), balance.leave_type), balance);
    }
}
