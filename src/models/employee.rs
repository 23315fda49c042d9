//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing workers in the HR system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents whether an employee is currently on the active roster.
///
/// Employees are never physically deleted once payroll or attendance history
/// references them; offboarding flips the status to `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed; included in batch payroll runs.
    Active,
    /// Offboarded; excluded from batch payroll runs.
    Inactive,
}

/// Represents an employee on the company roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "EMP001"). Stable for the
    /// lifetime of the employee; historical records reference it.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's job title (e.g., "Senior Software Engineer").
    pub designation: String,
    /// The department the employee belongs to.
    pub department: String,
    /// Work email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Monthly basic salary. Never negative.
    pub basic_salary: Decimal,
    /// Whether the employee is on the active roster.
    pub status: EmployeeStatus,
    /// The date the employee joined the company.
    pub join_date: NaiveDate,
}

impl Employee {
    /// Returns true if the employee is on the active roster.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns true if the employee matches a case-insensitive directory
    /// search over name, designation, and department.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.designation.to_lowercase().contains(&term)
            || self.department.to_lowercase().contains(&term)
    }
}
