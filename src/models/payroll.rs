//! Payroll period and record models.
//!
//! This module contains the [`PayPeriod`] value type and the persisted
//! [`PayrollRecord`] entity.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// A payroll period identified by calendar month and year.
///
/// Payroll records are unique per `(employee_id, period)`; the period is the
/// natural key of the idempotency guarantee.
///
/// # Example
///
/// ```
/// use talentflow_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(11, 2024).unwrap();
/// assert_eq!(period.to_string(), "November 2024");
/// assert!(PayPeriod::new(13, 2024).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar month, 1 through 12.
    month: u32,
    /// Calendar year.
    year: i32,
}

impl PayPeriod {
    /// Creates a pay period, validating that the month is in 1..=12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidInput {
                field: "month".to_string(),
                message: format!("{} is not a calendar month (expected 1-12)", month),
            });
        }
        Ok(Self { month, year })
    }

    /// The calendar month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The first day of the period.
    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction, so day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("validated month always yields a valid first day")
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day().format("%B %Y"))
    }
}

/// A processed payroll entry for one employee and one period.
///
/// Records are immutable once stored: reprocessing a period replaces the
/// record through an explicit operation rather than mutating it in place.
/// All monetary fields are rounded to whole currency units at creation, and
/// the aggregates are computed from the rounded components so that
/// `gross_salary = basic_salary + hra + da` and
/// `net_salary = gross_salary - deductions` hold exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The payroll period.
    pub period: PayPeriod,
    /// Monthly basic salary the computation ran on.
    pub basic_salary: Decimal,
    /// House Rent Allowance component.
    pub hra: Decimal,
    /// Dearness Allowance component.
    pub da: Decimal,
    /// Gross salary: basic + HRA + DA.
    pub gross_salary: Decimal,
    /// Provident Fund deduction.
    pub pf: Decimal,
    /// Employee State Insurance deduction.
    pub esi: Decimal,
    /// Tax Deducted at Source.
    pub tds: Decimal,
    /// Total deductions: PF + ESI + TDS.
    pub deductions: Decimal,
    /// Net salary: gross - deductions.
    pub net_salary: Decimal,
    /// When the record was created.
    pub processed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_rejects_month_zero() {
        let result = PayPeriod::new(0, 2024);
        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "month"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_period_rejects_month_thirteen() {
        assert!(PayPeriod::new(13, 2024).is_err());
    }

    #[test]
    fn test_period_display_uses_month_name() {
        assert_eq!(PayPeriod::new(1, 2025).unwrap().to_string(), "January 2025");
        assert_eq!(
            PayPeriod::new(12, 2024).unwrap().to_string(),
            "December 2024"
        );
    }

    #[test]
    fn test_period_equality_and_hash_key() {
        use std::collections::HashMap;

        let a = PayPeriod::new(11, 2024).unwrap();
        let b = PayPeriod::new(11, 2024).unwrap();
        assert_eq!(a, b);

        let mut map: HashMap<(String, PayPeriod), u32> = HashMap::new();
        map.insert(("EMP001".to_string(), a), 1);
        assert!(map.contains_key(&("EMP001".to_string(), b)));
    }

    #[test]
    fn test_period_serialization_round_trip() {
        let period = PayPeriod::new(7, 2025).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, r#"{"month":7,"year":2025}"#);
        let deserialized: PayPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = PayrollRecord {
            id: Uuid::nil(),
            employee_id: "EMP001".to_string(),
            period: PayPeriod::new(11, 2024).unwrap(),
            basic_salary: Decimal::from(70000),
            hra: Decimal::from(28000),
            da: Decimal::from(7000),
            gross_salary: Decimal::from(105000),
            pf: Decimal::from(8400),
            esi: Decimal::ZERO,
            tds: Decimal::from(10500),
            deductions: Decimal::from(18900),
            net_salary: Decimal::from(86100),
            processed_at: DateTime::parse_from_rfc3339("2024-11-25T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: PayrollRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_record_identities_hold() {
        let record = PayrollRecord {
            id: Uuid::nil(),
            employee_id: "EMP002".to_string(),
            period: PayPeriod::new(11, 2024).unwrap(),
            basic_salary: Decimal::from(100000),
            hra: Decimal::from(40000),
            da: Decimal::from(10000),
            gross_salary: Decimal::from(150000),
            pf: Decimal::from(12000),
            esi: Decimal::ZERO,
            tds: Decimal::from(15000),
            deductions: Decimal::from(27000),
            net_salary: Decimal::from(123000),
            processed_at: Utc::now(),
        };

        assert_eq!(
            record.gross_salary,
            record.basic_salary + record.hra + record.da
        );
        assert_eq!(record.deductions, record.pf + record.esi + record.tds);
        assert_eq!(record.net_salary, record.gross_salary - record.deductions);
    }
}
