//! Idempotent payroll processing.
//!
//! All payroll record creation funnels through this component: the batch run
//! and the single-employee path share one uniqueness check per
//! `(employee_id, period)`, and only the explicit reprocess operation can
//! replace an existing record.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{SalaryBreakdown, compute_breakdown};
use crate::clock::TimeSource;
use crate::config::SettingsStore;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, PayrollRecord};
use crate::notify::{NotificationKind, NotificationSink};
use crate::store::{EmployeeRoster, PayrollStore};

/// The outcome of one batch payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRun {
    /// The period the run covered.
    pub period: PayPeriod,
    /// Records created by this run, in roster order.
    pub created: Vec<PayrollRecord>,
    /// Active employees skipped because a record already existed.
    pub skipped: usize,
}

/// The payroll processor component.
pub struct PayrollProcessor {
    roster: Arc<dyn EmployeeRoster>,
    records: Arc<dyn PayrollStore>,
    settings: SettingsStore,
    clock: Arc<dyn TimeSource>,
    notifier: Arc<dyn NotificationSink>,
}

impl PayrollProcessor {
    /// Creates a processor over the given collaborators.
    pub fn new(
        roster: Arc<dyn EmployeeRoster>,
        records: Arc<dyn PayrollStore>,
        settings: SettingsStore,
        clock: Arc<dyn TimeSource>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            roster,
            records,
            settings,
            clock,
            notifier,
        }
    }

    /// Computes a salary breakdown without persisting anything.
    pub fn preview(&self, basic_salary: Decimal) -> EngineResult<SalaryBreakdown> {
        compute_breakdown(basic_salary, &self.settings.current())
    }

    /// Runs payroll for every active employee in the period.
    ///
    /// Employees that already hold a record for the period are skipped, so
    /// running the batch twice creates no duplicates and changes no existing
    /// record. Returns only the records created by this run plus the skip
    /// count.
    pub fn process_period(&self, period: PayPeriod) -> EngineResult<PeriodRun> {
        let config = self.settings.current();
        let mut created = Vec::new();
        let mut skipped = 0usize;

        for employee in self.roster.list_active() {
            if self.records.find(&employee.id, period).is_some() {
                skipped += 1;
                continue;
            }

            let record = self.build_record(&employee.id, employee.basic_salary, period, &config)?;
            if self.records.insert_if_absent(record.clone()) {
                created.push(record);
            } else {
                // a concurrent run won the insert
                skipped += 1;
            }
        }

        if created.is_empty() {
            self.notifier.notify(
                NotificationKind::Warning,
                &format!("All employees already processed for {}", period),
            );
        } else {
            self.notifier.notify(
                NotificationKind::Success,
                &format!(
                    "Bulk payroll processed for {} employee(s) in {}",
                    created.len(),
                    period
                ),
            );
        }

        Ok(PeriodRun {
            period,
            created,
            skipped,
        })
    }

    /// Runs payroll for one employee in the period.
    ///
    /// Follows the same idempotency rule as the batch: an existing record
    /// for the period fails with `AlreadyProcessed` rather than silently
    /// recomputing. `basic_override`, when supplied, replaces the roster
    /// salary for this computation only.
    pub fn process_one(
        &self,
        employee_id: &str,
        basic_override: Option<Decimal>,
        period: PayPeriod,
    ) -> EngineResult<PayrollRecord> {
        let employee = self
            .roster
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        if self.records.find(employee_id, period).is_some() {
            return Err(EngineError::AlreadyProcessed {
                employee_id: employee_id.to_string(),
                period,
            });
        }

        let basic = basic_override.unwrap_or(employee.basic_salary);
        let config = self.settings.current();
        let record = self.build_record(employee_id, basic, period, &config)?;

        if !self.records.insert_if_absent(record.clone()) {
            return Err(EngineError::AlreadyProcessed {
                employee_id: employee_id.to_string(),
                period,
            });
        }

        self.notifier.notify(
            NotificationKind::Success,
            &format!(
                "Payroll processed for {} in {}: net {}",
                employee.name, period, record.net_salary
            ),
        );
        Ok(record)
    }

    /// Replaces the existing record for an employee and period.
    ///
    /// This is the only path that overwrites payroll history, and it
    /// requires the record to exist: first-time processing must go through
    /// [`PayrollProcessor::process_one`] or the batch. The replacement gets
    /// a fresh id and timestamp and recomputes from the current roster
    /// salary and configuration.
    pub fn reprocess_one(
        &self,
        employee_id: &str,
        period: PayPeriod,
    ) -> EngineResult<PayrollRecord> {
        let employee = self
            .roster
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        if self.records.find(employee_id, period).is_none() {
            return Err(EngineError::PayrollRecordNotFound {
                employee_id: employee_id.to_string(),
                period,
            });
        }

        let config = self.settings.current();
        let record = self.build_record(employee_id, employee.basic_salary, period, &config)?;

        if !self.records.replace(record.clone()) {
            return Err(EngineError::PayrollRecordNotFound {
                employee_id: employee_id.to_string(),
                period,
            });
        }

        self.notifier.notify(
            NotificationKind::Warning,
            &format!("Payroll reprocessed for {} in {}", employee.name, period),
        );
        Ok(record)
    }

    /// All stored records for a period.
    pub fn records_for_period(&self, period: PayPeriod) -> Vec<PayrollRecord> {
        self.records.list_for_period(period)
    }

    fn build_record(
        &self,
        employee_id: &str,
        basic_salary: Decimal,
        period: PayPeriod,
        config: &crate::config::PayrollConfiguration,
    ) -> EngineResult<PayrollRecord> {
        let breakdown = compute_breakdown(basic_salary, config)?.rounded();

        Ok(PayrollRecord {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            period,
            basic_salary: breakdown.basic,
            hra: breakdown.hra,
            da: breakdown.da,
            gross_salary: breakdown.gross,
            pf: breakdown.pf,
            esi: breakdown.esi,
            tds: breakdown.tds,
            deductions: breakdown.deductions,
            net_salary: breakdown.net,
            processed_at: self.clock.now(),
        })
    }
}
