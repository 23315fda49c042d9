//! Attendance clock-in/out ledger.
//!
//! One record per employee per day: clock-in opens it, clock-out closes it
//! with a whole-minute duration, and a closed day is never reopened.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::calculation::{format_minutes, worked_minutes};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, DailyStatus};
use crate::notify::{NotificationKind, NotificationSink};
use crate::store::{AttendanceStore, EmployeeRoster};

/// Clock-ins strictly after this time of day are marked late.
pub fn late_clock_in_cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 30, 0).expect("09:30:00 is a valid time")
}

/// The attendance ledger component.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDateTime;
/// use talentflow_engine::ledger::AttendanceLedger;
/// use talentflow_engine::models::{AttendanceStatus, Employee, EmployeeStatus};
/// use talentflow_engine::notify::NullSink;
/// use talentflow_engine::store::{InMemoryAttendanceStore, InMemoryRoster};
/// use rust_decimal::Decimal;
///
/// let roster = Arc::new(InMemoryRoster::with_employees(vec![Employee {
///     id: "EMP001".to_string(),
///     name: "Rajesh Kumar".to_string(),
///     designation: "Engineer".to_string(),
///     department: "Development".to_string(),
///     email: "rajesh@company.com".to_string(),
///     phone: "+91 9876543210".to_string(),
///     basic_salary: Decimal::from(70000),
///     status: EmployeeStatus::Active,
///     join_date: chrono::NaiveDate::from_ymd_opt(2019, 3, 15).unwrap(),
/// }]));
/// let ledger = AttendanceLedger::new(
///     roster,
///     Arc::new(InMemoryAttendanceStore::new()),
///     Arc::new(NullSink),
/// );
///
/// let ts = NaiveDateTime::parse_from_str("2024-11-25 09:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let record = ledger.clock_in("EMP001", ts).unwrap();
/// assert_eq!(record.status, AttendanceStatus::Present);
/// ```
pub struct AttendanceLedger {
    roster: Arc<dyn EmployeeRoster>,
    store: Arc<dyn AttendanceStore>,
    notifier: Arc<dyn NotificationSink>,
}

impl AttendanceLedger {
    /// Creates a ledger over the given collaborators.
    pub fn new(
        roster: Arc<dyn EmployeeRoster>,
        store: Arc<dyn AttendanceStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            roster,
            store,
            notifier,
        }
    }

    /// Opens the day's attendance record for an employee.
    ///
    /// The attendance day is the date of `timestamp`. Fails with
    /// `EmployeeNotFound` for an unknown employee and `AlreadyClockedIn`
    /// when any record (open or closed) exists for the day. Clock-ins after
    /// 09:30 are marked [`AttendanceStatus::Late`].
    pub fn clock_in(
        &self,
        employee_id: &str,
        timestamp: NaiveDateTime,
    ) -> EngineResult<AttendanceRecord> {
        let employee = self
            .roster
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        let date = timestamp.date();
        let time = timestamp.time();

        if self.store.find(employee_id, date).is_some() {
            return Err(EngineError::AlreadyClockedIn {
                employee_id: employee_id.to_string(),
                date,
            });
        }

        let status = if time > late_clock_in_cutoff() {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        };

        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            date,
            clock_in: time,
            clock_out: None,
            duration_minutes: None,
            status,
        };

        if !self.store.insert_if_absent(record.clone()) {
            return Err(EngineError::AlreadyClockedIn {
                employee_id: employee_id.to_string(),
                date,
            });
        }

        self.notifier.notify(
            NotificationKind::Success,
            &format!("{} clocked in at {}", employee.name, time.format("%H:%M")),
        );
        Ok(record)
    }

    /// Closes the day's open attendance record for an employee.
    ///
    /// Fails with `NoOpenClockIn` when no open record exists for the date of
    /// `timestamp`, and with `InvalidDuration` when the clock-out time is
    /// not after the clock-in time (the record stays open).
    pub fn clock_out(
        &self,
        employee_id: &str,
        timestamp: NaiveDateTime,
    ) -> EngineResult<AttendanceRecord> {
        let employee = self
            .roster
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        let date = timestamp.date();
        let time = timestamp.time();

        let record = self
            .store
            .find(employee_id, date)
            .filter(AttendanceRecord::is_open)
            .ok_or_else(|| EngineError::NoOpenClockIn {
                employee_id: employee_id.to_string(),
                date,
            })?;

        let minutes = worked_minutes(record.clock_in, time)?;

        let closed = AttendanceRecord {
            clock_out: Some(time),
            duration_minutes: Some(minutes),
            ..record
        };

        if !self.store.update(closed.clone()) {
            return Err(EngineError::NoOpenClockIn {
                employee_id: employee_id.to_string(),
                date,
            });
        }

        self.notifier.notify(
            NotificationKind::Success,
            &format!(
                "{} clocked out at {} ({})",
                employee.name,
                time.format("%H:%M"),
                format_minutes(minutes)
            ),
        );
        Ok(closed)
    }

    /// Reports the state of one employee-day.
    pub fn daily_status(&self, employee_id: &str, date: NaiveDate) -> EngineResult<DailyStatus> {
        if self.roster.get(employee_id).is_none() {
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }

        let status = match self.store.find(employee_id, date) {
            None => DailyStatus::NotClockedIn,
            Some(record) => match (record.clock_out, record.duration_minutes) {
                (Some(clock_out), Some(duration_minutes)) => DailyStatus::Closed {
                    clock_in: record.clock_in,
                    clock_out,
                    duration_minutes,
                    status: record.status,
                },
                _ => DailyStatus::Open {
                    clock_in: record.clock_in,
                },
            },
        };
        Ok(status)
    }
}
