//! Attendance record model and daily status.
//!
//! This module defines the per-day attendance ledger entry created by
//! clock-in and closed by clock-out.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::format_minutes;

/// The attendance status assigned at clock-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Clocked in at or before the late cutoff.
    Present,
    /// Clocked in after the late cutoff.
    Late,
    /// No clock-in for the day; assigned by reporting, never by the ledger.
    Absent,
}

/// A single day's attendance entry for one employee.
///
/// Created by clock-in with `clock_out = None` (the "open" state); mutated
/// exactly once by clock-out, which sets `clock_out` and `duration_minutes`.
/// A closed record is never reopened. At most one record exists per
/// `(employee_id, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The attendance day (the clock-in date).
    pub date: NaiveDate,
    /// Time of day the employee clocked in.
    pub clock_in: NaiveTime,
    /// Time of day the employee clocked out; `None` while the record is open.
    pub clock_out: Option<NaiveTime>,
    /// Worked duration in whole minutes; `None` while the record is open.
    pub duration_minutes: Option<i64>,
    /// Status assigned at clock-in.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true while the record is awaiting clock-out.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// The worked duration formatted as e.g. "9h 15m", or `None` while open.
    pub fn formatted_duration(&self) -> Option<String> {
        self.duration_minutes.map(format_minutes)
    }
}

/// The state of one employee-day in the attendance ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DailyStatus {
    /// No record exists for the day.
    NotClockedIn,
    /// A clock-in exists without a matching clock-out.
    Open {
        /// Time of day the employee clocked in.
        clock_in: NaiveTime,
    },
    /// The day is complete.
    Closed {
        /// Time of day the employee clocked in.
        clock_in: NaiveTime,
        /// Time of day the employee clocked out.
        clock_out: NaiveTime,
        /// Worked duration in whole minutes.
        duration_minutes: i64,
        /// Status assigned at clock-in.
        status: AttendanceStatus,
    },
}
