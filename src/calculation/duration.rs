//! Worked-duration arithmetic for the attendance ledger.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

/// Computes the worked duration between a clock-in and a clock-out on the
/// same day, truncated to whole minutes.
///
/// Zero and negative durations are rejected: a clock-out at or before the
/// clock-in time (clock skew, or a shift crossing midnight) yields
/// `InvalidDuration` rather than wrapping.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use talentflow_engine::calculation::worked_minutes;
///
/// let clock_in = NaiveTime::from_hms_opt(9, 15, 0).unwrap();
/// let clock_out = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
/// assert_eq!(worked_minutes(clock_in, clock_out).unwrap(), 555);
/// ```
pub fn worked_minutes(clock_in: NaiveTime, clock_out: NaiveTime) -> EngineResult<i64> {
    let minutes = (clock_out - clock_in).num_minutes();
    if minutes <= 0 {
        return Err(EngineError::InvalidDuration {
            clock_in,
            clock_out,
        });
    }
    Ok(minutes)
}

/// Formats a whole-minute duration as e.g. "9h 15m".
pub fn format_minutes(minutes: i64) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
