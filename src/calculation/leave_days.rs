//! Inclusive leave-day counting.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Counts the days in an inclusive date range.
///
/// Both endpoints are counted: a single-day range yields 1. An end date
/// before the start date is rejected with `InvalidInput`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use talentflow_engine::calculation::count_leave_days;
///
/// let start = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
/// assert_eq!(count_leave_days(start, end).unwrap(), 6);
/// assert_eq!(count_leave_days(start, start).unwrap(), 1);
/// ```
pub fn count_leave_days(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<i64> {
    if end_date < start_date {
        return Err(EngineError::InvalidInput {
            field: "end_date".to_string(),
            message: format!("{} is before start date {}", end_date, start_date),
        });
    }
    Ok((end_date - start_date).num_days() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// LD-001: the reference range counts six days inclusively
    #[test]
    fn test_six_day_inclusive_range() {
        let days = count_leave_days(make_date("2024-12-15"), make_date("2024-12-20")).unwrap();
        assert_eq!(days, 6);
    }

    /// LD-002: a single-day range counts one day
    #[test]
    fn test_single_day_counts_one() {
        let days = count_leave_days(make_date("2024-11-28"), make_date("2024-11-28")).unwrap();
        assert_eq!(days, 1);
    }

    /// LD-003: reversed range is rejected
    #[test]
    fn test_reversed_range_rejected() {
        let result = count_leave_days(make_date("2024-12-20"), make_date("2024-12-15"));
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "end_date"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_range_across_month_boundary() {
        let days = count_leave_days(make_date("2024-11-28"), make_date("2024-12-02")).unwrap();
        assert_eq!(days, 5);
    }

    #[test]
    fn test_range_across_leap_day() {
        let days = count_leave_days(make_date("2024-02-28"), make_date("2024-03-01")).unwrap();
        assert_eq!(days, 3);
    }
}
