//! Day-granular date arithmetic.
//!
//! Weeks are 7 days and months are a flat 30 days, so dates drift against
//! calendar months. Stored schedules were computed the same way; keep the
//! flat month unless they are migrated too.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::DateWindow;

pub const DAYS_PER_WEEK: i64 = 7;
pub const DAYS_PER_MONTH: i64 = 30;

/// Parse a birthday or treatment date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, or an RFC 3339 timestamp (taken in UTC).
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}

pub fn weeks(n: u32) -> i64 {
    i64::from(n) * DAYS_PER_WEEK
}

pub fn months(n: u32) -> i64 {
    i64::from(n) * DAYS_PER_MONTH
}

/// `date + days`, or `None` past the representable range.
pub fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

pub fn age_in_weeks(birth: NaiveDate, on: NaiveDate) -> i64 {
    (on - birth).num_days().div_euclid(DAYS_PER_WEEK)
}

pub fn age_in_months(birth: NaiveDate, on: NaiveDate) -> i64 {
    (on - birth).num_days().div_euclid(DAYS_PER_MONTH)
}

/// `[planned - days, planned + days]`.
pub fn window_around(planned: NaiveDate, days: u32) -> DateWindow {
    let days = i64::from(days);
    DateWindow {
        start: shift(planned, -days).unwrap_or(planned),
        end: shift(planned, days).unwrap_or(planned),
    }
}

/// First date `start + k * stride` (k >= 0) that is not before `today`,
/// together with `k`.
pub fn fast_forward(start: NaiveDate, stride: i64, today: NaiveDate) -> Option<(NaiveDate, i64)> {
    if start >= today || stride <= 0 {
        return Some((start, 0));
    }
    let behind = (today - start).num_days();
    let steps = (behind + stride - 1) / stride;
    shift(start, steps * stride).map(|date| (date, steps))
}

/// The `[today, today + planning months]` span items are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanningHorizon {
    pub today: NaiveDate,
    pub end: NaiveDate,
}

impl PlanningHorizon {
    pub fn new(today: NaiveDate, planning_months: u32) -> Self {
        Self {
            today,
            end: shift(today, months(planning_months)).unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn is_past_end(&self, date: NaiveDate) -> bool {
        date > self.end
    }

    /// Move a date that has already passed up to today.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.max(self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(parse_date("2025-03-09"), Some(date(2025, 3, 9)));
        assert_eq!(parse_date(" 2025/03/09 "), Some(date(2025, 3, 9)));
        assert_eq!(
            parse_date("2025-03-09T23:30:00+08:00"),
            Some(date(2025, 3, 9))
        );
        assert_eq!(
            parse_date("2025-03-09T02:00:00+08:00"),
            Some(date(2025, 3, 8))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("invalid-date"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }

    #[test]
    fn test_ages_floor() {
        let birth = date(2025, 1, 1);
        assert_eq!(age_in_weeks(birth, date(2025, 1, 7)), 0);
        assert_eq!(age_in_weeks(birth, date(2025, 1, 8)), 1);
        assert_eq!(age_in_months(birth, date(2025, 1, 31)), 1);
        assert_eq!(age_in_months(birth, date(2025, 1, 30)), 0);
        // Before birth rounds down, not toward zero
        assert_eq!(age_in_weeks(birth, date(2024, 12, 31)), -1);
    }

    #[test]
    fn test_flat_months() {
        // 30-day months, not calendar months
        assert_eq!(shift(date(2025, 1, 31), months(1)), Some(date(2025, 3, 2)));
        assert_eq!(shift(date(2025, 1, 1), months(12)), Some(date(2025, 12, 27)));
    }

    #[test]
    fn test_window_around() {
        let window = window_around(date(2025, 6, 15), 7);
        assert_eq!(window.start, date(2025, 6, 8));
        assert_eq!(window.end, date(2025, 6, 22));
    }

    #[test]
    fn test_fast_forward() {
        let today = date(2025, 6, 1);
        assert_eq!(
            fast_forward(date(2025, 6, 10), 30, today),
            Some((date(2025, 6, 10), 0))
        );
        // 100 days behind with a 30-day stride: 4 steps
        let (next, steps) = fast_forward(date(2025, 2, 21), 30, today).unwrap();
        assert_eq!(steps, 4);
        assert_eq!(next, date(2025, 6, 21));
        // Landing exactly on today
        assert_eq!(
            fast_forward(date(2025, 5, 2), 30, today),
            Some((today, 1))
        );
    }

    #[test]
    fn test_horizon() {
        let horizon = PlanningHorizon::new(date(2025, 1, 1), 12);
        assert_eq!(horizon.end, date(2025, 12, 27));
        assert!(!horizon.is_past_end(date(2025, 12, 27)));
        assert!(horizon.is_past_end(date(2025, 12, 28)));
        assert_eq!(horizon.clamp(date(2024, 5, 1)), date(2025, 1, 1));
        assert_eq!(horizon.clamp(date(2025, 5, 1)), date(2025, 5, 1));
    }
}
