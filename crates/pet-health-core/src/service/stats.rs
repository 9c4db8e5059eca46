//! Views derived from a generated plan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::generator::shift;
use crate::models::{Priority, ScheduleItem};

/// Look-ahead used by [`ScheduleStats`] for "upcoming".
pub const DEFAULT_UPCOMING_DAYS: u32 = 30;

/// Items planned within `[today, today + days]`.
pub fn upcoming(items: &[ScheduleItem], today: NaiveDate, days: u32) -> Vec<&ScheduleItem> {
    let until = shift(today, i64::from(days)).unwrap_or(NaiveDate::MAX);
    items
        .iter()
        .filter(|item| item.planned_date >= today && item.planned_date <= until)
        .collect()
}

/// Items whose window closed before `today`.
pub fn overdue(items: &[ScheduleItem], today: NaiveDate) -> Vec<&ScheduleItem> {
    items.iter().filter(|item| item.is_overdue(today)).collect()
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleStats {
    pub total: usize,
    pub vaccines: usize,
    pub deworm: usize,
    pub upcoming: usize,
    pub overdue: usize,
    pub high_priority: usize,
}

impl ScheduleStats {
    pub fn from_items(items: &[ScheduleItem], today: NaiveDate) -> Self {
        Self {
            total: items.len(),
            vaccines: items.iter().filter(|i| i.is_vaccine()).count(),
            deworm: items.iter().filter(|i| i.is_deworm()).count(),
            upcoming: upcoming(items, today, DEFAULT_UPCOMING_DAYS).len(),
            overdue: overdue(items, today).len(),
            high_priority: items
                .iter()
                .filter(|i| i.priority == Priority::High)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{window_around, GenerateOptions, ScheduleGenerator};
    use crate::models::{Provenance, RecordKind, Species};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item_on(planned: NaiveDate, priority: Priority) -> ScheduleItem {
        ScheduleItem {
            kind: RecordKind::Vaccine,
            name: "狂犬疫苗".into(),
            dose_no: Some(1),
            planned_date: planned,
            window: window_around(planned, 14),
            note: String::new(),
            priority,
            config_id: "rabies".into(),
            provenance: Provenance::Booster,
        }
    }

    #[test]
    fn test_upcoming_bounds_inclusive() {
        let today = date(2026, 3, 1);
        let items = vec![
            item_on(date(2026, 2, 28), Priority::High),
            item_on(today, Priority::High),
            item_on(date(2026, 3, 31), Priority::High),
            item_on(date(2026, 4, 1), Priority::High),
        ];

        let soon = upcoming(&items, today, 30);
        assert_eq!(soon.len(), 2);
        assert_eq!(soon[0].planned_date, today);
    }

    #[test]
    fn test_overdue_after_window() {
        let today = date(2026, 3, 1);
        let items = vec![
            // Window ends 2026-02-20
            item_on(date(2026, 2, 6), Priority::High),
            // Window ends 2026-03-01, still open today
            item_on(date(2026, 2, 15), Priority::Medium),
        ];
        let late = overdue(&items, today);
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].planned_date, date(2026, 2, 6));
    }

    #[test]
    fn test_stats_for_generated_plan() {
        let today = date(2026, 3, 1);
        let items = ScheduleGenerator::new().generate_schedule(
            Species::Dog,
            "2024-01-10",
            &[],
            &GenerateOptions::default().with_today(today),
        );
        let stats = ScheduleStats::from_items(&items, today);

        assert_eq!(stats.total, items.len());
        assert_eq!(stats.vaccines + stats.deworm, stats.total);
        // Catch-up for all four dog vaccines, all high priority
        assert_eq!(stats.high_priority, stats.vaccines);
        assert_eq!(stats.overdue, 0);
        assert!(stats.upcoming >= 4);
    }
}
