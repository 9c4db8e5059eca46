//! Deworm planning across the juvenile and adult stages.

use chrono::NaiveDate;
use log::debug;

use crate::models::{DewormConfig, HistoryRecord, Provenance, RecordKind, ScheduleItem};

use super::dates::{age_in_months, fast_forward, months, shift, window_around, PlanningHorizon};
use super::matching::deworm_priority;

/// Plan one deworm config. `history` holds only matching records, oldest first.
///
/// The interval after each occurrence follows the pet's age on that
/// occurrence, so a juvenile switches to the adult interval on its own.
pub(crate) fn plan_deworm(
    birth: NaiveDate,
    horizon: &PlanningHorizon,
    config: &DewormConfig,
    history: &[&HistoryRecord],
) -> Vec<ScheduleItem> {
    let adult_from = i64::from(config.puppy.end_months);

    let mut next = match history.last() {
        None => shift(birth, months(config.puppy.start_months)).map(|d| horizon.clamp(d)),
        Some(last) => {
            let interval = config.interval_at_age(age_in_months(birth, last.actual_date));
            shift(last.actual_date, months(interval))
        }
    };
    debug!(
        "{}: {} recorded treatments, first candidate {:?}",
        config.name,
        history.len(),
        next
    );

    let mut items = Vec::new();
    while let Some(date) = next {
        if horizon.is_past_end(date) {
            break;
        }

        let age = age_in_months(birth, date);
        let stride = months(config.interval_at_age(age));

        if date < horizon.today {
            // Adult interval is fixed from here on, so jump straight to today
            next = if age >= adult_from {
                fast_forward(date, stride, horizon.today).map(|(d, _)| d)
            } else {
                shift(date, stride)
            };
            continue;
        }

        items.push(deworm_item(config, date));
        next = shift(date, stride);
    }

    items
}

fn deworm_item(config: &DewormConfig, planned_date: NaiveDate) -> ScheduleItem {
    ScheduleItem {
        kind: RecordKind::Deworm,
        name: config.name.clone(),
        dose_no: None,
        planned_date,
        window: window_around(planned_date, config.window_days),
        note: config.note_text().to_string(),
        priority: deworm_priority(config.deworm_type),
        config_id: config.config_id(),
        provenance: Provenance::Deworm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::dog_deworm_configs;
    use crate::models::{DewormType, Priority};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn days_before_today(days: i64) -> NaiveDate {
        shift(today(), -days).unwrap()
    }

    fn internal() -> DewormConfig {
        dog_deworm_configs().remove(0)
    }

    fn external() -> DewormConfig {
        dog_deworm_configs().remove(1)
    }

    fn gaps(items: &[ScheduleItem]) -> Vec<i64> {
        items
            .windows(2)
            .map(|w| (w[1].planned_date - w[0].planned_date).num_days())
            .collect()
    }

    #[test]
    fn test_newborn_starts_at_stage_start() {
        // 2 weeks old: internal deworming starts at 1 month
        let birth = days_before_today(14);
        let horizon = PlanningHorizon::new(today(), 6);
        let items = plan_deworm(birth, &horizon, &internal(), &[]);

        assert_eq!(items[0].planned_date, shift(birth, 30).unwrap());
        assert!(gaps(&items).iter().all(|&g| g == 30));
    }

    #[test]
    fn test_juvenile_switches_to_adult_interval() {
        let birth = days_before_today(14);
        let horizon = PlanningHorizon::new(today(), 18);
        let items = plan_deworm(birth, &horizon, &internal(), &[]);

        // Monthly until 6 months of age, then every 3 months
        let gaps = gaps(&items);
        assert_eq!(&gaps[..5], &[30, 30, 30, 30, 30]);
        assert!(gaps[5..].iter().all(|&g| g == 90));
    }

    #[test]
    fn test_adult_without_history_starts_today() {
        let birth = days_before_today(2 * 365);
        let horizon = PlanningHorizon::new(today(), 12);

        let internal_items = plan_deworm(birth, &horizon, &internal(), &[]);
        assert_eq!(internal_items[0].planned_date, today());
        assert_eq!(internal_items.len(), 5);

        let external_items = plan_deworm(birth, &horizon, &external(), &[]);
        assert_eq!(external_items.len(), 13);
    }

    #[test]
    fn test_continues_from_last_treatment() {
        // Adult, treated 30 days ago: next internal treatment in 60 days
        let birth = days_before_today(3 * 365);
        let record =
            HistoryRecord::deworm("体内驱虫", days_before_today(30), Some(DewormType::Internal));
        let horizon = PlanningHorizon::new(today(), 12);
        let items = plan_deworm(birth, &horizon, &internal(), &[&record]);

        assert_eq!(items[0].planned_date, shift(today(), 60).unwrap());
        assert!(gaps(&items).iter().all(|&g| g == 90));
    }

    #[test]
    fn test_stale_history_skips_past_occurrences() {
        let birth = days_before_today(5 * 365);
        let record =
            HistoryRecord::deworm("体外驱虫", days_before_today(1000), Some(DewormType::External));
        let horizon = PlanningHorizon::new(today(), 3);
        let items = plan_deworm(birth, &horizon, &external(), &[&record]);

        // 1000 days behind at 30-day steps lands 20 days ahead
        assert_eq!(items[0].planned_date, shift(today(), 20).unwrap());
        assert!(items.iter().all(|i| i.planned_date >= today()));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_juvenile_history_steps_through_past() {
        // 4 months old, last treated at 1 month: monthly steps catch up to today
        let birth = days_before_today(120);
        let record =
            HistoryRecord::deworm("体内驱虫", shift(birth, 30).unwrap(), Some(DewormType::Internal));
        let horizon = PlanningHorizon::new(today(), 1);
        let items = plan_deworm(birth, &horizon, &internal(), &[&record]);

        assert_eq!(items[0].planned_date, today());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_deworm_item_fields() {
        let birth = days_before_today(2 * 365);
        let horizon = PlanningHorizon::new(today(), 1);
        let items = plan_deworm(birth, &horizon, &external(), &[]);

        let item = &items[0];
        assert_eq!(item.config_id, "external_deworm");
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.dose_no, None);
        assert_eq!(item.window.span_days(), 14);
        assert!(item.note.contains("跳蚤"));
    }
}
