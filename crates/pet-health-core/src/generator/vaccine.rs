//! Vaccine planning: primary series, boosters, adult catch-up.

use chrono::NaiveDate;
use log::debug;

use crate::config::ADULT_START_MONTHS;
use crate::models::{HistoryRecord, Provenance, RecordKind, ScheduleItem, VaccineConfig};

use super::dates::{
    age_in_months, age_in_weeks, fast_forward, months, shift, weeks, window_around,
    PlanningHorizon,
};
use super::matching::vaccine_priority;
use super::note_with_prefix;

/// Gap between the two catch-up doses.
const CATCH_UP_INTERVAL_DAYS: i64 = 21;

/// Plan one vaccine config. `history` holds only matching records, oldest first.
pub(crate) fn plan_vaccine(
    birth: NaiveDate,
    horizon: &PlanningHorizon,
    config: &VaccineConfig,
    history: &[&HistoryRecord],
) -> Vec<ScheduleItem> {
    let age_weeks = age_in_weeks(birth, horizon.today);

    if age_weeks < i64::from(config.primary.end_weeks) {
        debug!("{}: primary series at {} weeks", config.name, age_weeks);
        return primary_series(birth, horizon, config, history);
    }

    if !history.is_empty() {
        debug!("{}: boosters after {} recorded doses", config.name, history.len());
        return boosters(birth, horizon, config, history);
    }

    let age_months = age_in_months(birth, horizon.today);
    if age_months >= ADULT_START_MONTHS {
        debug!("{}: adult catch-up at {} months", config.name, age_months);
        catch_up(horizon, config)
    } else {
        // Past the infant window but not yet adult, never vaccinated
        debug!("{}: late primary series at {} months", config.name, age_months);
        primary_series(birth, horizon, config, history)
    }
}

fn primary_series(
    birth: NaiveDate,
    horizon: &PlanningHorizon,
    config: &VaccineConfig,
    history: &[&HistoryRecord],
) -> Vec<ScheduleItem> {
    let primary = &config.primary;
    let completed = u32::try_from(history.len()).unwrap_or(u32::MAX);
    let remaining = primary.recommended_doses.saturating_sub(completed);

    let mut next = match history.last() {
        None => shift(birth, weeks(primary.start_weeks)),
        Some(last) => shift(last.actual_date, weeks(primary.interval_weeks)),
    };
    let mut dose_no = completed.saturating_add(1);
    let mut items = Vec::new();

    for _ in 0..remaining {
        let Some(date) = next else { break };
        if horizon.is_past_end(date) {
            break;
        }

        // A missed dose is due now
        let planned = horizon.clamp(date);
        let note = note_with_prefix(&format!("第{}针", dose_no), config.note_text());
        items.push(vaccine_item(
            config,
            dose_no,
            planned,
            note,
            Provenance::PrimaryDose,
        ));

        next = shift(planned, weeks(primary.interval_weeks));
        dose_no += 1;
    }

    items
}

fn boosters(
    birth: NaiveDate,
    horizon: &PlanningHorizon,
    config: &VaccineConfig,
    history: &[&HistoryRecord],
) -> Vec<ScheduleItem> {
    let Some(last) = history.last() else {
        return Vec::new();
    };

    let first_gap = if age_in_months(birth, last.actual_date) < ADULT_START_MONTHS {
        config.booster.first_booster_months
    } else {
        config.booster.interval_months
    };
    let stride = months(config.booster.interval_months);
    let recorded = u32::try_from(history.len()).unwrap_or(u32::MAX);
    let mut dose_no = last.dose_no.unwrap_or(recorded).saturating_add(1);

    // Boosters missed in the past are not re-planned, only counted
    let mut next = None;
    if let Some((date, skipped)) = shift(last.actual_date, months(first_gap))
        .and_then(|first| fast_forward(first, stride, horizon.today))
    {
        dose_no = dose_no.saturating_add(u32::try_from(skipped).unwrap_or(u32::MAX));
        next = Some(date);
    }

    let mut items = Vec::new();
    while let Some(date) = next {
        if horizon.is_past_end(date) {
            break;
        }
        let note = note_with_prefix("年度加强", config.note_text());
        items.push(vaccine_item(config, dose_no, date, note, Provenance::Booster));

        next = shift(date, stride);
        dose_no = dose_no.saturating_add(1);
    }

    items
}

fn catch_up(horizon: &PlanningHorizon, config: &VaccineConfig) -> Vec<ScheduleItem> {
    let first = horizon.today;
    let mut items = vec![vaccine_item(
        config,
        1,
        first,
        note_with_prefix("成年补种第1针", config.note_text()),
        Provenance::CatchUp,
    )];

    if let Some(second) = shift(first, CATCH_UP_INTERVAL_DAYS) {
        if !horizon.is_past_end(second) {
            items.push(vaccine_item(
                config,
                2,
                second,
                note_with_prefix("成年补种第2针", config.note_text()),
                Provenance::CatchUp,
            ));
        }
    }

    items
}

fn vaccine_item(
    config: &VaccineConfig,
    dose_no: u32,
    planned_date: NaiveDate,
    note: String,
    provenance: Provenance,
) -> ScheduleItem {
    ScheduleItem {
        kind: RecordKind::Vaccine,
        name: config.name.clone(),
        dose_no: Some(dose_no),
        planned_date,
        window: window_around(planned_date, config.window_days),
        note,
        priority: vaccine_priority(&config.vaccine_type),
        config_id: config.config_id(),
        provenance,
    }
}
