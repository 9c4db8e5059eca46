//! Conversions between stored records, history, and schedule items.

use chrono::NaiveDate;

use crate::models::{
    DewormRecord, DewormType, HistoryRecord, RecordKind, ScheduleItem, VaccineRecord,
};

/// Generator history from stored records.
///
/// Only completed records with an actual date count. Deworm records are
/// named after their sub-type so name matching still works for them.
pub fn history_from_records(
    vaccines: &[VaccineRecord],
    deworming: &[DewormRecord],
) -> Vec<HistoryRecord> {
    let vaccine_history = vaccines.iter().filter_map(|record| {
        record
            .completed_on()
            .map(|date| HistoryRecord::vaccine(record.name.clone(), date, Some(record.dose_no)))
    });

    let deworm_history = deworming.iter().filter_map(|record| {
        record.completed_on().map(|date| {
            HistoryRecord::deworm(
                record.deworm_type.display_name(),
                date,
                Some(record.deworm_type),
            )
        })
    });

    vaccine_history.chain(deworm_history).collect()
}

/// History record for a schedule item done on `actual_date`.
///
/// This is what the caller persists when an owner marks an item complete;
/// regenerating afterwards moves the plan forward.
pub fn complete_item(item: &ScheduleItem, actual_date: NaiveDate) -> HistoryRecord {
    match item.kind {
        RecordKind::Vaccine => {
            HistoryRecord::vaccine(item.name.clone(), actual_date, Some(item.dose_no.unwrap_or(1)))
        }
        RecordKind::Deworm => HistoryRecord::deworm(
            item.name.clone(),
            actual_date,
            Some(DewormType::infer_from_name(&item.name)),
        ),
    }
}
