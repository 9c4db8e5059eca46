//! Generated schedule models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::history::RecordKind;

/// Priority of a planned treatment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Inclusive range of acceptable execution dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Length in days between the two edges.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Which generator branch produced an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Infant primary series dose
    PrimaryDose,
    /// Periodic booster after the primary series
    Booster,
    /// Compressed series for an adult with no history
    CatchUp,
    /// Deworming treatment
    Deworm,
}

/// A single planned future treatment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleItem {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub name: String,
    /// Dose number (vaccines only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_no: Option<u32>,
    pub planned_date: NaiveDate,
    pub window: DateWindow,
    pub note: String,
    pub priority: Priority,
    /// Identifier of the source configuration
    pub config_id: String,
    pub provenance: Provenance,
}

impl ScheduleItem {
    pub fn is_vaccine(&self) -> bool {
        self.kind == RecordKind::Vaccine
    }

    pub fn is_deworm(&self) -> bool {
        self.kind == RecordKind::Deworm
    }

    /// Window closed before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.window.end < today
    }
}
