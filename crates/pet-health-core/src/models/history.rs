//! Completed-treatment history models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::species::DewormType;

/// Kind of treatment, shared by history records and schedule items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Vaccine,
    Deworm,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Vaccine => "vaccine",
            RecordKind::Deworm => "deworm",
        }
    }
}

/// A treatment the pet has already received.
///
/// Built by the caller from persisted records; never mutated by the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Free-text name, matched loosely against config names
    pub name: String,
    /// Date the treatment was actually given
    pub actual_date: NaiveDate,
    /// Dose number (vaccines)
    #[serde(default)]
    pub dose_no: Option<u32>,
    /// Sub-type (deworming)
    #[serde(default)]
    pub deworm_type: Option<DewormType>,
}

impl HistoryRecord {
    pub fn vaccine(name: impl Into<String>, actual_date: NaiveDate, dose_no: Option<u32>) -> Self {
        Self {
            kind: RecordKind::Vaccine,
            name: name.into(),
            actual_date,
            dose_no,
            deworm_type: None,
        }
    }

    pub fn deworm(
        name: impl Into<String>,
        actual_date: NaiveDate,
        deworm_type: Option<DewormType>,
    ) -> Self {
        Self {
            kind: RecordKind::Deworm,
            name: name.into(),
            actual_date,
            dose_no: None,
            deworm_type,
        }
    }

    pub fn is_vaccine(&self) -> bool {
        self.kind == RecordKind::Vaccine
    }

    pub fn is_deworm(&self) -> bool {
        self.kind == RecordKind::Deworm
    }
}
