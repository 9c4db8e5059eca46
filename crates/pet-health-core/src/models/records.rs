//! Stored treatment records, as kept by the records collaborator.
//!
//! Only completed records with an actual date feed the generator; see
//! [`crate::service::history_from_records`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::species::DewormType;

/// Lifecycle status of a stored record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Completed,
    Overdue,
    Cancelled,
}

/// A stored vaccination record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccineRecord {
    /// Vaccine name (e.g. "狂犬病疫苗", "犬八联疫苗")
    pub name: String,
    /// Dose number, starting at 1
    pub dose_no: u32,
    pub planned_date: NaiveDate,
    #[serde(default)]
    pub actual_date: Option<NaiveDate>,
    pub status: RecordStatus,
    #[serde(default)]
    pub note: Option<String>,
}

/// A stored deworming record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DewormRecord {
    #[serde(rename = "type")]
    pub deworm_type: DewormType,
    pub planned_date: NaiveDate,
    #[serde(default)]
    pub actual_date: Option<NaiveDate>,
    /// Product used (e.g. "福来恩")
    #[serde(default)]
    pub product: Option<String>,
    pub status: RecordStatus,
    #[serde(default)]
    pub note: Option<String>,
}

impl VaccineRecord {
    /// Date the dose counts as given, if it was completed.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        match self.status {
            RecordStatus::Completed => self.actual_date,
            _ => None,
        }
    }
}

impl DewormRecord {
    pub fn completed_on(&self) -> Option<NaiveDate> {
        match self.status {
            RecordStatus::Completed => self.actual_date,
            _ => None,
        }
    }
}
