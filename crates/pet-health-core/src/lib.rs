//! Pet-Health Core Library
//!
//! Vaccination and deworming schedule planning for dogs and cats.
//!
//! # Architecture
//!
//! ```text
//! Pet record (species, birthday) ─┐
//!                                 ├─→ ScheduleGenerator ─→ Vec<ScheduleItem>
//! Completed records → history  ───┘         │
//!                                           │ per-species ConfigTables
//!                                           ▼
//!                     primary series │ boosters │ catch-up │ deworming
//!                                           │
//!                                  sort + dedup (date, type, name)
//! ```
//!
//! # Core Principle
//!
//! **Generation is pure.** The same inputs and reference date always give
//! the same schedule; storing and reminding are the caller's job.
//!
//! # Modules
//!
//! - [`models`]: Domain types (VaccineConfig, HistoryRecord, ScheduleItem, etc.)
//! - [`config`]: Built-in tables, settings, config file loading
//! - [`generator`]: The schedule generator
//! - [`service`]: Record conversion, per-pet and batch plans, stats

pub mod config;
pub mod generator;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use config::{ConfigError, ConfigTables, CustomConfigs, ScheduleConfigFile, ScheduleSettings};
pub use generator::{generate_schedule, GenerateOptions, ScheduleGenerator};
pub use models::{
    DateWindow, DewormConfig, DewormType, HistoryRecord, Priority, Provenance, RecordKind,
    ScheduleItem, Species, VaccineConfig,
};
pub use service::{plan_for_pet, plan_for_pets, PetPlan, PetProfile, ScheduleStats};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use chrono::NaiveDate;
use log::warn;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PetHealthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ConfigError> for PetHealthError {
    fn from(e: ConfigError) -> Self {
        PetHealthError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for PetHealthError {
    fn from(e: serde_json::Error) -> Self {
        PetHealthError::SerializationError(e.to_string())
    }
}

impl From<models::UnknownSpecies> for PetHealthError {
    fn from(e: models::UnknownSpecies) -> Self {
        PetHealthError::InvalidInput(e.to_string())
    }
}

fn parse_required_date(field: &str, value: &str) -> Result<NaiveDate, PetHealthError> {
    generator::parse_date(value)
        .ok_or_else(|| PetHealthError::InvalidInput(format!("{}: bad date {:?}", field, value)))
}

// =========================================================================
// Exported Functions
// =========================================================================

/// Generate a pet's schedule.
///
/// `today` pins the reference date (`YYYY-MM-DD`); `None` uses the current
/// date. An empty or unparseable birthday gives an empty list.
#[uniffi::export]
pub fn generate_pet_schedule(
    species: String,
    birthday: String,
    history: Vec<FfiHistoryRecord>,
    planning_months: u32,
    include_vaccines: bool,
    include_deworm: bool,
    today: Option<String>,
) -> Result<Vec<FfiScheduleItem>, PetHealthError> {
    let species: Species = species.parse()?;
    let today = today
        .map(|t| parse_required_date("today", &t))
        .transpose()?;

    let history: Vec<HistoryRecord> = history
        .into_iter()
        .filter_map(FfiHistoryRecord::into_history)
        .collect();

    let options = GenerateOptions {
        planning_months,
        include_vaccines,
        include_deworm,
        custom_configs: None,
        today,
    };

    let items = ScheduleGenerator::new().generate_schedule(species, &birthday, &history, &options);
    Ok(items.into_iter().map(|i| i.into()).collect())
}

/// Statistics for a plan as of `today`.
#[uniffi::export]
pub fn schedule_stats(
    items: Vec<FfiScheduleItem>,
    today: String,
) -> Result<FfiScheduleStats, PetHealthError> {
    let today = parse_required_date("today", &today)?;
    let items = items
        .into_iter()
        .map(ScheduleItem::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ScheduleStats::from_items(&items, today).into())
}

/// The built-in tables for a species, as JSON.
#[uniffi::export]
pub fn builtin_config_json(species: String) -> Result<String, PetHealthError> {
    let species: Species = species.parse()?;
    let tables = ConfigTables::builtin().for_species(species);
    Ok(serde_json::to_string_pretty(&tables)?)
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe history record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHistoryRecord {
    /// "vaccine" or "deworm"
    pub kind: String,
    pub name: String,
    pub actual_date: String,
    pub dose_no: Option<u32>,
    pub deworm_type: Option<String>,
}

impl FfiHistoryRecord {
    /// Convert, dropping records the generator cannot use.
    fn into_history(self) -> Option<HistoryRecord> {
        let Some(actual_date) = generator::parse_date(&self.actual_date) else {
            warn!(
                "Skipping history record {:?}: bad date {:?}",
                self.name, self.actual_date
            );
            return None;
        };

        match self.kind.as_str() {
            "vaccine" => Some(HistoryRecord::vaccine(self.name, actual_date, self.dose_no)),
            "deworm" => {
                let deworm_type = self.deworm_type.as_deref().and_then(|t| {
                    t.parse::<DewormType>()
                        .map_err(|e| warn!("Ignoring deworm type on {:?}: {}", self.name, e))
                        .ok()
                });
                Some(HistoryRecord::deworm(self.name, actual_date, deworm_type))
            }
            other => {
                warn!("Skipping history record {:?}: unknown kind {:?}", self.name, other);
                None
            }
        }
    }
}

/// FFI-safe schedule item.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScheduleItem {
    pub kind: String,
    pub name: String,
    pub dose_no: Option<u32>,
    pub planned_date: String,
    pub window_start: String,
    pub window_end: String,
    pub note: String,
    pub priority: String,
    pub config_id: String,
    pub provenance: String,
}

fn provenance_str(provenance: Provenance) -> &'static str {
    match provenance {
        Provenance::PrimaryDose => "primary_dose",
        Provenance::Booster => "booster",
        Provenance::CatchUp => "catch_up",
        Provenance::Deworm => "deworm",
    }
}

impl From<ScheduleItem> for FfiScheduleItem {
    fn from(item: ScheduleItem) -> Self {
        Self {
            kind: item.kind.as_str().to_string(),
            name: item.name,
            dose_no: item.dose_no,
            planned_date: item.planned_date.to_string(),
            window_start: item.window.start.to_string(),
            window_end: item.window.end.to_string(),
            note: item.note,
            priority: item.priority.as_str().to_string(),
            config_id: item.config_id,
            provenance: provenance_str(item.provenance).to_string(),
        }
    }
}

impl TryFrom<FfiScheduleItem> for ScheduleItem {
    type Error = PetHealthError;

    fn try_from(item: FfiScheduleItem) -> Result<Self, Self::Error> {
        let kind = match item.kind.as_str() {
            "vaccine" => RecordKind::Vaccine,
            "deworm" => RecordKind::Deworm,
            other => return Err(PetHealthError::InvalidInput(format!("kind: {}", other))),
        };
        let priority = match item.priority.as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            other => return Err(PetHealthError::InvalidInput(format!("priority: {}", other))),
        };
        let provenance = match item.provenance.as_str() {
            "primary_dose" => Provenance::PrimaryDose,
            "booster" => Provenance::Booster,
            "catch_up" => Provenance::CatchUp,
            "deworm" => Provenance::Deworm,
            other => return Err(PetHealthError::InvalidInput(format!("provenance: {}", other))),
        };

        Ok(ScheduleItem {
            kind,
            name: item.name,
            dose_no: item.dose_no,
            planned_date: parse_required_date("planned_date", &item.planned_date)?,
            window: DateWindow {
                start: parse_required_date("window_start", &item.window_start)?,
                end: parse_required_date("window_end", &item.window_end)?,
            },
            note: item.note,
            priority,
            config_id: item.config_id,
            provenance,
        })
    }
}

/// FFI-safe schedule statistics.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScheduleStats {
    pub total: u32,
    pub vaccines: u32,
    pub deworm: u32,
    pub upcoming: u32,
    pub overdue: u32,
    pub high_priority: u32,
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl From<ScheduleStats> for FfiScheduleStats {
    fn from(stats: ScheduleStats) -> Self {
        Self {
            total: count(stats.total),
            vaccines: count(stats.vaccines),
            deworm: count(stats.deworm),
            upcoming: count(stats.upcoming),
            overdue: count(stats.overdue),
            high_priority: count(stats.high_priority),
        }
    }
}
