//! Schedule configuration.
//!
//! - [`ConfigTables`]: per-species vaccine and deworm tables (built-in or custom)
//! - [`ScheduleSettings`]: user-level planning settings
//! - [`ScheduleConfigFile`]: TOML/JSON file carrying both

mod file;
mod tables;
mod validation;

pub use file::*;
pub use tables::*;
pub use validation::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::GenerateOptions;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid config {name}: {reason}")]
    Invalid { name: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Age (months) from which a pet is treated as adult.
pub const ADULT_START_MONTHS: i64 = 12;

/// Default planning horizon (months).
pub const DEFAULT_PLANNING_MONTHS: u32 = 18;

/// User-level schedule settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleSettings {
    #[serde(default = "default_true")]
    pub enable_vaccine: bool,
    #[serde(default = "default_true")]
    pub enable_deworm: bool,
    /// Days ahead of a planned date to remind the owner
    #[serde(default = "default_reminder_days")]
    pub reminder_days: u32,
    #[serde(default = "default_true")]
    pub auto_generate: bool,
    #[serde(default = "default_planning_months")]
    pub planning_months: u32,
}

fn default_true() -> bool {
    true
}

fn default_reminder_days() -> u32 {
    7
}

fn default_planning_months() -> u32 {
    DEFAULT_PLANNING_MONTHS
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            enable_vaccine: true,
            enable_deworm: true,
            reminder_days: default_reminder_days(),
            auto_generate: true,
            planning_months: DEFAULT_PLANNING_MONTHS,
        }
    }
}

impl ScheduleSettings {
    /// Generator options matching these settings.
    pub fn to_options(&self) -> GenerateOptions {
        GenerateOptions {
            planning_months: self.planning_months,
            include_vaccines: self.enable_vaccine,
            include_deworm: self.enable_deworm,
            ..GenerateOptions::default()
        }
    }
}
