//! Health-schedule generator.
//!
//! Pipeline: resolve species tables → plan each vaccine config (primary,
//! booster or catch-up) → plan each deworm config → sort by date → drop
//! duplicate `(date, type, name)` entries.
//!
//! Generation is a pure function of its inputs and "today": nothing is
//! persisted and no state survives an invocation.

mod dates;
mod deworm;
mod matching;
mod vaccine;

pub use dates::*;
pub use matching::*;

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use log::{debug, warn};

use crate::config::{ConfigTables, CustomConfigs, DEFAULT_PLANNING_MONTHS};
use crate::models::{DewormConfig, HistoryRecord, ScheduleItem, Species, VaccineConfig};

/// Longest accepted planning horizon, in months.
pub const MAX_PLANNING_MONTHS: u32 = 240;

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Planning horizon in (30-day) months
    pub planning_months: u32,
    pub include_vaccines: bool,
    pub include_deworm: bool,
    /// Replacement tables; `None` uses the species' built-in tables
    pub custom_configs: Option<CustomConfigs>,
    /// Reference date; `None` means the current UTC date
    pub today: Option<NaiveDate>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            planning_months: DEFAULT_PLANNING_MONTHS,
            include_vaccines: true,
            include_deworm: true,
            custom_configs: None,
            today: None,
        }
    }
}

impl GenerateOptions {
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_planning_months(mut self, months: u32) -> Self {
        self.planning_months = months;
        self
    }

    fn resolved_today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Schedule generator over a set of config tables.
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    tables: ConfigTables,
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleGenerator {
    /// Generator over the built-in dog and cat tables.
    pub fn new() -> Self {
        Self::with_tables(ConfigTables::builtin())
    }

    pub fn with_tables(tables: ConfigTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ConfigTables {
        &self.tables
    }

    /// Generate the schedule for a pet.
    ///
    /// An empty or unparseable birthday yields an empty schedule.
    pub fn generate_schedule(
        &self,
        species: Species,
        birthday: &str,
        history: &[HistoryRecord],
        options: &GenerateOptions,
    ) -> Vec<ScheduleItem> {
        match parse_date(birthday) {
            Some(birth) => self.generate_for_birth_date(species, birth, history, options),
            None if birthday.trim().is_empty() => {
                warn!("No birthday provided, cannot generate a {} schedule", species);
                Vec::new()
            }
            None => {
                warn!("Unparseable birthday {:?}, cannot generate a schedule", birthday);
                Vec::new()
            }
        }
    }

    /// Generate the schedule for a pet with a known birth date.
    pub fn generate_for_birth_date(
        &self,
        species: Species,
        birth: NaiveDate,
        history: &[HistoryRecord],
        options: &GenerateOptions,
    ) -> Vec<ScheduleItem> {
        let planning_months = if options.planning_months > MAX_PLANNING_MONTHS {
            warn!(
                "Planning horizon of {} months capped at {}",
                options.planning_months, MAX_PLANNING_MONTHS
            );
            MAX_PLANNING_MONTHS
        } else {
            options.planning_months
        };
        let horizon = PlanningHorizon::new(options.resolved_today(), planning_months);
        let custom = options.custom_configs.as_ref();

        let mut items = Vec::new();

        if options.include_vaccines {
            for config in self.vaccine_configs(species, custom) {
                if let Err(e) = config.validate() {
                    warn!("Skipping vaccine config: {}", e);
                    continue;
                }
                let matched = matching_history(history, |r| matches_vaccine(r, config));
                items.extend(vaccine::plan_vaccine(birth, &horizon, config, &matched));
            }
        }

        if options.include_deworm {
            for config in self.deworm_configs(species, custom) {
                if let Err(e) = config.validate() {
                    warn!("Skipping deworm config: {}", e);
                    continue;
                }
                let matched = matching_history(history, |r| matches_deworm(r, config));
                items.extend(deworm::plan_deworm(birth, &horizon, config, &matched));
            }
        }

        let items = sort_and_dedup(items);
        debug!(
            "Generated {} schedule items for {} born {} (horizon {} to {})",
            items.len(),
            species,
            birth,
            horizon.today,
            horizon.end
        );
        items
    }

    fn vaccine_configs<'a>(
        &'a self,
        species: Species,
        custom: Option<&'a CustomConfigs>,
    ) -> Vec<&'a VaccineConfig> {
        match custom.and_then(|c| c.vaccines.as_ref()) {
            Some(configs) => configs.iter().collect(),
            None => self
                .tables
                .vaccines
                .iter()
                .filter(|c| c.applies_to(species))
                .collect(),
        }
    }

    fn deworm_configs<'a>(
        &'a self,
        species: Species,
        custom: Option<&'a CustomConfigs>,
    ) -> Vec<&'a DewormConfig> {
        match custom.and_then(|c| c.deworming.as_ref()) {
            Some(configs) => configs.iter().collect(),
            None => self
                .tables
                .deworming
                .iter()
                .filter(|c| c.applies_to(species))
                .collect(),
        }
    }
}

/// Generate a schedule with the built-in tables.
pub fn generate_schedule(
    species: Species,
    birthday: &str,
    history: &[HistoryRecord],
    options: &GenerateOptions,
) -> Vec<ScheduleItem> {
    ScheduleGenerator::new().generate_schedule(species, birthday, history, options)
}

/// Records accepted by `matches`, oldest first.
fn matching_history<'a>(
    history: &'a [HistoryRecord],
    matches: impl Fn(&HistoryRecord) -> bool,
) -> Vec<&'a HistoryRecord> {
    let mut matched: Vec<&HistoryRecord> = history.iter().filter(|&r| matches(r)).collect();
    matched.sort_by_key(|r| r.actual_date);
    matched
}

/// Sort by planned date and keep the first item per `(date, type, name)`.
///
/// The sort is stable, so ties keep generation order.
pub fn sort_and_dedup(mut items: Vec<ScheduleItem>) -> Vec<ScheduleItem> {
    items.sort_by_key(|item| item.planned_date);
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert((item.planned_date, item.kind, item.name.clone())));
    items
}

/// `"<prefix> - <note>"`, or just the prefix when the note is empty.
pub(crate) fn note_with_prefix(prefix: &str, note: &str) -> String {
    if note.is_empty() {
        prefix.to_string()
    } else {
        format!("{} - {}", prefix, note)
    }
}
