//! Vaccine and deworm configuration models.
//!
//! These are read-only inputs to the generator. The built-in tables live in
//! [`crate::config`]; callers may also supply their own.

use serde::{Deserialize, Serialize};

use super::species::{DewormType, Species};

/// Vaccination plan for a single vaccine product line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaccineConfig {
    /// Display name, also used to match history records
    pub name: String,
    /// Type identifier (e.g. "core_8", "rabies")
    #[serde(rename = "type")]
    pub vaccine_type: String,
    /// Species this vaccine applies to
    pub species: Vec<Species>,
    /// Infant primary series
    pub primary: PrimarySeries,
    /// Periodic re-vaccination after the primary series
    pub booster: BoosterPlan,
    /// Symmetric tolerance around a planned date
    pub window_days: u32,
    /// Free-text note appended to generated items
    #[serde(default)]
    pub note: Option<String>,
}

/// Primary series timing, in weeks of age.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrimarySeries {
    pub start_weeks: u32,
    pub end_weeks: u32,
    /// Zero is allowed for single-dose series
    pub interval_weeks: u32,
    pub min_doses: u32,
    pub recommended_doses: u32,
}

/// Booster timing, in months.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoosterPlan {
    /// Delay to the first booster when the last dose was given before adulthood
    pub first_booster_months: u32,
    /// Interval between subsequent boosters
    pub interval_months: u32,
}

impl VaccineConfig {
    pub fn applies_to(&self, species: Species) -> bool {
        self.species.contains(&species)
    }

    /// Stable identifier carried on generated items.
    pub fn config_id(&self) -> String {
        self.vaccine_type.clone()
    }

    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }
}

/// Deworming plan for one parasite class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DewormConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub deworm_type: DewormType,
    pub species: Vec<Species>,
    /// Juvenile stage, in months of age
    pub puppy: PuppyStage,
    pub adult: AdultStage,
    pub window_days: u32,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PuppyStage {
    pub start_months: u32,
    pub end_months: u32,
    pub interval_months: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdultStage {
    pub interval_months: u32,
}

impl DewormConfig {
    pub fn applies_to(&self, species: Species) -> bool {
        self.species.contains(&species)
    }

    pub fn config_id(&self) -> String {
        format!("{}_deworm", self.deworm_type)
    }

    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }

    /// Interval (months) that applies at a given age in months.
    pub fn interval_at_age(&self, age_months: i64) -> u32 {
        if age_months < i64::from(self.puppy.end_months) {
            self.puppy.interval_months
        } else {
            self.adult.interval_months
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal() -> DewormConfig {
        DewormConfig {
            name: "体内驱虫".into(),
            deworm_type: DewormType::Internal,
            species: vec![Species::Dog],
            puppy: PuppyStage {
                start_months: 1,
                end_months: 6,
                interval_months: 1,
            },
            adult: AdultStage { interval_months: 3 },
            window_days: 7,
            note: None,
        }
    }

    #[test]
    fn test_deworm_config_id() {
        assert_eq!(internal().config_id(), "internal_deworm");
    }

    #[test]
    fn test_interval_switches_at_stage_end() {
        let config = internal();
        assert_eq!(config.interval_at_age(0), 1);
        assert_eq!(config.interval_at_age(5), 1);
        assert_eq!(config.interval_at_age(6), 3);
        assert_eq!(config.interval_at_age(40), 3);
    }

    #[test]
    fn test_applies_to() {
        let config = internal();
        assert!(config.applies_to(Species::Dog));
        assert!(!config.applies_to(Species::Cat));
    }

    #[test]
    fn test_vaccine_config_from_json() {
        let json = r#"{
            "name": "犬八联疫苗",
            "type": "core_8",
            "species": ["dog"],
            "primary": {"start_weeks": 8, "end_weeks": 16, "interval_weeks": 3, "min_doses": 2, "recommended_doses": 3},
            "booster": {"first_booster_months": 12, "interval_months": 12},
            "window_days": 14
        }"#;
        let config: VaccineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.vaccine_type, "core_8");
        assert_eq!(config.note_text(), "");
        assert!(config.applies_to(Species::Dog));
    }
}
