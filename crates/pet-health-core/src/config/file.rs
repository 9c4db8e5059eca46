//! Loading schedule configuration from TOML or JSON files.
//!
//! ```toml
//! [settings]
//! planning_months = 12
//!
//! [[vaccines]]
//! name = "犬八联疫苗"
//! type = "core_8"
//! species = ["dog"]
//! window_days = 14
//! primary = { start_weeks = 8, end_weeks = 16, interval_weeks = 3, min_doses = 2, recommended_doses = 3 }
//! booster = { first_booster_months = 12, interval_months = 12 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::generator::GenerateOptions;
use crate::models::{DewormConfig, VaccineConfig};

use super::{ConfigError, ConfigResult, ConfigTables, ScheduleSettings};

/// Settings plus optional replacement tables.
///
/// An empty `vaccines` or `deworming` list keeps the built-in table for
/// that axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfigFile {
    #[serde(default)]
    pub settings: ScheduleSettings,
    #[serde(default)]
    pub vaccines: Vec<VaccineConfig>,
    #[serde(default)]
    pub deworming: Vec<DewormConfig>,
}

impl ScheduleConfigFile {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: ScheduleConfigFile = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let file: ScheduleConfigFile = serde_json::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    /// Load from a `.toml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        ConfigTables {
            vaccines: self.vaccines.clone(),
            deworming: self.deworming.clone(),
        }
        .validate()
    }

    /// Generator options for these settings, with any custom tables applied.
    pub fn to_options(&self) -> GenerateOptions {
        let mut options = self.settings.to_options();
        if !self.vaccines.is_empty() || !self.deworming.is_empty() {
            options.custom_configs = Some(CustomConfigs {
                vaccines: (!self.vaccines.is_empty()).then(|| self.vaccines.clone()),
                deworming: (!self.deworming.is_empty()).then(|| self.deworming.clone()),
            });
        }
        options
    }
}

/// Per-axis table overrides. `None` keeps the species' built-in table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomConfigs {
    #[serde(default)]
    pub vaccines: Option<Vec<VaccineConfig>>,
    #[serde(default)]
    pub deworming: Option<Vec<DewormConfig>>,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
[settings]
planning_months = 12
enable_deworm = false

[[vaccines]]
name = "犬八联疫苗"
type = "core_8"
species = ["dog"]
window_days = 14
note = "推荐使用"
primary = { start_weeks = 8, end_weeks = 16, interval_weeks = 3, min_doses = 2, recommended_doses = 3 }
booster = { first_booster_months = 12, interval_months = 12 }
"#;

    #[test]
    fn test_parse_toml() {
        let file = ScheduleConfigFile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(file.settings.planning_months, 12);
        assert!(!file.settings.enable_deworm);
        assert_eq!(file.vaccines.len(), 1);
        assert_eq!(file.vaccines[0].primary.recommended_doses, 3);
        assert!(file.deworming.is_empty());
    }

    #[test]
    fn test_options_keep_builtin_deworm_table() {
        let options = ScheduleConfigFile::from_toml_str(SAMPLE)
            .unwrap()
            .to_options();
        let custom = options.custom_configs.unwrap();
        assert_eq!(custom.vaccines.map(|v| v.len()), Some(1));
        assert!(custom.deworming.is_none());
        assert!(!options.include_deworm);
    }

    #[test]
    fn test_empty_file_is_defaults() {
        let file = ScheduleConfigFile::from_toml_str("").unwrap();
        assert_eq!(file.settings, ScheduleSettings::default());
        assert!(file.to_options().custom_configs.is_none());
    }

    #[test]
    fn test_invalid_table_rejected() {
        let bad = SAMPLE.replace("start_weeks = 8", "start_weeks = 30");
        assert!(matches!(
            ScheduleConfigFile::from_toml_str(&bad),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_from_file_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("schedule.toml");
        fs::File::create(&toml_path)
            .unwrap()
            .write_all(SAMPLE.as_bytes())
            .unwrap();
        assert!(ScheduleConfigFile::from_file(&toml_path).is_ok());

        let json_path = dir.path().join("schedule.json");
        fs::write(&json_path, r#"{"settings": {"planning_months": 6}}"#).unwrap();
        let file = ScheduleConfigFile::from_file(&json_path).unwrap();
        assert_eq!(file.settings.planning_months, 6);

        let yaml_path = dir.path().join("schedule.yaml");
        fs::write(&yaml_path, "settings: {}").unwrap();
        assert!(matches!(
            ScheduleConfigFile::from_file(&yaml_path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            ScheduleConfigFile::from_file("/nonexistent/schedule.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
