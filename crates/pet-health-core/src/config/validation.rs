//! Config invariant checks.

use crate::models::{DewormConfig, VaccineConfig};

use super::{ConfigError, ConfigResult, ConfigTables};

/// Largest accepted one-sided window, keeping whole windows within 60 days.
pub const MAX_WINDOW_DAYS: u32 = 30;

fn invalid(name: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        name: name.to_string(),
        reason: reason.into(),
    }
}

impl VaccineConfig {
    /// Check the timing invariants of this config.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid(&self.vaccine_type, "name is empty"));
        }
        if self.vaccine_type.trim().is_empty() {
            return Err(invalid(&self.name, "type is empty"));
        }

        let primary = &self.primary;
        if primary.start_weeks > primary.end_weeks {
            return Err(invalid(
                &self.name,
                format!(
                    "primary start week {} is after end week {}",
                    primary.start_weeks, primary.end_weeks
                ),
            ));
        }
        if primary.min_doses < 1 {
            return Err(invalid(&self.name, "primary series needs at least one dose"));
        }
        if primary.recommended_doses < primary.min_doses {
            return Err(invalid(
                &self.name,
                format!(
                    "recommended doses {} below minimum {}",
                    primary.recommended_doses, primary.min_doses
                ),
            ));
        }
        if primary.recommended_doses > 1 && primary.interval_weeks == 0 {
            return Err(invalid(
                &self.name,
                "multi-dose primary series needs a non-zero interval",
            ));
        }
        if self.booster.interval_months == 0 {
            return Err(invalid(&self.name, "booster interval must be positive"));
        }
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(invalid(
                &self.name,
                format!("window of {} days exceeds {}", self.window_days, MAX_WINDOW_DAYS),
            ));
        }
        Ok(())
    }
}

impl DewormConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid(self.deworm_type.as_str(), "name is empty"));
        }
        if self.puppy.start_months > self.puppy.end_months {
            return Err(invalid(
                &self.name,
                format!(
                    "puppy start month {} is after end month {}",
                    self.puppy.start_months, self.puppy.end_months
                ),
            ));
        }
        if self.puppy.interval_months == 0 || self.adult.interval_months == 0 {
            return Err(invalid(&self.name, "deworm intervals must be positive"));
        }
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(invalid(
                &self.name,
                format!("window of {} days exceeds {}", self.window_days, MAX_WINDOW_DAYS),
            ));
        }
        Ok(())
    }
}

impl ConfigTables {
    /// Validate every entry, failing on the first bad one.
    pub fn validate(&self) -> ConfigResult<()> {
        for config in &self.vaccines {
            config.validate()?;
        }
        for config in &self.deworming {
            config.validate()?;
        }
        Ok(())
    }
}
