//! Species and treatment sub-type models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Species the schedule tables are defined for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown species: {0}")]
pub struct UnknownSpecies(pub String);

impl Species {
    /// Canonical lowercase name, as stored on pet records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dog" | "canine" | "犬" | "狗" => Ok(Species::Dog),
            "cat" | "feline" | "猫" => Ok(Species::Cat),
            _ => Err(UnknownSpecies(s.to_string())),
        }
    }
}

/// Deworming sub-type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DewormType {
    /// Intestinal parasites (roundworm, hookworm, ...)
    Internal,
    /// Fleas, ticks, lice
    External,
    /// Combined internal + external product
    Both,
}

impl DewormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DewormType::Internal => "internal",
            DewormType::External => "external",
            DewormType::Both => "both",
        }
    }

    /// Name shown to owners and written into history records.
    pub fn display_name(&self) -> &'static str {
        match self {
            DewormType::Internal => "体内驱虫",
            DewormType::External => "体外驱虫",
            DewormType::Both => "内外驱虫",
        }
    }

    /// Infer the sub-type from a free-text treatment name.
    ///
    /// Falls back to [`DewormType::Internal`] when nothing matches.
    pub fn infer_from_name(name: &str) -> Self {
        if name.contains("体内") {
            DewormType::Internal
        } else if name.contains("体外") {
            DewormType::External
        } else if name.contains("内外") {
            DewormType::Both
        } else {
            DewormType::Internal
        }
    }
}

impl fmt::Display for DewormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DewormType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "internal" => Ok(DewormType::Internal),
            "external" => Ok(DewormType::External),
            "both" => Ok(DewormType::Both),
            other => Err(format!("Unknown deworm type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species() {
        assert_eq!("dog".parse::<Species>(), Ok(Species::Dog));
        assert_eq!("Cat".parse::<Species>(), Ok(Species::Cat));
        assert_eq!("canine".parse::<Species>(), Ok(Species::Dog));
        assert!("parrot".parse::<Species>().is_err());
    }

    #[test]
    fn test_species_serde_lowercase() {
        let json = serde_json::to_string(&Species::Cat).unwrap();
        assert_eq!(json, "\"cat\"");
    }

    #[test]
    fn test_infer_deworm_type() {
        assert_eq!(DewormType::infer_from_name("体内驱虫"), DewormType::Internal);
        assert_eq!(DewormType::infer_from_name("体外驱虫"), DewormType::External);
        assert_eq!(DewormType::infer_from_name("内外同驱"), DewormType::Both);
        assert_eq!(DewormType::infer_from_name("drontal"), DewormType::Internal);
    }

    #[test]
    fn test_display_name_round_trips_through_inference() {
        for t in [DewormType::Internal, DewormType::External, DewormType::Both] {
            assert_eq!(DewormType::infer_from_name(t.display_name()), t);
        }
    }
}
