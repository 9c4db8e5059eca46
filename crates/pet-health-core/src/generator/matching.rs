//! History-to-config matching and priority rules.
//!
//! Matching is lexical: a record belongs to a config when either name
//! contains the other. Records named with "狂犬" also count toward any
//! `rabies` config regardless of product name.

use crate::models::{DewormConfig, DewormType, HistoryRecord, Priority, RecordKind, VaccineConfig};

pub const RABIES_TYPE: &str = "rabies";
const RABIES_KEYWORD: &str = "狂犬";
const CORE_TYPE_MARKER: &str = "core";

/// Bidirectional containment. Blank names never match.
fn names_overlap(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

pub fn matches_vaccine(record: &HistoryRecord, config: &VaccineConfig) -> bool {
    if record.kind != RecordKind::Vaccine {
        return false;
    }
    names_overlap(&record.name, &config.name)
        || (config.vaccine_type == RABIES_TYPE && record.name.contains(RABIES_KEYWORD))
}

/// An explicit sub-type wins over the name; `both` counts for internal and
/// external configs.
pub fn matches_deworm(record: &HistoryRecord, config: &DewormConfig) -> bool {
    if record.kind != RecordKind::Deworm {
        return false;
    }
    match record.deworm_type {
        Some(record_type) => {
            record_type == config.deworm_type
                || (record_type == DewormType::Both
                    && matches!(
                        config.deworm_type,
                        DewormType::Internal | DewormType::External
                    ))
        }
        None => names_overlap(&record.name, &config.name),
    }
}

pub fn vaccine_priority(vaccine_type: &str) -> Priority {
    if vaccine_type.contains(RABIES_TYPE) || vaccine_type.contains(CORE_TYPE_MARKER) {
        Priority::High
    } else {
        Priority::Medium
    }
}

pub fn deworm_priority(_deworm_type: DewormType) -> Priority {
    Priority::Medium
}
