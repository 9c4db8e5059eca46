//! Per-pet and batch planning.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::generator::{parse_date, GenerateOptions, ScheduleGenerator};
use crate::models::{HistoryRecord, ScheduleItem, Species};

/// Everything the generator needs about one pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetProfile {
    pub pet_id: String,
    pub species: Species,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
}

/// Generated plan for one pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetPlan {
    pub pet_id: String,
    pub items: Vec<ScheduleItem>,
    pub total_items: usize,
    pub vaccine_items: usize,
    pub deworm_items: usize,
    /// Why no plan could be generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PetPlan {
    fn from_items(pet_id: String, items: Vec<ScheduleItem>) -> Self {
        let vaccine_items = items.iter().filter(|i| i.is_vaccine()).count();
        let deworm_items = items.iter().filter(|i| i.is_deworm()).count();
        Self {
            pet_id,
            total_items: items.len(),
            vaccine_items,
            deworm_items,
            items,
            error: None,
        }
    }

    fn failed(pet_id: String, error: impl Into<String>) -> Self {
        Self {
            pet_id,
            items: Vec::new(),
            total_items: 0,
            vaccine_items: 0,
            deworm_items: 0,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Plan one pet. A missing or unparseable birthday is reported on the plan.
pub fn plan_for_pet(
    generator: &ScheduleGenerator,
    profile: &PetProfile,
    options: &GenerateOptions,
) -> PetPlan {
    let birthday = profile.birthday.as_deref().unwrap_or_default();
    if birthday.trim().is_empty() {
        warn!("Pet {} has no birthday, skipping plan", profile.pet_id);
        return PetPlan::failed(profile.pet_id.clone(), "birthday missing");
    }
    let Some(birth) = parse_date(birthday) else {
        warn!("Pet {} has unparseable birthday {:?}", profile.pet_id, birthday);
        return PetPlan::failed(
            profile.pet_id.clone(),
            format!("birthday unparseable: {}", birthday),
        );
    };

    let items =
        generator.generate_for_birth_date(profile.species, birth, &profile.history, options);
    PetPlan::from_items(profile.pet_id.clone(), items)
}

/// Counts over a batch of plans.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchPlan {
    pub plans: Vec<PetPlan>,
    pub summary: BatchSummary,
}

/// Plan several pets, e.g. all pets of one owner.
pub fn plan_for_pets(
    generator: &ScheduleGenerator,
    profiles: &[PetProfile],
    options: &GenerateOptions,
) -> BatchPlan {
    let plans: Vec<PetPlan> = profiles
        .iter()
        .map(|profile| plan_for_pet(generator, profile, options))
        .collect();

    let succeeded = plans.iter().filter(|p| p.is_success()).count();
    let summary = BatchSummary {
        total: plans.len(),
        succeeded,
        failed: plans.len() - succeeded,
    };
    info!(
        "Planned {} pets: {} succeeded, {} failed",
        summary.total, summary.succeeded, summary.failed
    );

    BatchPlan { plans, summary }
}
