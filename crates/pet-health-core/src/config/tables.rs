//! Built-in vaccine and deworm tables.

use serde::{Deserialize, Serialize};

use crate::models::{
    AdultStage, BoosterPlan, DewormConfig, DewormType, PrimarySeries, PuppyStage, Species,
    VaccineConfig,
};

const VACCINE_WINDOW_DAYS: u32 = 14;
const DEWORM_WINDOW_DAYS: u32 = 7;

/// Vaccine and deworm tables the generator plans from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigTables {
    #[serde(default)]
    pub vaccines: Vec<VaccineConfig>,
    #[serde(default)]
    pub deworming: Vec<DewormConfig>,
}

impl ConfigTables {
    /// All built-in tables, both species.
    pub fn builtin() -> Self {
        let mut vaccines = dog_vaccine_configs();
        vaccines.extend(cat_vaccine_configs());
        let mut deworming = dog_deworm_configs();
        deworming.extend(cat_deworm_configs());
        Self { vaccines, deworming }
    }

    /// Only the entries that apply to `species`, in table order.
    pub fn for_species(&self, species: Species) -> Self {
        Self {
            vaccines: self
                .vaccines
                .iter()
                .filter(|c| c.applies_to(species))
                .cloned()
                .collect(),
            deworming: self
                .deworming
                .iter()
                .filter(|c| c.applies_to(species))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vaccines.is_empty() && self.deworming.is_empty()
    }
}

fn primary_series_3_doses() -> PrimarySeries {
    PrimarySeries {
        start_weeks: 8,
        end_weeks: 16,
        interval_weeks: 3,
        min_doses: 2,
        recommended_doses: 3,
    }
}

fn rabies_primary() -> PrimarySeries {
    PrimarySeries {
        start_weeks: 12,
        end_weeks: 16,
        interval_weeks: 0,
        min_doses: 1,
        recommended_doses: 1,
    }
}

fn yearly_booster() -> BoosterPlan {
    BoosterPlan {
        first_booster_months: 12,
        interval_months: 12,
    }
}

fn vaccine(
    name: &str,
    vaccine_type: &str,
    species: Species,
    primary: PrimarySeries,
    note: &str,
) -> VaccineConfig {
    VaccineConfig {
        name: name.into(),
        vaccine_type: vaccine_type.into(),
        species: vec![species],
        primary,
        booster: yearly_booster(),
        window_days: VACCINE_WINDOW_DAYS,
        note: Some(note.into()),
    }
}

/// Dog vaccines: DHPP combinations and rabies.
pub fn dog_vaccine_configs() -> Vec<VaccineConfig> {
    vec![
        vaccine(
            "犬二联疫苗",
            "core_2",
            Species::Dog,
            primary_series_3_doses(),
            "预防犬瘟热、犬细小病毒",
        ),
        vaccine(
            "犬四联疫苗",
            "core_4",
            Species::Dog,
            primary_series_3_doses(),
            "预防犬瘟热、犬细小病毒、犬副流感、犬腺病毒",
        ),
        vaccine(
            "犬八联疫苗",
            "core_8",
            Species::Dog,
            primary_series_3_doses(),
            "预防8种犬类常见疾病，推荐使用",
        ),
        vaccine(
            "狂犬疫苗",
            "rabies",
            Species::Dog,
            rabies_primary(),
            "法律要求，每年必须接种",
        ),
    ]
}

/// Cat vaccines: FVRCP and rabies.
pub fn cat_vaccine_configs() -> Vec<VaccineConfig> {
    vec![
        vaccine(
            "猫三联疫苗",
            "core_3",
            Species::Cat,
            primary_series_3_doses(),
            "预防猫瘟、猫杯状病毒、猫鼻气管炎",
        ),
        vaccine(
            "猫狂犬疫苗",
            "rabies",
            Species::Cat,
            rabies_primary(),
            "部分地区要求，建议接种",
        ),
    ]
}

fn deworm(
    name: &str,
    deworm_type: DewormType,
    species: Species,
    start_months: u32,
    adult_interval_months: u32,
    note: &str,
) -> DewormConfig {
    DewormConfig {
        name: name.into(),
        deworm_type,
        species: vec![species],
        puppy: PuppyStage {
            start_months,
            end_months: 6,
            interval_months: 1,
        },
        adult: AdultStage {
            interval_months: adult_interval_months,
        },
        window_days: DEWORM_WINDOW_DAYS,
        note: Some(note.into()),
    }
}

pub fn dog_deworm_configs() -> Vec<DewormConfig> {
    vec![
        deworm(
            "体内驱虫",
            DewormType::Internal,
            Species::Dog,
            1,
            3,
            "预防蛔虫、钩虫、鞭虫等",
        ),
        deworm(
            "体外驱虫",
            DewormType::External,
            Species::Dog,
            2,
            1,
            "预防跳蚤、蜱虫、虱子等",
        ),
    ]
}

pub fn cat_deworm_configs() -> Vec<DewormConfig> {
    vec![
        deworm(
            "体内驱虫",
            DewormType::Internal,
            Species::Cat,
            1,
            3,
            "预防蛔虫、钩虫、绦虫等",
        ),
        deworm(
            "体外驱虫",
            DewormType::External,
            Species::Cat,
            2,
            1,
            "预防跳蚤、蜱虫等，室内猫可适当延长",
        ),
    ]
}
