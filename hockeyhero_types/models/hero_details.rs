use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityRef;
use crate::patch::Patch;

/// Contact and address details of a hero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDetails {
    pub id: Option<i64>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    /// Back-reference filled in on reads from the `HeroKeys` pointing here.
    /// Never written through this record.
    #[serde(default)]
    pub hero_keys: Option<EntityRef>,
}

impl HeroDetails {
    /// Merges every non-null attribute of `patch`; the id and association stay as they are.
    pub fn apply_patch(&mut self, patch: HeroDetailsPatch) {
        patch.phone.apply_to(&mut self.phone);
        patch.date_of_birth.apply_to(&mut self.date_of_birth);
        patch.street_address.apply_to(&mut self.street_address);
        patch.city.apply_to(&mut self.city);
        patch.state_province.apply_to(&mut self.state_province);
        patch.postal_code.apply_to(&mut self.postal_code);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroDetailsPatch {
    pub id: Option<i64>,
    pub phone: Patch<String>,
    pub date_of_birth: Patch<NaiveDate>,
    pub street_address: Patch<String>,
    pub city: Patch<String>,
    pub state_province: Patch<String>,
    pub postal_code: Patch<String>,
}
