use serde::{Deserialize, Serialize};

use super::EntityRef;
use crate::patch::Patch;

/// Searchable attributes of a hero, linked one-to-one to its [`super::HeroDetails`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroKeys {
    pub id: Option<i64>,
    pub hide_me: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub age: Option<i32>,
    pub my_position: Option<i32>,
    pub skill: Option<i32>,
    #[serde(default)]
    pub hero_details: Option<EntityRef>,
}

impl HeroKeys {
    /// Merges every non-null attribute of `patch`. The `hero_details` link is only
    /// changed by a full update.
    pub fn apply_patch(&mut self, patch: HeroKeysPatch) {
        patch.hide_me.apply_to(&mut self.hide_me);
        patch.latitude.apply_to(&mut self.latitude);
        patch.longitude.apply_to(&mut self.longitude);
        patch.age.apply_to(&mut self.age);
        patch.my_position.apply_to(&mut self.my_position);
        patch.skill.apply_to(&mut self.skill);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroKeysPatch {
    pub id: Option<i64>,
    pub hide_me: Patch<bool>,
    pub latitude: Patch<f64>,
    pub longitude: Patch<f64>,
    pub age: Patch<i32>,
    pub my_position: Patch<i32>,
    pub skill: Patch<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trips_json_shape() {
        let body = json!({
            "id": null,
            "hideMe": true,
            "latitude": 45.5017,
            "longitude": -73.5673,
            "age": 27,
            "myPosition": 3,
            "skill": 8,
            "heroDetails": { "id": 11 }
        });

        let keys: HeroKeys = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(keys.hide_me, Some(true));
        assert_eq!(keys.hero_details, Some(EntityRef::new(11)));
        assert_eq!(serde_json::to_value(&keys).unwrap(), body);
    }

    #[test]
    fn test_patch_leaves_association_alone() {
        let mut keys = HeroKeys {
            id: Some(2),
            hide_me: Some(false),
            age: Some(30),
            skill: Some(5),
            hero_details: Some(EntityRef::new(4)),
            ..Default::default()
        };
        let patch: HeroKeysPatch =
            serde_json::from_value(json!({ "id": 2, "hideMe": true, "skill": null })).unwrap();

        keys.apply_patch(patch);

        assert_eq!(keys.hide_me, Some(true));
        assert_eq!(keys.skill, Some(5));
        assert_eq!(keys.age, Some(30));
        assert_eq!(keys.hero_details, Some(EntityRef::new(4)));
    }
}
