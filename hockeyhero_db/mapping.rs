use hockeyhero_types::models::{self as domain, EntityRef};

use crate::models as db_models;

impl From<db_models::HeroDetails> for domain::HeroDetails {
    fn from(row: db_models::HeroDetails) -> Self {
        domain::HeroDetails {
            id: Some(row.id),
            phone: row.phone,
            date_of_birth: row.date_of_birth,
            street_address: row.street_address,
            city: row.city,
            state_province: row.state_province,
            postal_code: row.postal_code,
            hero_keys: row.hero_keys_id.map(EntityRef::new),
        }
    }
}

impl From<db_models::HeroKeys> for domain::HeroKeys {
    fn from(row: db_models::HeroKeys) -> Self {
        domain::HeroKeys {
            id: Some(row.id),
            hide_me: row.hide_me,
            latitude: row.latitude,
            longitude: row.longitude,
            age: row.age,
            my_position: row.my_position,
            skill: row.skill,
            hero_details: row.hero_details_id.map(EntityRef::new),
        }
    }
}
