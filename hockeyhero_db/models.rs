use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct HeroDetails {
    pub id: i64,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    /// id of the `hero_keys` row pointing at this one, from the LEFT JOIN
    pub hero_keys_id: Option<i64>,
}

#[derive(Debug, Clone, FromRow)]
pub struct HeroKeys {
    pub id: i64,
    pub hide_me: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub age: Option<i32>,
    pub my_position: Option<i32>,
    pub skill: Option<i32>,
    pub hero_details_id: Option<i64>,
}
