pub mod hero_details;
pub mod hero_keys;

use serde::{Deserialize, Serialize};

pub use hero_details::{HeroDetails, HeroDetailsPatch};
pub use hero_keys::{HeroKeys, HeroKeysPatch};

/// Reference to an associated record, serialized as `{"id": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
