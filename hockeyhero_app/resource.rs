//! Capabilities a record type needs to be served by the generic CRUD handlers.

use serde::{Serialize, de::DeserializeOwned};
use std::{fmt::Debug, sync::Arc};

use hockeyhero_types::models::{HeroDetails, HeroDetailsPatch, HeroKeys, HeroKeysPatch};

use crate::{repository::Repository, uow::UnitOfWork};

/// Filter on the HeroDetails collection selecting records without HeroKeys.
pub const HERO_KEYS_IS_NULL_FILTER: &str = "herokeys-is-null";

pub trait Resource: Debug + Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Partial update payload for this record.
    type Patch: Debug + Send + Sync + DeserializeOwned + 'static;

    /// Name used in alert headers and error payloads, e.g. `heroDetails`.
    const ENTITY_NAME: &'static str;

    /// Collection path segment under `/api`, e.g. `hero-details`.
    const PATH: &'static str;

    fn id(&self) -> Option<i64>;

    fn patch_id(patch: &Self::Patch) -> Option<i64>;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Whether the record passes the list `filter`. Unknown filters select everything.
    fn matches_filter(&self, _filter: &str) -> bool {
        true
    }

    fn repository<'a>(uow: &(dyn UnitOfWork<'a> + '_)) -> Arc<dyn Repository<Self> + 'a>;
}

impl Resource for HeroDetails {
    type Patch = HeroDetailsPatch;

    const ENTITY_NAME: &'static str = "heroDetails";
    const PATH: &'static str = "hero-details";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn patch_id(patch: &HeroDetailsPatch) -> Option<i64> {
        patch.id
    }

    fn apply_patch(&mut self, patch: HeroDetailsPatch) {
        HeroDetails::apply_patch(self, patch)
    }

    fn matches_filter(&self, filter: &str) -> bool {
        match filter {
            HERO_KEYS_IS_NULL_FILTER => self.hero_keys.is_none(),
            _ => true,
        }
    }

    fn repository<'a>(uow: &(dyn UnitOfWork<'a> + '_)) -> Arc<dyn Repository<Self> + 'a> {
        uow.hero_details()
    }
}

impl Resource for HeroKeys {
    type Patch = HeroKeysPatch;

    const ENTITY_NAME: &'static str = "heroKeys";
    const PATH: &'static str = "hero-keys";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn patch_id(patch: &HeroKeysPatch) -> Option<i64> {
        patch.id
    }

    fn apply_patch(&mut self, patch: HeroKeysPatch) {
        HeroKeys::apply_patch(self, patch)
    }

    fn repository<'a>(uow: &(dyn UnitOfWork<'a> + '_)) -> Arc<dyn Repository<Self> + 'a> {
        uow.hero_keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hockeyhero_types::models::EntityRef;

    #[test]
    fn test_hero_keys_is_null_filter() {
        let linked = HeroDetails {
            id: Some(1),
            hero_keys: Some(EntityRef::new(9)),
            ..Default::default()
        };
        let unlinked = HeroDetails {
            id: Some(2),
            ..Default::default()
        };

        assert!(!linked.matches_filter(HERO_KEYS_IS_NULL_FILTER));
        assert!(unlinked.matches_filter(HERO_KEYS_IS_NULL_FILTER));
        assert!(linked.matches_filter("something-else"));
    }

    #[test]
    fn test_hero_keys_ignore_filters() {
        let keys = HeroKeys::default();
        assert!(keys.matches_filter(HERO_KEYS_IS_NULL_FILTER));
    }
}
