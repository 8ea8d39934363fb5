//! In-memory repositories and unit of work, shared by unit and integration tests.

use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use hockeyhero_types::{
    errors::{ApplicationError, DbError},
    models::{EntityRef, HeroDetails, HeroKeys},
};

use crate::{
    repository::Repository,
    uow::{UnitOfWork, UnitOfWorkProvider},
};

#[derive(Default)]
struct Store {
    // one sequence for both tables, like the database
    sequence: i64,
    hero_details: BTreeMap<i64, HeroDetails>,
    hero_keys: BTreeMap<i64, HeroKeys>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.sequence += 1;
        self.sequence
    }

    /// Mirrors the unique foreign key on `hero_keys.hero_details_id`.
    fn check_link(&self, keys: &HeroKeys) -> Result<(), ApplicationError> {
        let Some(link) = keys.hero_details else {
            return Ok(());
        };

        if !self.hero_details.contains_key(&link.id) {
            return Err(DbError::ConstraintViolation(format!(
                "heroDetails {} does not exist",
                link.id
            ))
            .into());
        }

        let taken = self
            .hero_keys
            .values()
            .any(|other| other.id != keys.id && other.hero_details == Some(link));
        if taken {
            return Err(DbError::ConstraintViolation(format!(
                "heroDetails {} is already linked",
                link.id
            ))
            .into());
        }

        Ok(())
    }

    fn with_back_reference(&self, mut details: HeroDetails) -> HeroDetails {
        let owner = self
            .hero_keys
            .values()
            .find(|keys| keys.hero_details.is_some_and(|r| Some(r.id) == details.id))
            .and_then(|keys| keys.id)
            .map(EntityRef::new);
        details.hero_keys = owner;
        details
    }
}

#[derive(Default, Clone)]
pub struct InMemoryHeroDetailsRepository {
    store: Arc<Mutex<Store>>,
}

#[async_trait]
impl Repository<HeroDetails> for InMemoryHeroDetailsRepository {
    async fn save(&self, record: &HeroDetails) -> Result<HeroDetails, ApplicationError> {
        let mut store = self.store.lock().unwrap();
        let mut record = record.clone();
        let id = match record.id {
            Some(id) => id,
            None => store.next_id(),
        };
        record.id = Some(id);
        record.hero_keys = None;
        store.hero_details.insert(id, record.clone());

        Ok(store.with_back_reference(record))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApplicationError> {
        Ok(self.store.lock().unwrap().hero_details.contains_key(&id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HeroDetails>, ApplicationError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .hero_details
            .get(&id)
            .cloned()
            .map(|details| store.with_back_reference(details)))
    }

    async fn find_all(&self) -> Result<Vec<HeroDetails>, ApplicationError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .hero_details
            .values()
            .cloned()
            .map(|details| store.with_back_reference(details))
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApplicationError> {
        let mut store = self.store.lock().unwrap();
        if store.hero_details.remove(&id).is_some() {
            for keys in store.hero_keys.values_mut() {
                if keys.hero_details == Some(EntityRef::new(id)) {
                    keys.hero_details = None;
                }
            }
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryHeroKeysRepository {
    store: Arc<Mutex<Store>>,
}

#[async_trait]
impl Repository<HeroKeys> for InMemoryHeroKeysRepository {
    async fn save(&self, record: &HeroKeys) -> Result<HeroKeys, ApplicationError> {
        let mut store = self.store.lock().unwrap();
        store.check_link(record)?;

        let mut record = record.clone();
        let id = match record.id {
            Some(id) => id,
            None => store.next_id(),
        };
        record.id = Some(id);
        store.hero_keys.insert(id, record.clone());

        Ok(record)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApplicationError> {
        Ok(self.store.lock().unwrap().hero_keys.contains_key(&id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HeroKeys>, ApplicationError> {
        Ok(self.store.lock().unwrap().hero_keys.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<HeroKeys>, ApplicationError> {
        Ok(self.store.lock().unwrap().hero_keys.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApplicationError> {
        self.store.lock().unwrap().hero_keys.remove(&id);
        Ok(())
    }
}

/// Unit of work over the shared in-memory store. Writes are visible immediately,
/// commit and rollback are no-ops.
#[derive(Default, Clone)]
pub struct InMemoryUnitOfWork {
    store: Arc<Mutex<Store>>,
}

#[async_trait]
impl<'a> UnitOfWork<'a> for InMemoryUnitOfWork {
    fn hero_details(&self) -> Arc<dyn Repository<HeroDetails> + 'a> {
        Arc::new(InMemoryHeroDetailsRepository {
            store: self.store.clone(),
        })
    }

    fn hero_keys(&self) -> Arc<dyn Repository<HeroKeys> + 'a> {
        Arc::new(InMemoryHeroKeysRepository {
            store: self.store.clone(),
        })
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryUnitOfWorkProvider {
    store: Arc<Mutex<Store>>,
}

impl InMemoryUnitOfWorkProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UnitOfWorkProvider for InMemoryUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        Ok(Box::new(InMemoryUnitOfWork {
            store: self.store.clone(),
        }))
    }
}
