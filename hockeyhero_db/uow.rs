use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use hockeyhero_app::{
    repository::Repository,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use hockeyhero_types::{
    errors::{ApplicationError, DbError},
    models::{HeroDetails, HeroKeys},
};

use crate::repository::*;

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWorkProvider {
    pool: PgPool,
}

impl PostgresUnitOfWorkProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for PostgresUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(Box::new(PostgresUnitOfWork {
            tx: Arc::new(Mutex::new(tx)),
        }))
    }
}

#[derive(Clone)]
pub struct PostgresUnitOfWork<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresUnitOfWork<'a> {
    /// Takes the transaction back once every repository clone is gone.
    fn into_transaction(self) -> Option<Transaction<'a, Postgres>> {
        Arc::try_unwrap(self.tx).ok().map(Mutex::into_inner)
    }
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for PostgresUnitOfWork<'a> {
    fn hero_details(&self) -> Arc<dyn Repository<HeroDetails> + 'a> {
        Arc::new(PostgresHeroDetailsRepository::new(self.tx.clone()))
    }

    fn hero_keys(&self) -> Arc<dyn Repository<HeroKeys> + 'a> {
        Arc::new(PostgresHeroKeysRepository::new(self.tx.clone()))
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        let tx = (*self).into_transaction().ok_or_else(|| {
            DbError::Transaction("repositories still hold the transaction".to_string())
        })?;

        tx.commit().await.map_err(DbError::Database)?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        match (*self).into_transaction() {
            Some(tx) => tx.rollback().await.map_err(DbError::Database)?,
            None => tracing::debug!("Transaction still shared, rolled back on drop"),
        }
        Ok(())
    }

}
