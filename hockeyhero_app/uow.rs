use std::sync::Arc;

use hockeyhero_types::{
    errors::ApplicationError,
    models::{HeroDetails, HeroKeys},
};

use crate::repository::Repository;

/// A Unit of Work (UoW) works as a provider for repositories
/// that all operate within a single transaction.
#[async_trait::async_trait]
pub trait UnitOfWork<'a>: Send + Sync {
    fn hero_details(&self) -> Arc<dyn Repository<HeroDetails> + 'a>;
    fn hero_keys(&self) -> Arc<dyn Repository<HeroKeys> + 'a>;

    // Consume self so the UoW can't be used after commit/rollback
    async fn commit(self: Box<Self>) -> Result<(), ApplicationError>;
    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError>;
}

/// A factory for creating Unit of Work instances.
#[async_trait::async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    /// Begin a new Unit of Work (transaction).
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError>;
}
