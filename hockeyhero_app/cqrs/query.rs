use async_trait::async_trait;
use hockeyhero_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, uow::UnitOfWork};

/// A read request dispatched through [`crate::app::AppBus::query`].
pub trait Query: Send + Sync {
    /// What the handler hands back, e.g. one record or a list of them.
    type Output: Send + Sync;
}

/// Runs a [`Query`] against the repositories of `uow`.
///
/// Whatever the handler writes is discarded: the bus rolls the unit of work
/// back after every query.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
