use async_trait::async_trait;
use std::{marker::PhantomData, sync::Arc};

use hockeyhero_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{QueryHandler, queries::ListResources},
    resource::Resource,
    uow::UnitOfWork,
};

pub struct ListResourcesHandler<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ListResourcesHandler<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> QueryHandler<ListResources<R>> for ListResourcesHandler<R> {
    async fn handle(
        &self,
        query: ListResources<R>,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Vec<R>, ApplicationError> {
        let records = R::repository(&**uow).find_all().await?;

        Ok(match query.filter.as_deref() {
            Some(filter) => records
                .into_iter()
                .filter(|record| record.matches_filter(filter))
                .collect(),
            None => records,
        })
    }
}
