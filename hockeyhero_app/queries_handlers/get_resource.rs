use async_trait::async_trait;
use std::{marker::PhantomData, sync::Arc};

use hockeyhero_types::errors::{ApplicationError, DbError};

use crate::{
    config::Config,
    cqrs::{QueryHandler, queries::GetResource},
    resource::Resource,
    uow::UnitOfWork,
};

pub struct GetResourceHandler<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> GetResourceHandler<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> QueryHandler<GetResource<R>> for GetResourceHandler<R> {
    async fn handle(
        &self,
        query: GetResource<R>,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<R, ApplicationError> {
        R::repository(&**uow)
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| {
                DbError::RecordNotFound {
                    entity_name: R::ENTITY_NAME,
                    id: query.id,
                }
                .into()
            })
    }
}
