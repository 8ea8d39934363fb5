use async_trait::async_trait;
use std::{marker::PhantomData, sync::Arc};

use hockeyhero_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteResource},
    resource::Resource,
    uow::UnitOfWork,
};

pub struct DeleteResourceCommandHandler<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> DeleteResourceCommandHandler<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> CommandHandler<DeleteResource<R>> for DeleteResourceCommandHandler<R> {
    async fn handle(
        &self,
        command: DeleteResource<R>,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let repo = R::repository(&**uow);
        if !repo.exists_by_id(command.id).await? {
            tracing::debug!("{} {} already absent, nothing to delete", R::ENTITY_NAME, command.id);
            return Ok(());
        }

        repo.delete_by_id(command.id).await
    }
}
