use async_trait::async_trait;
use std::{marker::PhantomData, sync::Arc};

use hockeyhero_types::errors::{AppError, ApplicationError};

use crate::{
    command_handlers::helpers::ensure_matching_id,
    config::Config,
    cqrs::{CommandHandler, commands::UpdateResource},
    resource::Resource,
    uow::UnitOfWork,
};

pub struct UpdateResourceCommandHandler<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> UpdateResourceCommandHandler<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> CommandHandler<UpdateResource<R>> for UpdateResourceCommandHandler<R> {
    async fn handle(
        &self,
        command: UpdateResource<R>,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<R, ApplicationError> {
        let id = ensure_matching_id::<R>(command.id, command.record.id())?;

        let repo = R::repository(&**uow);
        if !repo.exists_by_id(id).await? {
            return Err(AppError::id_not_found(R::ENTITY_NAME).into());
        }

        repo.save(&command.record).await
    }
}
