use async_trait::async_trait;
use std::{marker::PhantomData, sync::Arc};

use hockeyhero_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreateResource},
    resource::Resource,
    uow::UnitOfWork,
};

pub struct CreateResourceCommandHandler<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> CreateResourceCommandHandler<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> CommandHandler<CreateResource<R>> for CreateResourceCommandHandler<R> {
    async fn handle(
        &self,
        command: CreateResource<R>,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<R, ApplicationError> {
        if command.record.id().is_some() {
            return Err(AppError::id_exists(R::ENTITY_NAME).into());
        }

        R::repository(&**uow).save(&command.record).await
    }
}
