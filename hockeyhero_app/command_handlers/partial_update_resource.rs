use async_trait::async_trait;
use std::{marker::PhantomData, sync::Arc};

use hockeyhero_types::errors::{ApplicationError, DbError};

use crate::{
    command_handlers::helpers::ensure_matching_id,
    config::Config,
    cqrs::{CommandHandler, commands::PartialUpdateResource},
    resource::Resource,
    uow::UnitOfWork,
};

pub struct PartialUpdateResourceCommandHandler<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> PartialUpdateResourceCommandHandler<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> CommandHandler<PartialUpdateResource<R>>
    for PartialUpdateResourceCommandHandler<R>
{
    async fn handle(
        &self,
        command: PartialUpdateResource<R>,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<R, ApplicationError> {
        let id = ensure_matching_id::<R>(command.id, R::patch_id(&command.patch))?;
        let not_found = || DbError::RecordNotFound {
            entity_name: R::ENTITY_NAME,
            id,
        };

        let repo = R::repository(&**uow);
        if !repo.exists_by_id(id).await? {
            return Err(not_found().into());
        }

        // The row can still disappear between the existence check and the load.
        let mut existing = repo.find_by_id(id).await?.ok_or_else(not_found)?;
        existing.apply_patch(command.patch);

        repo.save(&existing).await
    }
}
