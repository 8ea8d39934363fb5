use hockeyhero_types::errors::{AppError, ApplicationError};

use crate::resource::Resource;

/// Checks the id carried by an update body against the id in the path.
pub(crate) fn ensure_matching_id<R: Resource>(
    path_id: i64,
    body_id: Option<i64>,
) -> Result<i64, ApplicationError> {
    let body_id = body_id.ok_or_else(|| AppError::id_null(R::ENTITY_NAME))?;
    if body_id != path_id {
        return Err(AppError::id_invalid(R::ENTITY_NAME).into());
    }
    Ok(body_id)
}
