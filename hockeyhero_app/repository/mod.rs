use hockeyhero_types::errors::ApplicationError;

/// Persistence contract shared by every resource.
#[async_trait::async_trait]
pub trait Repository<R: Send + Sync>: Send + Sync {
    /// Inserts a record without id, or overwrites the stored one with the same id.
    /// Returns the record as stored, id included.
    async fn save(&self, record: &R) -> Result<R, ApplicationError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApplicationError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, ApplicationError>;

    /// Returns all records ordered by id.
    async fn find_all(&self) -> Result<Vec<R>, ApplicationError>;

    /// Removes the record if present. Missing ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), ApplicationError>;
}
