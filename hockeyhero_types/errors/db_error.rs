use thiserror::Error;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{entity_name} with ID {id} not found")]
    RecordNotFound { entity_name: &'static str, id: i64 },

    #[error("{0} must be set")]
    MissingDatabaseUrl(&'static str),

    /// A write broke a unique or foreign key constraint.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Transaction error: {0}")]
    Transaction(String),
}
