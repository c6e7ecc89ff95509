/// Error type shared by every storage operation
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors raised by SeaORM or the underlying driver, surfaced unchanged
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Orm(#[from] sea_orm::DbErr),

    /// Connection could not be established after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

impl DatabaseError {
    /// True when the store could not be reached at all, as opposed to a
    /// statement that reached the store and failed.
    pub fn is_connection_error(&self) -> bool {
        match self {
            #[cfg(feature = "postgres")]
            DatabaseError::Orm(err) => matches!(
                err,
                sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_)
            ),
            DatabaseError::ConnectionFailed(_) | DatabaseError::HealthCheckFailed(_) => true,
            DatabaseError::MigrationError(_) => false,
        }
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
