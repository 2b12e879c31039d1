use core_config::ConfigError;

/// Errors raised while configuring, connecting to or probing the database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("SQL error: {0}")]
    Sql(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
