use thiserror::Error;

/// Errors raised while setting up infrastructure.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The tracing subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Result type for infrastructure operations.
pub type Result<T> = std::result::Result<T, InfrastructureError>;
