use sea_orm::DbErr;
use thiserror::Error;

/// Failures while preparing a test database.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to SQLite or creating a table failed.
    #[error(transparent)]
    Database(#[from] DbErr),

    /// The context was used before a connection was opened.
    #[error("test database is not connected")]
    NotConnected,
}
