use thiserror::Error;

/// Errors that can occur when interacting with the article store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write left a required column empty.
    #[error("Constraint violation: {table}.{column} must not be null")]
    ConstraintViolation {
        table: &'static str,
        column: &'static str,
    },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for article store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
