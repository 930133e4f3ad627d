use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock for '{name}': requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: i64,
    },

    #[error("Quantity of '{name}' would go negative: current {current}, delta {delta}")]
    InvariantViolation {
        name: String,
        current: i64,
        delta: i64,
    },
}
