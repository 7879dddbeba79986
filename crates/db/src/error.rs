//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// No `blogs` row carries the given id.
    #[error("blog {0} not found")]
    NotFound(i64),
}
