//! Service-level error types.

use thiserror::Error;

use db::DbError;

/// Input that failed validation before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric field outside its accepted range.
    #[error("{field} {reason}")]
    OutOfRange { field: &'static str, reason: &'static str },

    /// Body, path or query could not be parsed at all.
    #[error("malformed request: {0}")]
    Malformed(String),
}

/// Errors produced by the blog service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The referenced blog id does not exist.
    #[error("blog {0} not found")]
    NotFound(i64),

    /// A write, commit, or rollback failed.
    #[error("persistence failure: {0}")]
    Persistence(DbError),

    /// Anything else that went wrong while serving a read.
    #[error("unexpected failure: {0}")]
    Unhandled(String),
}

impl ServiceError {
    /// Classify a store error raised on a write path.
    pub(crate) fn from_write(err: DbError) -> Self {
        match err {
            DbError::NotFound(id) => Self::NotFound(id),
            other => Self::Persistence(other),
        }
    }

    /// Classify a store error raised on a read path.
    pub(crate) fn from_read(err: DbError) -> Self {
        match err {
            DbError::NotFound(id) => Self::NotFound(id),
            other => Self::Unhandled(other.to_string()),
        }
    }

    /// Short human-readable summary, suitable for a response message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid request",
            Self::NotFound(_) => "Blog not found",
            Self::Persistence(_) => "Something went wrong",
            Self::Unhandled(_) => "An error occurred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display() {
        let err = ValidationError::Malformed("missing field `content`".into());
        assert_eq!(err.to_string(), "malformed request: missing field `content`");

        let err = ValidationError::OutOfRange { field: "page_size", reason: "must be at least 1" };
        assert_eq!(err.to_string(), "page_size must be at least 1");
    }

    #[test]
    fn store_not_found_maps_to_not_found_on_both_paths() {
        assert!(matches!(ServiceError::from_write(DbError::NotFound(7)), ServiceError::NotFound(7)));
        assert!(matches!(ServiceError::from_read(DbError::NotFound(7)), ServiceError::NotFound(7)));
    }

    #[test]
    fn store_failures_split_by_path() {
        let write = ServiceError::from_write(DbError::Sqlx(sqlx::Error::PoolClosed));
        assert!(matches!(write, ServiceError::Persistence(_)));
        assert_eq!(write.message(), "Something went wrong");

        let read = ServiceError::from_read(DbError::Sqlx(sqlx::Error::PoolClosed));
        assert!(matches!(read, ServiceError::Unhandled(_)));
        assert_eq!(read.message(), "An error occurred");
    }
}
