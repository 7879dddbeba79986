//! `db` crate — pure persistence layer.
//!
//! Provides a SQLite connection pool, the `blogs` row struct, and repository
//! functions for every store operation.  No business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
