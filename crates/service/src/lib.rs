//! `service` crate — blog domain models, input validation, and the CRUD service.

pub mod models;
pub mod error;
pub mod pagination;
pub mod crud;

pub use models::{Blog, BlogUpsertPayload, Upsert, Upserted};
pub use error::{ServiceError, ValidationError};
pub use pagination::{Page, Pagination};
pub use crud::BlogService;
pub use db::models::BlogFilter;
