//! Blog CRUD service.
//!
//! `BlogService` is a stateless orchestrator over the `db` repository:
//! 1. Every write runs inside its own transaction.
//! 2. The transaction is committed only when the store call succeeded.
//! 3. Every other exit path rolls back, explicitly or when the transaction
//!    is dropped.
//! 4. Reads hold one pooled connection for the length of the call.
//!
//! Concurrent updates to the same post are not coordinated; the last
//! commit wins.

use sqlx::{Sqlite, Transaction};
use tracing::{error, info, instrument, warn};

use db::models::BlogFilter;
use db::repository::blogs as blog_repo;
use db::{DbError, DbPool};

use crate::{Blog, Page, Pagination, ServiceError, Upsert, Upserted};

/// Cheap to clone; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct BlogService {
    pool: DbPool,
}

impl BlogService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Create a new post or replace the fields of an existing one.
    #[instrument(skip_all)]
    pub async fn create_or_update(&self, upsert: Upsert) -> Result<Upserted, ServiceError> {
        let mut tx = self.begin().await?;

        let result = match upsert {
            Upsert::Create { title, content } => blog_repo::insert_blog(&mut tx, &title, &content)
                .await
                .map(|row| Upserted::Created(row.into())),
            Upsert::Update { id, title, content } => {
                blog_repo::update_blog(&mut tx, id, &title, &content)
                    .await
                    .map(|row| Upserted::Updated(row.into()))
            }
        };

        let upserted = settle(tx, result).await?;
        match &upserted {
            Upserted::Created(blog) => info!(blog_id = blog.id, "blog created"),
            Upserted::Updated(blog) => info!(blog_id = blog.id, "blog updated"),
        }
        Ok(upserted)
    }

    /// Delete a post by id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let mut tx = self.begin().await?;
        let result = blog_repo::delete_blog(&mut tx, id).await;
        settle(tx, result).await?;

        info!(blog_id = id, "blog deleted");
        Ok(())
    }

    /// List posts, optionally narrowed by id and/or title substring.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self, filter: BlogFilter) -> Result<Vec<Blog>, ServiceError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| ServiceError::from_read(e.into()))
            .inspect_err(log_failure)?;

        let rows = blog_repo::list_blogs(&mut conn, &filter)
            .await
            .map_err(ServiceError::from_read)
            .inspect_err(log_failure)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    /// Fetch one post by id.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: i64) -> Result<Blog, ServiceError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| ServiceError::from_read(e.into()))
            .inspect_err(log_failure)?;

        let row = blog_repo::get_blog(&mut conn, id)
            .await
            .map_err(ServiceError::from_read)
            .inspect_err(log_failure)?;

        Ok(row.into())
    }

    /// Fetch one page of posts with totals.
    ///
    /// `page` defaults to 1 and `page_size` to 10; out-of-range values are a
    /// validation error.
    #[instrument(skip(self))]
    pub async fn fetch_paginated(
        &self,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Page<Blog>, ServiceError> {
        let pagination = Pagination::new(page, page_size)
            .map_err(ServiceError::from)
            .inspect_err(log_failure)?;

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| ServiceError::from_read(e.into()))
            .inspect_err(log_failure)?;

        let rows = blog_repo::list_blogs_page(&mut conn, pagination.offset(), pagination.page_size())
            .await
            .map_err(ServiceError::from_read)
            .inspect_err(log_failure)?;
        let total_records = blog_repo::count_blogs(&mut conn)
            .await
            .map_err(ServiceError::from_read)
            .inspect_err(log_failure)?;

        Ok(Page {
            data: rows.into_iter().map(Blog::from).collect(),
            total_records,
            total_pages: pagination.total_pages(total_records),
            current_page: pagination.page(),
            page_size: pagination.page_size(),
        })
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>, ServiceError> {
        self.pool
            .begin()
            .await
            .map_err(|e| ServiceError::Persistence(e.into()))
            .inspect_err(log_failure)
    }
}

/// Commit on success, roll back on failure.
async fn settle<T>(
    tx: Transaction<'static, Sqlite>,
    result: Result<T, DbError>,
) -> Result<T, ServiceError> {
    match result {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|e| ServiceError::Persistence(e.into()))
                .inspect_err(log_failure)?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                error!(error = %rollback_err, "rollback failed");
            }
            Err(ServiceError::from_write(err)).inspect_err(log_failure)
        }
    }
}

fn log_failure(err: &ServiceError) {
    match err {
        ServiceError::Validation(e) => warn!(error = %e, "rejected invalid input"),
        ServiceError::NotFound(id) => warn!(blog_id = id, "blog not found"),
        ServiceError::Persistence(e) => error!(error = %e, "persistence failure"),
        ServiceError::Unhandled(e) => error!(error = %e, "unexpected failure"),
    }
}
