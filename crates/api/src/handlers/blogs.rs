use axum::{extract::State, response::Response};
use serde::Deserialize;
use service::{BlogFilter, BlogUpsertPayload, ServiceError, Upsert, Upserted};

use super::AppState;
use crate::envelope::{build_envelope, Reply};
use crate::extractors::{ValidJson, ValidPath, ValidQuery};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub blog_id: Option<i64>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// GET /blogs
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Response {
    let filter = BlogFilter {
        id: params.blog_id,
        title_contains: params.title,
    };

    let outcome = state
        .service
        .fetch_all(filter)
        .await
        .map(|blogs| Reply::ok("Blogs fetched successfully", blogs));
    build_envelope(outcome)
}

/// GET /blogs/{blog_id}
pub async fn get(State(state): State<AppState>, ValidPath(blog_id): ValidPath<i64>) -> Response {
    let outcome = state
        .service
        .fetch_by_id(blog_id)
        .await
        .map(|blog| Reply::ok("Blog fetched successfully", blog));
    build_envelope(outcome)
}

/// GET /blogs-paginated-view
pub async fn paginated(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Response {
    let outcome = state
        .service
        .fetch_paginated(params.page, params.page_size)
        .await
        .map(|page| Reply::ok("Blogs fetched successfully", page));
    build_envelope(outcome)
}

/// POST /blogs
///
/// Creates a post when the body has no `instance_id`, updates that post
/// otherwise. Both answer 201; the message tells them apart.
pub async fn create_or_update(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<BlogUpsertPayload>,
) -> Response {
    let outcome = match Upsert::try_from(payload) {
        Ok(upsert) => state.service.create_or_update(upsert).await,
        Err(e) => {
            tracing::warn!(error = %e, "rejected blog payload");
            Err(ServiceError::Validation(e))
        }
    };

    build_envelope(outcome.map(|upserted| match upserted {
        Upserted::Created(blog) => Reply::created("Blog created successfully", blog),
        Upserted::Updated(blog) => Reply::created("Blog updated successfully", blog),
    }))
}

/// DELETE /blogs/{blog_id}
pub async fn delete(State(state): State<AppState>, ValidPath(blog_id): ValidPath<i64>) -> Response {
    let outcome = state
        .service
        .delete(blog_id)
        .await
        .map(|()| Reply::empty("Blog deleted successfully"));
    build_envelope(outcome)
}
