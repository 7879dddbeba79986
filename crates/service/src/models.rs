//! Core domain models for blog posts.
//!
//! `Blog` is the record handed back to callers.  `BlogUpsertPayload` is the
//! raw request body; it becomes an [`Upsert`] exactly once, at the boundary,
//! and validation happens as part of that conversion.

use serde::{Deserialize, Serialize};

use db::models::BlogRow;

use crate::ValidationError;

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

/// A stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
        }
    }
}

// ---------------------------------------------------------------------------
// Create-or-update input
// ---------------------------------------------------------------------------

/// Request body for the create-or-update endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogUpsertPayload {
    pub title: String,
    pub content: String,
    /// Present to update an existing post, absent to create a new one.
    #[serde(default)]
    pub instance_id: Option<i64>,
}

/// A validated create-or-update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    Create { title: String, content: String },
    Update { id: i64, title: String, content: String },
}

impl TryFrom<BlogUpsertPayload> for Upsert {
    type Error = ValidationError;

    fn try_from(payload: BlogUpsertPayload) -> Result<Self, Self::Error> {
        match payload.instance_id {
            None => Ok(Self::Create {
                title: payload.title,
                content: payload.content,
            }),
            Some(id) if id > 0 => Ok(Self::Update {
                id,
                title: payload.title,
                content: payload.content,
            }),
            Some(_) => Err(ValidationError::OutOfRange {
                field: "instance_id",
                reason: "must be a positive integer",
            }),
        }
    }
}

/// What a successful create-or-update did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    Created(Blog),
    Updated(Blog),
}

impl Upserted {
    pub fn blog(&self) -> &Blog {
        match self {
            Self::Created(blog) | Self::Updated(blog) => blog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, content: &str, instance_id: Option<i64>) -> BlogUpsertPayload {
        BlogUpsertPayload {
            title: title.into(),
            content: content.into(),
            instance_id,
        }
    }

    #[test]
    fn missing_instance_id_means_create() {
        let upsert = Upsert::try_from(payload("A", "B", None)).unwrap();
        assert_eq!(upsert, Upsert::Create { title: "A".into(), content: "B".into() });
    }

    #[test]
    fn instance_id_means_update() {
        let upsert = Upsert::try_from(payload("C", "D", Some(1))).unwrap();
        assert_eq!(upsert, Upsert::Update { id: 1, title: "C".into(), content: "D".into() });
    }

    #[test]
    fn non_positive_instance_id_is_rejected() {
        for id in [0, -3] {
            let err = Upsert::try_from(payload("A", "B", Some(id))).unwrap_err();
            assert!(matches!(err, ValidationError::OutOfRange { field: "instance_id", .. }));
        }
    }

    #[test]
    fn any_text_is_accepted_for_title_and_content() {
        let title = "x".repeat(300);
        let upsert = Upsert::try_from(payload(&title, "", None)).unwrap();
        assert_eq!(upsert, Upsert::Create { title, content: String::new() });

        assert!(Upsert::try_from(payload("   ", "body", Some(4))).is_ok());
    }
}
