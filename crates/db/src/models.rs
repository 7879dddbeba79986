//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Domain types live in the `service` crate.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted blog post row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BlogRow {
    /// Assigned by SQLite on insert, never reused.
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Optional filters for listing blogs. Present filters are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    /// Exact id match.
    pub id: Option<i64>,
    /// Case-sensitive substring of the title.
    pub title_contains: Option<String>,
}
