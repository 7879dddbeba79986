//! SQLite connection pool and table bootstrap.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared pool used across the whole application.
pub type DbPool = SqlitePool;

/// How long a writer waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a new connection pool from the given `database_url`.
///
/// `max_connections` controls the pool ceiling.  The database file is created
/// if it does not exist yet.  In-memory databases live and die with their
/// connection, so they are pinned to a single connection that is never
/// recycled.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = if is_in_memory(database_url) {
        info!("Opening in-memory database");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?
    } else {
        info!("Connecting to database (max_connections={})", max_connections);
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?
    };

    Ok(pool)
}

/// Create the `blogs` table and its title index if they are missing.
///
/// Safe to run on every startup.
pub async fn init_schema(pool: &DbPool) -> Result<(), DbError> {
    info!("Ensuring database schema");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blogs (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            title   TEXT NOT NULL,
            content TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_blogs_title ON blogs (title)")
        .execute(pool)
        .await?;

    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:blogs?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://blogs.db"));
    }

    #[tokio::test]
    async fn in_memory_pool_keeps_schema_between_acquisitions() {
        let pool = create_pool("sqlite::memory:", 8).await.expect("pool");
        init_schema(&pool).await.expect("schema");

        sqlx::query("INSERT INTO blogs (title, content) VALUES ('t', 'c')")
            .execute(&pool)
            .await
            .expect("insert");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = create_pool("sqlite::memory:", 1).await.expect("pool");
        init_schema(&pool).await.expect("first run");
        init_schema(&pool).await.expect("second run");
    }
}
