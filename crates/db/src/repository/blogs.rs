//! Blog CRUD operations.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    DbError,
    models::{BlogFilter, BlogRow},
};

/// Insert a new blog post and return the stored row with its assigned id.
pub async fn insert_blog(
    conn: &mut SqliteConnection,
    title: &str,
    content: &str,
) -> Result<BlogRow, DbError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        INSERT INTO blogs (title, content)
        VALUES (?, ?)
        RETURNING id, title, content
        "#,
    )
    .bind(title)
    .bind(content)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

/// Overwrite the title and content of an existing blog post.
///
/// Returns `DbError::NotFound` if no row has the given id.
pub async fn update_blog(
    conn: &mut SqliteConnection,
    id: i64,
    title: &str,
    content: &str,
) -> Result<BlogRow, DbError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        UPDATE blogs
        SET title = ?, content = ?
        WHERE id = ?
        RETURNING id, title, content
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound(id))?;

    Ok(row)
}

/// Permanently delete a blog post by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_blog(conn: &mut SqliteConnection, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound(id));
    }

    Ok(())
}

/// Fetch a single blog post by its primary key.
pub async fn get_blog(conn: &mut SqliteConnection, id: i64) -> Result<BlogRow, DbError> {
    let row = sqlx::query_as::<_, BlogRow>("SELECT id, title, content FROM blogs WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(DbError::NotFound(id))?;

    Ok(row)
}

/// Return every blog post matching `filter`, ordered by id.
///
/// The title filter uses `instr` rather than `LIKE` because SQLite's `LIKE`
/// ignores ASCII case.
pub async fn list_blogs(
    conn: &mut SqliteConnection,
    filter: &BlogFilter,
) -> Result<Vec<BlogRow>, DbError> {
    let mut query: QueryBuilder<'_, Sqlite> =
        QueryBuilder::new("SELECT id, title, content FROM blogs WHERE 1 = 1");

    if let Some(id) = filter.id {
        query.push(" AND id = ").push_bind(id);
    }
    if let Some(title) = filter.title_contains.as_deref() {
        query.push(" AND instr(title, ").push_bind(title).push(") > 0");
    }
    query.push(" ORDER BY id ASC");

    let rows = query
        .build_query_as::<BlogRow>()
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows)
}

/// Return one window of blog posts, ordered by id.
pub async fn list_blogs_page(
    conn: &mut SqliteConnection,
    offset: i64,
    limit: i64,
) -> Result<Vec<BlogRow>, DbError> {
    let rows = sqlx::query_as::<_, BlogRow>(
        "SELECT id, title, content FROM blogs ORDER BY id ASC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Total number of blog posts.
pub async fn count_blogs(conn: &mut SqliteConnection) -> Result<i64, DbError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
        .fetch_one(&mut *conn)
        .await?;

    Ok(total)
}
