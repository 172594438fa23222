use crate::models::{Comment, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a comment, snapshotting the author's display fields
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    author: &User,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, user_id, first_name, last_name, user_picture_path, comment)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, post_id, user_id, first_name, last_name, user_picture_path,
                  comment, created_at
        "#,
    )
    .bind(post_id)
    .bind(author.id)
    .bind(&author.first_name)
    .bind(&author.last_name)
    .bind(&author.picture_path)
    .bind(text)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Find a comment by ID
pub async fn find_comment_by_id(
    pool: &PgPool,
    comment_id: Uuid,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, first_name, last_name, user_picture_path,
               comment, created_at
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Comments for a post, newest-first
pub async fn list_comments_by_post(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, first_name, last_name, user_picture_path,
               comment, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Delete a comment by ID
pub async fn delete_comment(pool: &PgPool, comment_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM comments
        WHERE id = $1
        "#,
    )
    .bind(comment_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Distinct posts a user has commented on.
/// A user commenting twice on one post contributes that post once.
pub async fn commented_post_ids(pool: &PgPool, user_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    let ids: Vec<Uuid> = sqlx::query_scalar(
        r#"
        SELECT DISTINCT post_id
        FROM comments
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}
