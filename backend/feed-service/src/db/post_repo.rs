use crate::models::{Post, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post, snapshotting the author's display fields.
/// The like-set starts empty (no rows in post_likes).
pub async fn create_post(
    pool: &PgPool,
    author: &User,
    description: &str,
    picture_path: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, first_name, last_name, location, user_picture_path,
                           picture_path, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, first_name, last_name, location, user_picture_path,
                  picture_path, description, created_at
        "#,
    )
    .bind(author.id)
    .bind(&author.first_name)
    .bind(&author.last_name)
    .bind(&author.location)
    .bind(&author.picture_path)
    .bind(picture_path)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, first_name, last_name, location, user_picture_path,
               picture_path, description, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Full feed, newest-first, unrestricted
pub async fn list_feed(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, first_name, last_name, location, user_picture_path,
               picture_path, description, created_at
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// All posts by one author, newest-first
pub async fn list_posts_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, first_name, last_name, location, user_picture_path,
               picture_path, description, created_at
        FROM posts
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Posts whose like-set contains the given user, newest-first
pub async fn list_posts_liked_by(pool: &PgPool, user_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.user_id, p.first_name, p.last_name, p.location, p.user_picture_path,
               p.picture_path, p.description, p.created_at
        FROM posts p
        JOIN post_likes l ON l.post_id = p.id
        WHERE l.user_id = $1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Posts matching an id set, newest-first
pub async fn list_posts_by_ids(pool: &PgPool, post_ids: &[Uuid]) -> Result<Vec<Post>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, first_name, last_name, location, user_picture_path,
               picture_path, description, created_at
        FROM posts
        WHERE id = ANY($1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Case-insensitive substring search across description and snapshot fields.
/// `pattern` is a pre-escaped LIKE pattern (`%…%`).
pub async fn search_posts(pool: &PgPool, pattern: &str) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, first_name, last_name, location, user_picture_path,
               picture_path, description, created_at
        FROM posts
        WHERE description ILIKE $1
           OR first_name ILIKE $1
           OR last_name ILIKE $1
           OR location ILIKE $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Users in a post's like-set
pub async fn like_user_ids(pool: &PgPool, post_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    let ids: Vec<Uuid> = sqlx::query_scalar(
        r#"
        SELECT user_id
        FROM post_likes
        WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Like rows for a batch of posts as (post_id, user_id) pairs
pub async fn like_user_ids_for_posts(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<(Uuid, Uuid)>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let pairs = sqlx::query_as::<_, (Uuid, Uuid)>(
        r#"
        SELECT post_id, user_id
        FROM post_likes
        WHERE post_id = ANY($1)
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    Ok(pairs)
}

/// Toggle a user's like on a post as a single transaction.
///
/// The like-set is a row-per-key table, so concurrent togglers of different
/// users touch different rows and never clobber each other. For the same
/// user, delete-then-conditional-insert inside one transaction settles to a
/// definite final state. Returns true when the post is liked afterwards.
pub async fn toggle_like(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let removed = sqlx::query(
        r#"
        DELETE FROM post_likes
        WHERE post_id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let now_liked = if removed == 0 {
        sqlx::query(
            r#"
            INSERT INTO post_likes (post_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
        true
    } else {
        false
    };

    tx.commit().await?;

    Ok(now_liked)
}

/// Delete a post and everything scoped to it in one transaction.
/// Ownership is checked by the caller; media cleanup happens outside.
pub async fn delete_post_cascade(pool: &PgPool, post_id: Uuid) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM comments WHERE post_id = $1")
        .bind(post_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM post_likes WHERE post_id = $1")
        .bind(post_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
