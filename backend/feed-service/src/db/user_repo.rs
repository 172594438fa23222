use crate::models::{FriendSummary, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Find a user by ID
pub async fn find_user_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, first_name, last_name, location, occupation, picture_path,
               x_link, linked_in_link, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Friend ids of a user, oldest edge first
pub async fn friend_ids(pool: &PgPool, user_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    let ids: Vec<Uuid> = sqlx::query_scalar(
        r#"
        SELECT friend_id
        FROM friendships
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Friend ids for a batch of users, returned as (user_id, friend_id) pairs
pub async fn friend_ids_for_users(
    pool: &PgPool,
    user_ids: &[Uuid],
) -> Result<Vec<(Uuid, Uuid)>, sqlx::Error> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    let pairs = sqlx::query_as::<_, (Uuid, Uuid)>(
        r#"
        SELECT user_id, friend_id
        FROM friendships
        WHERE user_id = ANY($1)
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_ids)
    .fetch_all(pool)
    .await?;

    Ok(pairs)
}

/// Lightweight projections of a user's friends
pub async fn friend_summaries(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<FriendSummary>, sqlx::Error> {
    let friends = sqlx::query_as::<_, FriendSummary>(
        r#"
        SELECT u.id, u.first_name, u.last_name, u.occupation, u.picture_path
        FROM friendships f
        JOIN users u ON u.id = f.friend_id
        WHERE f.user_id = $1
        ORDER BY f.created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(friends)
}

/// Check whether a user exists without fetching the full row
pub async fn user_exists(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Case-insensitive substring search across user display fields.
/// `pattern` is a pre-escaped LIKE pattern (`%…%`).
pub async fn search_users(pool: &PgPool, pattern: &str) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, first_name, last_name, location, occupation, picture_path,
               x_link, linked_in_link, created_at
        FROM users
        WHERE first_name ILIKE $1
           OR last_name ILIKE $1
           OR location ILIKE $1
           OR occupation ILIKE $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(users)
}
