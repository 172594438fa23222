use crate::error::{AppError, Result};
use crate::models::{ActorSummary, Notification, NotificationKind, NotificationView};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Retention contract: listings only ever return the most recent records.
pub const LIST_LIMIT: i64 = 50;

/// Insert a notification record. Pure insert, direct recipient only.
pub async fn insert(
    pool: &PgPool,
    recipient_id: Uuid,
    kind: NotificationKind,
    from_user: Uuid,
    post_id: Option<Uuid>,
    message: &str,
) -> Result<Notification> {
    let row = sqlx::query(
        r#"
        INSERT INTO notifications (user_id, kind, from_user, post_id, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, from_user, post_id, message, read, created_at
        "#,
    )
    .bind(recipient_id)
    .bind(kind.as_str())
    .bind(from_user)
    .bind(post_id)
    .bind(message)
    .fetch_one(pool)
    .await?;

    Ok(Notification {
        id: row.get("id"),
        user_id: row.get("user_id"),
        kind,
        from_user: row.get("from_user"),
        post_id: row.get("post_id"),
        message: row.get("message"),
        read: row.get("read"),
        created_at: row.get("created_at"),
    })
}

/// Notifications for a recipient, newest-first, capped, with the actor's
/// display fields joined in.
pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<NotificationView>> {
    let rows = sqlx::query(
        r#"
        SELECT n.id, n.user_id, n.kind, n.post_id, n.message, n.read, n.created_at,
               u.id AS actor_id, u.first_name AS actor_first_name,
               u.last_name AS actor_last_name, u.picture_path AS actor_picture_path
        FROM notifications n
        JOIN users u ON u.id = n.from_user
        WHERE n.user_id = $1
        ORDER BY n.created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(LIST_LIMIT)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let kind_str: String = row.get("kind");
            let kind = NotificationKind::parse(&kind_str).ok_or_else(|| {
                AppError::Internal(format!("unknown notification kind: {kind_str}"))
            })?;

            Ok(NotificationView {
                id: row.get("id"),
                user_id: row.get("user_id"),
                kind,
                from_user: ActorSummary {
                    id: row.get("actor_id"),
                    first_name: row.get("actor_first_name"),
                    last_name: row.get("actor_last_name"),
                    picture_path: row.get("actor_picture_path"),
                },
                post_id: row.get("post_id"),
                message: row.get("message"),
                read: row.get("read"),
                created_at: row.get("created_at"),
            })
        })
        .collect()
}

/// Count of unread notifications for a recipient
pub async fn unread_count(pool: &PgPool, user_id: Uuid) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM notifications
        WHERE user_id = $1 AND read = FALSE
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Flip every unread notification for a recipient to read
pub async fn mark_all_read(pool: &PgPool, user_id: Uuid) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE notifications
        SET read = TRUE
        WHERE user_id = $1 AND read = FALSE
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
