/// Social graph - symmetric friend edges stored redundantly on both sides
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::{FriendSummary, NotificationKind};
use crate::services::notifications;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SocialGraphService {
    pool: PgPool,
}

impl SocialGraphService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle the friend edge between two users and return the first user's
    /// updated friend list.
    ///
    /// Both directed rows are written or removed inside one transaction, so a
    /// crash can never leave a one-sided edge. Self-friending is rejected
    /// outright.
    pub async fn toggle_friend(
        &self,
        user_id: Uuid,
        friend_id: Uuid,
    ) -> Result<Vec<FriendSummary>> {
        if user_id == friend_id {
            return Err(AppError::Forbidden("cannot friend yourself".to_string()));
        }

        let actor = user_repo::find_user_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {user_id} not found")))?;

        if !user_repo::user_exists(&self.pool, friend_id).await? {
            return Err(AppError::NotFound(format!("user {friend_id} not found")));
        }

        let now_friends = self.toggle_edge(user_id, friend_id).await?;
        tracing::info!(%user_id, %friend_id, now_friends, "friend edge toggled");

        if now_friends {
            notifications::fanout(
                &self.pool,
                friend_id,
                NotificationKind::Friend,
                user_id,
                None,
                notifications::friend_message(&actor.first_name, &actor.last_name),
            )
            .await;
        }

        user_repo::friend_summaries(&self.pool, user_id)
            .await
            .map_err(Into::into)
    }

    /// Friend list projection for a user. Unknown user is an error; a known
    /// user with no friends is an empty list.
    pub async fn get_friends(&self, user_id: Uuid) -> Result<Vec<FriendSummary>> {
        if !user_repo::user_exists(&self.pool, user_id).await? {
            return Err(AppError::NotFound(format!("user {user_id} not found")));
        }

        user_repo::friend_summaries(&self.pool, user_id)
            .await
            .map_err(Into::into)
    }

    /// Remove both directed rows, or insert both when the edge was absent.
    /// Returns true when the users are friends afterwards.
    async fn toggle_edge(&self, user_id: Uuid, friend_id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(
            r#"
            DELETE FROM friendships
            WHERE (user_id = $1 AND friend_id = $2)
               OR (user_id = $2 AND friend_id = $1)
            "#,
        )
        .bind(user_id)
        .bind(friend_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let now_friends = if removed == 0 {
            sqlx::query(
                r#"
                INSERT INTO friendships (user_id, friend_id)
                VALUES ($1, $2), ($2, $1)
                ON CONFLICT (user_id, friend_id) DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(friend_id)
            .execute(&mut *tx)
            .await?;
            true
        } else {
            false
        };

        tx.commit().await?;

        Ok(now_friends)
    }
}
