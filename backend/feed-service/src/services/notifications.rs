/// Notification fan-out - synthesizes notification records from
/// like/comment/friend events and tracks read state
use crate::db::notification_repo;
use crate::error::Result;
use crate::models::{Notification, NotificationKind, NotificationView};
use sqlx::PgPool;
use uuid::Uuid;

pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification for a single recipient. No broadcast: the fan-out
    /// never goes past the direct recipient.
    pub async fn notify(
        &self,
        recipient_id: Uuid,
        kind: NotificationKind,
        from_user: Uuid,
        post_id: Option<Uuid>,
        message: &str,
    ) -> Result<Notification> {
        let notification =
            notification_repo::insert(&self.pool, recipient_id, kind, from_user, post_id, message)
                .await?;

        tracing::info!(
            notification_id = %notification.id,
            recipient = %recipient_id,
            kind = kind.as_str(),
            "notification created"
        );

        Ok(notification)
    }

    /// Most recent notifications for a recipient (capped at 50), newest-first,
    /// with the actor's display fields resolved.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<NotificationView>> {
        notification_repo::list_for_user(&self.pool, user_id).await
    }

    /// Count of unread notifications
    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64> {
        notification_repo::unread_count(&self.pool, user_id).await
    }

    /// Bulk-flip all of a recipient's unread notifications to read
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<()> {
        let flipped = notification_repo::mark_all_read(&self.pool, user_id).await?;
        tracing::debug!(%user_id, flipped, "notifications marked read");
        Ok(())
    }
}

/// Best-effort fan-out used inside mutating services.
///
/// The primary mutation has already committed when this runs; a failed
/// notification insert is logged and swallowed so the caller's response stays
/// consistent with the committed write. Self-directed events are skipped, so
/// each triggering event produces at most one notification.
pub(crate) async fn fanout(
    pool: &PgPool,
    recipient_id: Uuid,
    kind: NotificationKind,
    from_user: Uuid,
    post_id: Option<Uuid>,
    message: String,
) {
    if recipient_id == from_user {
        return;
    }

    if let Err(err) =
        notification_repo::insert(pool, recipient_id, kind, from_user, post_id, &message).await
    {
        tracing::warn!(
            recipient = %recipient_id,
            kind = kind.as_str(),
            "notification fan-out failed: {err}"
        );
    }
}

/// Message shown for a like event
pub fn like_message(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name} liked your post.")
}

/// Message shown for a comment event
pub fn comment_message(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name} commented on your post.")
}

/// Message shown for a new friend edge
pub fn friend_message(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name} added you as a friend.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_actor_name() {
        assert_eq!(like_message("Ayşe", "Yılmaz"), "Ayşe Yılmaz liked your post.");
        assert_eq!(
            comment_message("Mehmet", "Demir"),
            "Mehmet Demir commented on your post."
        );
        assert_eq!(
            friend_message("Elif", "Kaya"),
            "Elif Kaya added you as a friend."
        );
    }
}
