/// Comment engine - creation, listing, and author-gated deletion.
/// Mutations return the post's full comment list, newest-first, re-read after
/// the write commits.
use crate::db::{comment_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, NotificationKind};
use crate::services::notifications;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a comment and return the post's comments, newest-first
    pub async fn add_comment(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        text: &str,
    ) -> Result<Vec<Comment>> {
        let author = user_repo::find_user_by_id(&self.pool, author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {author_id} not found")))?;

        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {post_id} not found")))?;

        let comment = comment_repo::create_comment(&self.pool, post_id, &author, text).await?;
        tracing::info!(comment_id = %comment.id, %post_id, author = %author_id, "comment created");

        notifications::fanout(
            &self.pool,
            post.user_id,
            NotificationKind::Comment,
            author_id,
            Some(post_id),
            notifications::comment_message(&author.first_name, &author.last_name),
        )
        .await;

        comment_repo::list_comments_by_post(&self.pool, post_id).await.map_err(Into::into)
    }

    /// Comments for a post, newest-first
    pub async fn get_post_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        comment_repo::list_comments_by_post(&self.pool, post_id)
            .await
            .map_err(Into::into)
    }

    /// Delete a comment and return the remaining comments of its post,
    /// newest-first. Only the comment's own author may delete it.
    pub async fn delete_comment(
        &self,
        comment_id: Uuid,
        requesting_user: Uuid,
    ) -> Result<Vec<Comment>> {
        let comment = comment_repo::find_comment_by_id(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {comment_id} not found")))?;

        if comment.user_id != requesting_user {
            return Err(AppError::Forbidden(
                "you are not allowed to delete this comment".to_string(),
            ));
        }

        comment_repo::delete_comment(&self.pool, comment_id).await?;
        tracing::info!(%comment_id, post_id = %comment.post_id, "comment deleted");

        comment_repo::list_comments_by_post(&self.pool, comment.post_id)
            .await
            .map_err(Into::into)
    }
}
