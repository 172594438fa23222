/// Feed engine - post creation, listings, the like toggle, and owner-gated
/// deletion with its media cascade
use crate::db::{comment_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::media::AssetStore;
use crate::models::{NotificationKind, Post, PostView, User};
use crate::services::notifications;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct PostService {
    pool: PgPool,
    assets: Arc<AssetStore>,
}

impl PostService {
    pub fn new(pool: PgPool, assets: Arc<AssetStore>) -> Self {
        Self { pool, assets }
    }

    /// Create a post and return the full feed, newest-first.
    ///
    /// Returning the whole list is a client cache-coherency contract, so the
    /// feed is re-read after the insert commits rather than patched locally.
    pub async fn create_post(
        &self,
        author_id: Uuid,
        description: &str,
        picture_path: Option<&str>,
    ) -> Result<Vec<PostView>> {
        let author = self.resolve_user(author_id).await?;

        let post = post_repo::create_post(&self.pool, &author, description, picture_path).await?;
        tracing::info!(post_id = %post.id, author = %author_id, "post created");

        self.get_feed().await
    }

    /// Full feed, newest-first, unrestricted
    pub async fn get_feed(&self) -> Result<Vec<PostView>> {
        let posts = post_repo::list_feed(&self.pool).await?;
        self.assemble_views(posts).await
    }

    /// Posts authored by one user, newest-first
    pub async fn get_user_posts(&self, user_id: Uuid) -> Result<Vec<PostView>> {
        let posts = post_repo::list_posts_by_user(&self.pool, user_id).await?;
        self.assemble_views(posts).await
    }

    /// Posts whose like-set contains the user
    pub async fn get_user_liked_posts(&self, user_id: Uuid) -> Result<Vec<PostView>> {
        let posts = post_repo::list_posts_liked_by(&self.pool, user_id).await?;
        self.assemble_views(posts).await
    }

    /// Posts the user has commented on, each exactly once
    pub async fn get_user_commented_posts(&self, user_id: Uuid) -> Result<Vec<PostView>> {
        let post_ids = comment_repo::commented_post_ids(&self.pool, user_id).await?;
        let posts = post_repo::list_posts_by_ids(&self.pool, &post_ids).await?;
        self.assemble_views(posts).await
    }

    /// Toggle the acting user's like on a post and return the updated post.
    ///
    /// Safe to retry: a repeated call just toggles back. Fan-out fires only on
    /// the transition to liked, and never for the author liking their own post.
    pub async fn toggle_like(&self, post_id: Uuid, acting_user: Uuid) -> Result<PostView> {
        let post = self.resolve_post(post_id).await?;

        let now_liked = post_repo::toggle_like(&self.pool, post_id, acting_user).await?;
        tracing::debug!(%post_id, user = %acting_user, now_liked, "like toggled");

        if now_liked {
            if let Some(actor) = user_repo::find_user_by_id(&self.pool, acting_user).await? {
                notifications::fanout(
                    &self.pool,
                    post.user_id,
                    NotificationKind::Like,
                    acting_user,
                    Some(post_id),
                    notifications::like_message(&actor.first_name, &actor.last_name),
                )
                .await;
            }
        }

        let likes = post_repo::like_user_ids(&self.pool, post_id).await?;
        Ok(PostView::from_entity(post, likes))
    }

    /// Delete a post. Only the author may delete; the stored media asset is
    /// removed best-effort before the rows go away.
    pub async fn delete_post(&self, post_id: Uuid, requesting_user: Uuid) -> Result<()> {
        let post = self.resolve_post(post_id).await?;

        if post.user_id != requesting_user {
            return Err(AppError::Forbidden(
                "you are not allowed to delete this post".to_string(),
            ));
        }

        if let Some(token) = post.picture_path.as_deref() {
            if let Err(err) = self.assets.delete(token).await {
                tracing::warn!(%post_id, token, "media cleanup failed: {err}");
            }
        }

        post_repo::delete_post_cascade(&self.pool, post_id).await?;
        tracing::info!(%post_id, "post deleted");

        Ok(())
    }

    async fn resolve_user(&self, user_id: Uuid) -> Result<User> {
        user_repo::find_user_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {user_id} not found")))
    }

    async fn resolve_post(&self, post_id: Uuid) -> Result<Post> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {post_id} not found")))
    }

    /// Batch-assemble wire views: one like-rows query for the whole listing.
    async fn assemble_views(&self, posts: Vec<Post>) -> Result<Vec<PostView>> {
        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let like_rows = post_repo::like_user_ids_for_posts(&self.pool, &post_ids).await?;

        let mut likes_by_post: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (post_id, user_id) in like_rows {
            likes_by_post.entry(post_id).or_default().push(user_id);
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let likes = likes_by_post.remove(&post.id).unwrap_or_default();
                PostView::from_entity(post, likes)
            })
            .collect())
    }
}
