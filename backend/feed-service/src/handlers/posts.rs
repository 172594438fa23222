/// Post handlers - HTTP endpoints for the feed engine
use crate::error::Result;
use crate::media::AssetStore;
use crate::middleware::UserId;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(max = 2000))]
    pub description: String,
    /// Stored-path token handed out by the upload collaborator
    pub picture_path: Option<String>,
}

/// Create a new post; responds with the full feed, newest-first
pub async fn create_post(
    pool: web::Data<PgPool>,
    assets: web::Data<Arc<AssetStore>>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()
        .map_err(|e| crate::error::AppError::BadRequest(e.to_string()))?;

    let service = PostService::new((**pool).clone(), assets.get_ref().clone());
    let feed = service
        .create_post(user_id.0, &req.description, req.picture_path.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(feed))
}

/// Full feed, newest-first
pub async fn get_feed(
    pool: web::Data<PgPool>,
    assets: web::Data<Arc<AssetStore>>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), assets.get_ref().clone());
    let feed = service.get_feed().await?;

    Ok(HttpResponse::Ok().json(feed))
}

/// Posts authored by a user
pub async fn get_user_posts(
    pool: web::Data<PgPool>,
    assets: web::Data<Arc<AssetStore>>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), assets.get_ref().clone());
    let posts = service.get_user_posts(*user_id).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Toggle the acting user's like on a post
pub async fn like_post(
    pool: web::Data<PgPool>,
    assets: web::Data<Arc<AssetStore>>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), assets.get_ref().clone());
    let post = service.toggle_like(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Posts the user has liked
pub async fn get_user_liked_posts(
    pool: web::Data<PgPool>,
    assets: web::Data<Arc<AssetStore>>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), assets.get_ref().clone());
    let posts = service.get_user_liked_posts(*user_id).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Posts the user has commented on, each exactly once
pub async fn get_user_commented_posts(
    pool: web::Data<PgPool>,
    assets: web::Data<Arc<AssetStore>>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), assets.get_ref().clone());
    let posts = service.get_user_commented_posts(*user_id).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Delete a post (author only)
pub async fn delete_post(
    pool: web::Data<PgPool>,
    assets: web::Data<Arc<AssetStore>>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), assets.get_ref().clone());
    service.delete_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "post deleted"
    })))
}
