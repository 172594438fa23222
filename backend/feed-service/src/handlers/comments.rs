/// Comment handlers - HTTP endpoints for the comment engine
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: Uuid,
    #[validate(length(min = 1, max = 500))]
    pub comment: String,
}

/// Add a comment; responds with the post's full comment list, newest-first
pub async fn create_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let service = CommentService::new((**pool).clone());
    let comments = service
        .add_comment(user_id.0, req.post_id, &req.comment)
        .await?;

    Ok(HttpResponse::Created().json(comments))
}

/// Comments for a post, newest-first
pub async fn get_post_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.get_post_comments(*post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Delete a comment (its author only); responds with the remaining comments
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.delete_comment(*comment_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(comments))
}
