/// Notification handlers - fan-out inserts and read-state endpoints
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::models::NotificationKind;
use crate::services::NotificationService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// Recipient user id
    pub user_id: Uuid,
    /// One of `like`, `comment`, `friend`
    #[serde(rename = "type")]
    pub kind: String,
    pub post_id: Option<Uuid>,
    #[validate(length(min = 1, max = 500))]
    pub message: String,
}

/// Insert a notification; the acting user is the event's actor
pub async fn create_notification(
    pool: web::Data<PgPool>,
    actor: UserId,
    req: web::Json<CreateNotificationRequest>,
) -> Result<HttpResponse> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let kind = NotificationKind::parse(&req.kind)
        .ok_or_else(|| AppError::BadRequest(format!("unknown notification type: {}", req.kind)))?;

    let service = NotificationService::new((**pool).clone());
    let notification = service
        .notify(req.user_id, kind, actor.0, req.post_id, &req.message)
        .await?;

    Ok(HttpResponse::Created().json(notification))
}

/// Most recent notifications for a user, newest-first, capped at 50
pub async fn get_user_notifications(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    let notifications = service.list_for_user(*user_id).await?;

    Ok(HttpResponse::Ok().json(notifications))
}

/// Count of unread notifications
pub async fn get_unread_count(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    let count = service.unread_count(*user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "count": count })))
}

/// Mark all of a user's notifications as read
pub async fn mark_all_read(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = NotificationService::new((**pool).clone());
    service.mark_all_read(*user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "notifications marked as read"
    })))
}
