/// User handlers - profile lookup and the friend edge toggle
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::models::UserView;
use crate::services::SocialGraphService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch a user profile with its friend-id list
pub async fn get_user(pool: web::Data<PgPool>, user_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let user = user_repo::find_user_by_id(&pool, *user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {user_id} not found")))?;

    let friends = user_repo::friend_ids(&pool, *user_id).await?;

    Ok(HttpResponse::Ok().json(UserView::from_entity(user, friends)))
}

/// Friend list projection for a user
pub async fn get_user_friends(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = SocialGraphService::new((**pool).clone());
    let friends = service.get_friends(*user_id).await?;

    Ok(HttpResponse::Ok().json(friends))
}

/// Toggle the friend edge between the path user and the target user.
/// The acting user may only toggle their own edges.
pub async fn toggle_friend(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
    acting_user: UserId,
) -> Result<HttpResponse> {
    let (user_id, friend_id) = path.into_inner();

    if acting_user.0 != user_id {
        return Err(AppError::Forbidden(
            "you may only change your own friend list".to_string(),
        ));
    }

    let service = SocialGraphService::new((**pool).clone());
    let friends = service.toggle_friend(user_id, friend_id).await?;

    Ok(HttpResponse::Ok().json(friends))
}
