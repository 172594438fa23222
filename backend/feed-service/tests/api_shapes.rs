/// Contract tests for the HTTP boundary
///
/// This test module covers:
/// - Request payload compatibility with the web client
/// - Request validation rules
/// - Error response format (distinct from every success payload)
use actix_web::body::to_bytes;
use actix_web::error::ResponseError;
use feed_service::error::AppError;
use feed_service::handlers::comments::CreateCommentRequest;
use feed_service::handlers::notifications::CreateNotificationRequest;
use feed_service::handlers::posts::CreatePostRequest;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

#[test]
fn create_post_payload_deserializes_client_shape() {
    let payload = json!({
        "description": "weekend trip",
        "picturePath": "1700000000-trip.jpg"
    });

    let req: CreatePostRequest = serde_json::from_value(payload).unwrap();
    assert_eq!(req.description, "weekend trip");
    assert_eq!(req.picture_path.as_deref(), Some("1700000000-trip.jpg"));

    // Text-only posts omit the media token.
    let req: CreatePostRequest =
        serde_json::from_value(json!({ "description": "no media" })).unwrap();
    assert!(req.picture_path.is_none());
    assert!(req.validate().is_ok());
}

#[test]
fn create_comment_payload_is_validated() {
    let post_id = Uuid::new_v4();

    let req: CreateCommentRequest = serde_json::from_value(json!({
        "postId": post_id.to_string(),
        "comment": "great shot!"
    }))
    .unwrap();
    assert_eq!(req.post_id, post_id);
    assert!(req.validate().is_ok());

    let empty: CreateCommentRequest = serde_json::from_value(json!({
        "postId": post_id.to_string(),
        "comment": ""
    }))
    .unwrap();
    assert!(empty.validate().is_err());

    let oversized: CreateCommentRequest = serde_json::from_value(json!({
        "postId": post_id.to_string(),
        "comment": "x".repeat(501)
    }))
    .unwrap();
    assert!(oversized.validate().is_err());
}

#[test]
fn create_notification_payload_uses_type_field() {
    let recipient = Uuid::new_v4();
    let post_id = Uuid::new_v4();

    let req: CreateNotificationRequest = serde_json::from_value(json!({
        "userId": recipient.to_string(),
        "type": "comment",
        "postId": post_id.to_string(),
        "message": "Mehmet Demir commented on your post."
    }))
    .unwrap();

    assert_eq!(req.user_id, recipient);
    assert_eq!(req.kind, "comment");
    assert_eq!(req.post_id, Some(post_id));
    assert!(req.validate().is_ok());

    let blank_message: CreateNotificationRequest = serde_json::from_value(json!({
        "userId": recipient.to_string(),
        "type": "like",
        "message": ""
    }))
    .unwrap();
    assert!(blank_message.validate().is_err());
}

#[actix_web::test]
async fn error_body_is_distinct_from_success_payloads() {
    let err = AppError::NotFound("post not found".to_string());
    let response = err.error_response();
    assert_eq!(response.status().as_u16(), 404);

    let bytes = to_bytes(response.into_body()).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status"], 404);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("post not found"));
}

#[actix_web::test]
async fn ownership_violations_map_to_forbidden() {
    let err = AppError::Forbidden("you are not allowed to delete this post".to_string());
    let response = err.error_response();
    assert_eq!(response.status().as_u16(), 403);

    let bytes = to_bytes(response.into_body()).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 403);
}

#[actix_web::test]
async fn empty_search_query_maps_to_bad_request() {
    let err = AppError::BadRequest("search query is required".to_string());
    let response = err.error_response();
    assert_eq!(response.status().as_u16(), 400);
}
