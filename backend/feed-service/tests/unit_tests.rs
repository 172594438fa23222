/// Unit tests for feed-service core wire shapes
///
/// This test module covers:
/// - Entity and DTO serialization to the documented wire shapes
/// - Like-set assembly and idempotent map semantics
/// - Notification kind parsing
/// - Error response taxonomy
use chrono::Utc;
use feed_service::models::*;
use uuid::Uuid;

fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        first_name: "Ayşe".to_string(),
        last_name: "Yılmaz".to_string(),
        location: "Istanbul".to_string(),
        occupation: "Engineer".to_string(),
        picture_path: "ayse.jpg".to_string(),
        x_link: Some("https://x.com/ayse".to_string()),
        linked_in_link: None,
        created_at: Utc::now(),
    }
}

fn sample_post(author: &User) -> Post {
    Post {
        id: Uuid::new_v4(),
        user_id: author.id,
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        location: author.location.clone(),
        user_picture_path: author.picture_path.clone(),
        picture_path: Some("1700000000-cat.jpg".to_string()),
        description: "hello feed".to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn post_view_serializes_camel_case_wire_shape() {
    let author = sample_user();
    let liker = Uuid::new_v4();
    let view = PostView::from_entity(sample_post(&author), vec![liker]);

    let json = serde_json::to_value(&view).unwrap();
    let obj = json.as_object().unwrap();

    for key in [
        "id",
        "userId",
        "firstName",
        "lastName",
        "location",
        "userPicturePath",
        "picturePath",
        "description",
        "likes",
        "createdAt",
    ] {
        assert!(obj.contains_key(key), "missing wire field {key}");
    }

    // The like-set is an object keyed by user id with boolean presence flags.
    let likes = obj.get("likes").unwrap().as_object().unwrap();
    assert_eq!(likes.len(), 1);
    assert_eq!(
        likes.get(&liker.to_string()),
        Some(&serde_json::Value::Bool(true))
    );
}

#[test]
fn like_map_size_is_the_like_count() {
    let author = sample_user();
    let likers: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    let view = PostView::from_entity(sample_post(&author), likers.clone());

    assert_eq!(view.likes.len(), likers.len());

    // Duplicate like rows cannot inflate the count; the map keys are unique.
    let mut doubled = likers.clone();
    doubled.extend(likers);
    let view = PostView::from_entity(sample_post(&author), doubled);
    assert_eq!(view.likes.len(), 3);
}

#[test]
fn comment_serializes_snapshot_fields() {
    let comment = Comment {
        id: Uuid::new_v4(),
        post_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        first_name: "Mehmet".to_string(),
        last_name: "Demir".to_string(),
        user_picture_path: "mehmet.png".to_string(),
        comment: "nice post".to_string(),
        created_at: Utc::now(),
    };

    let json = serde_json::to_value(&comment).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj["firstName"], "Mehmet");
    assert_eq!(obj["userPicturePath"], "mehmet.png");
    assert_eq!(obj["comment"], "nice post");
    assert!(obj.contains_key("postId"));
}

#[test]
fn user_view_carries_friends_and_no_secrets() {
    let user = sample_user();
    let friend = Uuid::new_v4();
    let view = UserView::from_entity(user, vec![friend]);

    let json = serde_json::to_value(&view).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj["friends"], serde_json::json!([friend.to_string()]));
    assert!(obj.contains_key("xLink"));
    assert!(obj.contains_key("linkedInLink"));
    // Credentials are not part of this service's data model at all.
    assert!(!obj.contains_key("password"));
    assert!(!obj.contains_key("passwordHash"));
}

#[test]
fn notification_kind_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(NotificationKind::Like).unwrap(),
        serde_json::json!("like")
    );
    assert_eq!(
        serde_json::to_value(NotificationKind::Friend).unwrap(),
        serde_json::json!("friend")
    );

    let parsed: NotificationKind = serde_json::from_value(serde_json::json!("comment")).unwrap();
    assert_eq!(parsed, NotificationKind::Comment);
}

#[test]
fn notification_wire_shape_uses_type_field() {
    let notification = Notification {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        kind: NotificationKind::Like,
        from_user: Uuid::new_v4(),
        post_id: Some(Uuid::new_v4()),
        message: "Ayşe Yılmaz liked your post.".to_string(),
        read: false,
        created_at: Utc::now(),
    };

    let json = serde_json::to_value(&notification).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj["type"], "like");
    assert_eq!(obj["read"], false);
    assert!(obj.contains_key("fromUser"));
    assert!(obj.contains_key("postId"));
}

#[test]
fn notification_view_resolves_actor_display_fields() {
    let actor_id = Uuid::new_v4();
    let view = NotificationView {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        kind: NotificationKind::Friend,
        from_user: ActorSummary {
            id: actor_id,
            first_name: "Elif".to_string(),
            last_name: "Kaya".to_string(),
            picture_path: "elif.jpg".to_string(),
        },
        post_id: None,
        message: "Elif Kaya added you as a friend.".to_string(),
        read: false,
        created_at: Utc::now(),
    };

    let json = serde_json::to_value(&view).unwrap();
    let from_user = json["fromUser"].as_object().unwrap();

    assert_eq!(from_user["id"], actor_id.to_string());
    assert_eq!(from_user["firstName"], "Elif");
    assert_eq!(from_user["picturePath"], "elif.jpg");
}

#[test]
fn search_results_allow_empty_buckets() {
    let results = SearchResults {
        users: Vec::new(),
        posts: Vec::new(),
    };

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json, serde_json::json!({ "users": [], "posts": [] }));
}
