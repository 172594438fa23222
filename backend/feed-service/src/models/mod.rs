/// Data models for the feed service
///
/// This module defines structures for:
/// - User: profile with display fields and social links
/// - Post: feed entries with author snapshot fields and a like-set
/// - Comment: per-post comments with author snapshot fields
/// - Notification: fan-out records for like/comment/friend events
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// User entity
///
/// Credentials are not stored by this service; authentication lives at the
/// gateway, so no projection of this struct can leak a secret.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub occupation: String,
    pub picture_path: String,
    pub x_link: Option<String>,
    pub linked_in_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User response DTO carrying the assembled friend-id list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub occupation: String,
    pub picture_path: String,
    pub x_link: Option<String>,
    pub linked_in_link: Option<String>,
    pub friends: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl UserView {
    pub fn from_entity(user: User, friends: Vec<Uuid>) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            location: user.location,
            occupation: user.occupation,
            picture_path: user.picture_path,
            x_link: user.x_link,
            linked_in_link: user.linked_in_link,
            friends,
            created_at: user.created_at,
        }
    }
}

/// Lightweight friend projection for friend lists
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FriendSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
    pub picture_path: String,
}

/// Post entity
///
/// The author display fields are snapshots taken at creation time and are
/// intentionally never refreshed when the profile changes later.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub user_picture_path: String,
    pub picture_path: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Post response DTO with the like-set assembled as a presence map
///
/// The map doubles as the like counter: its size is the like count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub user_picture_path: String,
    pub picture_path: Option<String>,
    pub description: String,
    pub likes: HashMap<Uuid, bool>,
    pub created_at: DateTime<Utc>,
}

impl PostView {
    /// Assemble the wire shape from a post row and its like rows
    pub fn from_entity(post: Post, like_user_ids: Vec<Uuid>) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            first_name: post.first_name,
            last_name: post.last_name,
            location: post.location,
            user_picture_path: post.user_picture_path,
            picture_path: post.picture_path,
            description: post.description,
            likes: like_user_ids.into_iter().map(|id| (id, true)).collect(),
            created_at: post.created_at,
        }
    }
}

/// Comment entity with author snapshot fields
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_picture_path: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Notification kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Someone liked the recipient's post
    Like,
    /// Someone commented on the recipient's post
    Comment,
    /// Someone added the recipient as a friend
    Friend,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Like => "like",
            NotificationKind::Comment => "comment",
            NotificationKind::Friend => "friend",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "comment" => Some(Self::Comment),
            "friend" => Some(Self::Friend),
            _ => None,
        }
    }
}

/// Notification record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    /// Recipient user id
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Acting user id
    pub from_user: Uuid,
    /// Related post, if the event concerned one
    pub post_id: Option<Uuid>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification list entry with the actor's display fields resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub from_user: ActorSummary,
    pub post_id: Option<Uuid>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Actor display fields joined into a notification view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub picture_path: String,
}

/// Two-bucket search result; both buckets may be empty on success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub users: Vec<UserView>,
    pub posts: Vec<PostView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_view_builds_like_map_from_rows() {
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let post = Post {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            location: "Istanbul".to_string(),
            user_picture_path: "p1.jpg".to_string(),
            picture_path: None,
            description: "first post".to_string(),
            created_at: Utc::now(),
        };

        let view = PostView::from_entity(post, vec![u1, u2]);

        assert_eq!(view.likes.len(), 2);
        assert_eq!(view.likes.get(&u1), Some(&true));
        assert_eq!(view.likes.get(&u2), Some(&true));
    }

    #[test]
    fn notification_kind_round_trips() {
        for kind in [
            NotificationKind::Like,
            NotificationKind::Comment,
            NotificationKind::Friend,
        ] {
            assert_eq!(NotificationKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(NotificationKind::parse("mention"), None);
    }

    #[test]
    fn snapshot_fields_are_frozen_in_the_view() {
        // The DTO copies the snapshot columns, not the live profile.
        let post = Post {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            first_name: "Old".to_string(),
            last_name: "Name".to_string(),
            location: "Ankara".to_string(),
            user_picture_path: "old.jpg".to_string(),
            picture_path: Some("media.mp4".to_string()),
            description: "snapshot".to_string(),
            created_at: Utc::now(),
        };

        let view = PostView::from_entity(post.clone(), Vec::new());
        assert_eq!(view.first_name, post.first_name);
        assert_eq!(view.user_picture_path, post.user_picture_path);
        assert!(view.likes.is_empty());
    }
}
