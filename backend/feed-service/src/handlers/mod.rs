/// HTTP handlers for the feed service
///
/// Thin glue only: each handler maps the gateway identity and a JSON payload
/// onto a service call. Ownership checks live in the services.
pub mod comments;
pub mod notifications;
pub mod posts;
pub mod search;
pub mod users;

// Re-export handler functions at module level
pub use comments::{create_comment, delete_comment, get_post_comments};
pub use notifications::{
    create_notification, get_unread_count, get_user_notifications, mark_all_read,
};
pub use posts::{
    create_post, delete_post, get_feed, get_user_commented_posts, get_user_liked_posts,
    get_user_posts, like_post,
};
pub use search::search;
pub use users::{get_user, get_user_friends, toggle_friend};
