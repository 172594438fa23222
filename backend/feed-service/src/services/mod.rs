/// Business logic layer for the feed service
///
/// - Post service: feed engine (posts, like-set, profile tab listings)
/// - Comment service: per-post comments with full-list return contract
/// - Social graph: symmetric friend edges
/// - Notifications: fan-out records and read-state tracking
/// - Search: naive two-bucket substring search
pub mod comments;
pub mod notifications;
pub mod posts;
pub mod search;
pub mod social_graph;

// Re-export commonly used services
pub use comments::CommentService;
pub use notifications::NotificationService;
pub use posts::PostService;
pub use search::SearchService;
pub use social_graph::SocialGraphService;
