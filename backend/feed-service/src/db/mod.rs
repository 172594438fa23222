/// Database access layer
///
/// Repositories are free async functions over `&PgPool` issuing runtime
/// queries; everything that must be atomic (like toggles, cascades) runs
/// inside an explicit transaction.
pub mod comment_repo;
pub mod notification_repo;
pub mod post_repo;
pub mod schema;
pub mod user_repo;

pub use schema::ensure_schema;
