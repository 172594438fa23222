/// Naive search - case-insensitive substring match across users and posts,
/// returned as a two-bucket result
use crate::db::{post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{PostView, SearchResults, UserView};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

pub struct SearchService {
    pool: PgPool,
}

impl SearchService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search users (first/last name, location, occupation) and posts
    /// (description plus snapshot author fields). An empty query is an error;
    /// no matches is a success with empty buckets.
    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::BadRequest("search query is required".to_string()));
        }

        let pattern = like_pattern(query);

        let users = user_repo::search_users(&self.pool, &pattern).await?;
        let posts = post_repo::search_posts(&self.pool, &pattern).await?;

        // One batch query per bucket to assemble the wire shapes.
        let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();
        let friend_rows = user_repo::friend_ids_for_users(&self.pool, &user_ids).await?;
        let mut friends_by_user: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (user_id, friend_id) in friend_rows {
            friends_by_user.entry(user_id).or_default().push(friend_id);
        }

        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let like_rows = post_repo::like_user_ids_for_posts(&self.pool, &post_ids).await?;
        let mut likes_by_post: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (post_id, user_id) in like_rows {
            likes_by_post.entry(post_id).or_default().push(user_id);
        }

        Ok(SearchResults {
            users: users
                .into_iter()
                .map(|user| {
                    let friends = friends_by_user.remove(&user.id).unwrap_or_default();
                    UserView::from_entity(user, friends)
                })
                .collect(),
            posts: posts
                .into_iter()
                .map(|post| {
                    let likes = likes_by_post.remove(&post.id).unwrap_or_default();
                    PostView::from_entity(post, likes)
                })
                .collect(),
        })
    }
}

/// Build a `%…%` LIKE pattern, escaping the wildcard characters so the query
/// text is matched literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_query_in_wildcards() {
        assert_eq!(like_pattern("ayş"), "%ayş%");
    }

    #[test]
    fn pattern_escapes_like_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
