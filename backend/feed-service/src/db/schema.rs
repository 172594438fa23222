use sqlx::PgPool;
use tracing::info;

use crate::error::Result;

/// Ensure the feed tables exist.
///
/// Tables are created lazily at service startup to unblock environments where
/// migrations have not been applied yet (fresh developer machines, CI spins).
/// Every statement is idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    info!("Ensuring feed tables exist");

    for statement in [
        USERS_TABLE,
        FRIENDSHIPS_TABLE,
        POSTS_TABLE,
        POST_LIKES_TABLE,
        COMMENTS_TABLE,
        NOTIFICATIONS_TABLE,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

const USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    location TEXT NOT NULL DEFAULT '',
    occupation TEXT NOT NULL DEFAULT '',
    picture_path TEXT NOT NULL DEFAULT '',
    x_link TEXT,
    linked_in_link TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

// Friend edges are stored redundantly in both directions; the pair of rows
// is always written or removed inside one transaction.
const FRIENDSHIPS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS friendships (
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    friend_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (user_id, friend_id),
    CHECK (user_id <> friend_id)
)
"#;

const POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id),
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    location TEXT NOT NULL DEFAULT '',
    user_picture_path TEXT NOT NULL DEFAULT '',
    picture_path TEXT,
    description TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

// One row per (post, user): the like-set with per-key atomic mutation.
const POST_LIKES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS post_likes (
    post_id UUID NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    user_id UUID NOT NULL REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (post_id, user_id)
)
"#;

const COMMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    post_id UUID NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    user_id UUID NOT NULL REFERENCES users(id),
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    user_picture_path TEXT NOT NULL DEFAULT '',
    comment TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const NOTIFICATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notifications (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id),
    kind TEXT NOT NULL CHECK (kind IN ('like', 'comment', 'friend')),
    from_user UUID NOT NULL REFERENCES users(id),
    post_id UUID,
    message TEXT NOT NULL,
    read BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;
