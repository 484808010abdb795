use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::program::Author;

/// Single message in a program's discussion board. Never mutated locally
/// after creation; a reload replaces the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: i64,
    #[serde(default)]
    pub author: Author,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_pinned: bool,
}

/// Feed ordering rule: pinned posts before all others, then ascending
/// `created_at` within each partition (chat-like append order). The sort
/// is stable, so equal keys keep their server order.
pub fn sort_posts(posts: &mut [FeedPost]) {
    posts.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then(a.created_at.cmp(&b.created_at))
    });
}
