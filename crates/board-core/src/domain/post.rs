use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single board entry.
///
/// `id` is `None` until the store assigns one on first save and is
/// immutable afterwards. `modified_at` is refreshed on every save, so
/// `created_at <= modified_at` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, not-yet-persisted post.
    pub fn new(title: String, content: String, writer: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title,
            content,
            writer,
            created_at: now,
            modified_at: now,
        }
    }
}

/// One page of the board list plus the navigation strip around it.
///
/// Derived per request, never persisted or cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    pub items: Vec<Post>,
    pub page_links: Vec<u64>,
}
