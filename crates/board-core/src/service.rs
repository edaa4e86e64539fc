//! Board service - orchestrates the post store and the pagination planner.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{PageView, Post};
use crate::error::{DomainError, RepoError};
use crate::pagination::Pager;
use crate::ports::PostRepository;

/// Orchestration layer behind the board endpoints.
///
/// Page and window sizes are injected through [`Pager`] so tests can
/// exercise arbitrary configurations.
pub struct BoardService {
    posts: Arc<dyn PostRepository>,
    pager: Pager,
}

impl BoardService {
    pub fn new(posts: Arc<dyn PostRepository>, pager: Pager) -> Self {
        Self { posts, pager }
    }

    /// Fetch page `page` of the board plus its navigation strip.
    ///
    /// Items are fetched for the page that was actually requested; only the
    /// navigation window is anchored back into range. A page past the end
    /// therefore returns empty `items` with non-empty `page_links` whenever
    /// the board has posts, and callers decide how to render that.
    pub async fn get_page(&self, page: u64) -> Result<PageView, DomainError> {
        let fetch_page = page.max(1);

        let items = self
            .posts
            .find_page(fetch_page, self.pager.page_size())
            .await?;
        let total = self.posts.count().await?;
        let page_links = self.pager.window(fetch_page, total);

        tracing::debug!(page = fetch_page, total, "Fetched board page");

        Ok(PageView { items, page_links })
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id,
            })
    }

    /// Create or overwrite a post. The store assigns the id on first save;
    /// `modified_at` is stamped here, `created_at` is preserved by the store
    /// on update.
    pub async fn save(&self, mut post: Post) -> Result<Post, DomainError> {
        if post.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if post.writer.trim().is_empty() {
            return Err(DomainError::Validation("writer must not be empty".into()));
        }

        post.modified_at = Utc::now();
        let id = post.id;
        let saved = self.posts.save(post).await.map_err(|err| match err {
            // Update of an id that vanished between fetch and save
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "post",
                id: id.unwrap_or_default(),
            },
            other => DomainError::Internal(other.to_string()),
        })?;

        tracing::info!(id = saved.id, "Saved post");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.posts.delete(id).await.map_err(|err| match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "post",
                id,
            },
            other => DomainError::Internal(other.to_string()),
        })
    }

    /// Substring search on titles. No matches is an empty vec, never an error.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Post>, DomainError> {
        if keyword.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.posts.search_by_title(keyword).await?)
    }
}
