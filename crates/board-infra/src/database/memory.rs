//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::domain::Post;
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, PostRepository};

/// In-memory post store using a BTreeMap with async RwLock.
///
/// Backs the server when `DATABASE_URL` is unset and doubles as a test
/// fixture. Data is lost on process restart.
pub struct InMemoryPostRepository {
    rows: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of all posts, newest first.
    async fn all_newest_first(&self) -> Vec<Post> {
        let rows = self.rows.read().await;
        let mut posts: Vec<Post> = rows.values().cloned().collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.cmp(&a.id))
        });
        posts
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        match entity.id {
            Some(id) => {
                let existing = rows.get(&id).ok_or(RepoError::NotFound)?;
                entity.created_at = existing.created_at;
                rows.insert(id, entity.clone());
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                entity.id = Some(id);
                rows.insert(id, entity.clone());
            }
        }
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        if rows.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_page(&self, page: u64, page_size: u64) -> Result<Vec<Post>, RepoError> {
        // A page number so large the offset overflows is just past the end
        let offset = (page.max(1) - 1)
            .checked_mul(page_size)
            .and_then(|n| usize::try_from(n).ok());
        let Some(offset) = offset else {
            return Ok(Vec::new());
        };
        Ok(self
            .all_newest_first()
            .await
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.rows.read().await.len() as u64)
    }

    async fn search_by_title(&self, keyword: &str) -> Result<Vec<Post>, RepoError> {
        let needle = keyword.to_lowercase();
        Ok(self
            .all_newest_first()
            .await
            .into_iter()
            .filter(|post| post.title.to_lowercase().contains(&needle))
            .collect())
    }
}
