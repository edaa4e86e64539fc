use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deleting an absent ID is
    /// `RepoError::NotFound`, not a silent no-op.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the persistence abstraction behind the board.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Fetch one page of posts, 1-indexed, newest first (`created_at`
    /// descending). A page past the end yields an empty vec, not an error.
    async fn find_page(&self, page: u64, page_size: u64) -> Result<Vec<Post>, RepoError>;

    /// Total number of posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Case-insensitive substring match on title, newest first.
    async fn search_by_title(&self, keyword: &str) -> Result<Vec<Post>, RepoError>;
}
