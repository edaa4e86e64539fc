//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TryIntoModel,
};

use board_core::domain::Post;
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, PostRepository};

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL-backed post store.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for PostgresPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        // SeaORM `save` inserts when the primary key is NotSet and
        // updates when it is Set, which is exactly the upsert contract.
        let active_model: post::ActiveModel = entity.into();
        let result = active_model.save(&self.db).await.map_err(|e| match e {
            // Update of an id that no longer exists
            sea_orm::DbErr::RecordNotUpdated => RepoError::NotFound,
            e => {
                let err_str = e.to_string();
                if err_str.contains("duplicate") || err_str.contains("unique") {
                    RepoError::Constraint("Post already exists".to_string())
                } else {
                    RepoError::Query(err_str)
                }
            }
        })?;

        let model = result
            .try_into_model()
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_page(&self, page: u64, page_size: u64) -> Result<Vec<Post>, RepoError> {
        // SeaORM pages are 0-indexed, the board contract is 1-indexed.
        let page_index = page.max(1) - 1;

        // The paginator computes page * page_size for its offset; a page
        // number that large is just past the end, not an overflow.
        if page_index.checked_mul(page_size).is_none() {
            return Ok(Vec::new());
        }

        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .paginate(&self.db, page_size)
            .fetch_page(page_index)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn search_by_title(&self, keyword: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(keyword, "Searching posts by title");

        // Case-insensitive substring match via LOWER(title) LIKE %kw%.
        let pattern = format!("%{}%", keyword.to_lowercase());
        let result = PostEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(post::Column::Title))).like(pattern))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
