//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::ports::PostRepository;
use board_core::{BoardService, Pager};
use board_infra::database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use board_infra::database::{DatabaseConnection, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<BoardService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(db_config) = &config.database {
                match DatabaseConnection::init(db_config).await {
                    Ok(connection) => {
                        Arc::new(PostgresPostRepository::new(connection.conn))
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        let pager = Pager::new(config.board.page_size, config.board.page_window);
        let board = Arc::new(BoardService::new(posts, pager));

        tracing::info!("Application state initialized");

        Self { board }
    }
}
