//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::ports::BoardRepository;
use board_core::service::BoardService;
use board_infra::database::{DatabaseConfig, InMemoryBoardRepository};

#[cfg(feature = "postgres")]
use board_infra::database::PostgresBoardRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub boards: BoardService,
}

impl AppState {
    /// Build the application state with the appropriate store implementation.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let repo: Arc<dyn BoardRepository> = match db_config {
            Some(config) => match board_infra::database::connect(config).await {
                Ok(conn) => Arc::new(PostgresBoardRepository::new(conn)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryBoardRepository::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryBoardRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repo: Arc<dyn BoardRepository> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryBoardRepository::new())
        };

        tracing::info!("Application state initialized");

        Self {
            boards: BoardService::new(repo),
        }
    }
}
