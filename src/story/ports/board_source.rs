//! Source port for complete board snapshots.

use crate::story::domain::{BoardId, BoardSnapshot};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board source operations.
pub type BoardSourceResult<T> = Result<T, BoardSourceError>;

/// Delivers one complete snapshot of a board per call.
///
/// Implementations guarantee referential integrity: every list a card points
/// at is present in the same snapshot.
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetches the cards, lists, and members of a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSourceError::NotFound`] when the board is unknown or
    /// [`BoardSourceError::Transport`] when the fetch itself fails.
    async fn fetch_snapshot(&self, board: &BoardId) -> BoardSourceResult<BoardSnapshot>;
}

/// Errors returned by board source implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardSourceError {
    /// The board does not exist or is not visible.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
