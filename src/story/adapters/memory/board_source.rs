//! In-memory board source for tests and offline use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::story::{
    domain::{BoardId, BoardSnapshot},
    ports::{BoardSource, BoardSourceError, BoardSourceResult},
};

/// Board source serving snapshots registered up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardSource {
    boards: Arc<RwLock<HashMap<BoardId, BoardSnapshot>>>,
}

impl InMemoryBoardSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the snapshot served for a board.
    pub async fn put(&self, board: BoardId, snapshot: BoardSnapshot) {
        self.boards.write().await.insert(board, snapshot);
    }

    /// Removes a board, returning its snapshot if it was registered.
    pub async fn remove(&self, board: &BoardId) -> Option<BoardSnapshot> {
        self.boards.write().await.remove(board)
    }
}

#[async_trait]
impl BoardSource for InMemoryBoardSource {
    async fn fetch_snapshot(&self, board: &BoardId) -> BoardSourceResult<BoardSnapshot> {
        self.boards
            .read()
            .await
            .get(board)
            .cloned()
            .ok_or_else(|| BoardSourceError::NotFound(board.clone()))
    }
}
