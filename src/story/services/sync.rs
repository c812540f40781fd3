//! Service layer for fetching a board and building its story forest.

use crate::story::{
    domain::{BoardId, StoryConfig, StoryDomainError},
    ports::{BoardSource, BoardSourceError},
    services::{StoryAssembler, StoryForest, build_forest},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for story synchronisation.
#[derive(Debug, Error)]
pub enum StorySyncError {
    /// Snapshot assembly failed.
    #[error(transparent)]
    Domain(#[from] StoryDomainError),
    /// Board source failed.
    #[error(transparent)]
    Source(#[from] BoardSourceError),
}

/// Result type for story synchronisation.
pub type StorySyncResult<T> = Result<T, StorySyncError>;

/// Outcome of one synchronisation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StorySync {
    board: BoardId,
    forest: StoryForest,
    fetched_at: DateTime<Utc>,
}

impl StorySync {
    /// Returns the synchronised board.
    #[must_use]
    pub const fn board(&self) -> &BoardId {
        &self.board
    }

    /// Returns the built forest.
    #[must_use]
    pub const fn forest(&self) -> &StoryForest {
        &self.forest
    }

    /// Consumes the outcome, returning the forest.
    #[must_use]
    pub fn into_forest(self) -> StoryForest {
        self.forest
    }

    /// Returns when the snapshot was fetched.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Fetches board snapshots and rebuilds the story forest from scratch.
#[derive(Clone)]
pub struct StorySyncService<S, C>
where
    S: BoardSource,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    clock: Arc<C>,
    assembler: StoryAssembler,
}

impl<S, C> StorySyncService<S, C>
where
    S: BoardSource,
    C: Clock + Send + Sync,
{
    /// Creates a service with default configuration.
    #[must_use]
    pub fn new(source: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(source, clock, StoryConfig::default())
    }

    /// Creates a service with custom configuration.
    #[must_use]
    pub const fn with_config(source: Arc<S>, clock: Arc<C>, config: StoryConfig) -> Self {
        Self {
            source,
            clock,
            assembler: StoryAssembler::with_config(config),
        }
    }

    /// Fetches a board and builds its forest.
    ///
    /// The forest is rebuilt from the complete snapshot on every call; no
    /// state is kept between calls.
    ///
    /// # Errors
    ///
    /// Returns [`StorySyncError::Source`] when the fetch fails or
    /// [`StorySyncError::Domain`] when a card references a missing list. No
    /// partial forest is returned.
    pub async fn sync(&self, board: &BoardId) -> StorySyncResult<StorySync> {
        let snapshot = self.source.fetch_snapshot(board).await?;
        let fetched_at = self.clock.utc();
        let forest = build_forest(self.assembler.assemble_all(&snapshot)?);
        info!(
            board = %board,
            issues = forest.issues.len(),
            invalids = forest.invalids.len(),
            "story forest rebuilt"
        );
        Ok(StorySync {
            board: board.clone(),
            forest,
            fetched_at,
        })
    }
}
