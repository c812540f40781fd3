//! Error types for story domain parsing and assembly.

use super::{CardId, ListId};
use thiserror::Error;

/// Errors returned while constructing story domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoryDomainError {
    /// The board URL does not point at a board.
    #[error("invalid board url: {0}")]
    InvalidBoardUrl(String),

    /// A card references a list missing from the snapshot.
    #[error("card {card} references unknown list {list}")]
    UnknownList {
        /// Card carrying the dangling reference.
        card: CardId,
        /// List identifier that could not be resolved.
        list: ListId,
    },

    /// A raw board payload could not be decoded.
    #[error("invalid board snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Error returned while parsing story statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown story status: {0}")]
pub struct ParseStoryStatusError(pub String);

/// Error returned while parsing story kinds from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown story kind: {0}")]
pub struct ParseStoryKindError(pub String);
