//! Domain model for story trees.
//!
//! Card and list names are decoded by small grammars into typed values; the
//! node types describe the forest handed to renderers. Nothing here touches
//! the network.

mod config;
mod error;
mod ids;
mod member;
mod name;
mod node;
mod snapshot;
mod sprint;

pub use config::{DEFAULT_AVATAR_HOST, DEFAULT_OPEN_LABEL, StoryConfig};
pub use error::{ParseStoryKindError, ParseStoryStatusError, StoryDomainError};
pub use ids::{BoardId, CardId, ListId, MemberId, StoryId};
pub use member::Member;
pub use name::{BaseParsed, Effort, ParsedName};
pub use node::{
    CardMeta, InvalidNode, IssueNode, StoryKind, StoryNode, StoryStatus, StoryTreeNode, Summary,
};
pub use snapshot::{BoardSnapshot, RawCard, RawLabel, RawList, RawMember};
pub use sprint::Sprint;
