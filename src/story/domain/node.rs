//! Typed nodes of the story forest.

use super::{Effort, Member, ParseStoryKindError, ParseStoryStatusError, Sprint, StoryId};
use serde::{Deserialize, Serialize};

/// Kind tag of an assembled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryKind {
    /// Root of a story tree.
    Issue,
    /// Nested unit under an issue or another story.
    Story,
    /// Card whose name does not follow the grammar.
    Invalid,
}

impl StoryKind {
    /// Returns the canonical tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Story => "story",
            Self::Invalid => "invalid",
        }
    }
}

impl TryFrom<&str> for StoryKind {
    type Error = ParseStoryKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "issue" => Ok(Self::Issue),
            "story" => Ok(Self::Story),
            "invalid" => Ok(Self::Invalid),
            _ => Err(ParseStoryKindError(value.to_owned())),
        }
    }
}

/// Whether an issue is still being worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    /// The card carries the open label.
    Open,
    /// Any other card.
    Closed,
}

impl StoryStatus {
    /// Derives the status from a card's labels.
    #[must_use]
    pub fn from_labels(labels: &[String], open_label: &str) -> Self {
        if labels.iter().any(|label| label == open_label) {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Returns the canonical tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for StoryStatus {
    type Error = ParseStoryStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" | "close" => Ok(Self::Closed),
            _ => Err(ParseStoryStatusError(value.to_owned())),
        }
    }
}

/// Card metadata kept on assembled nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardMeta {
    /// Label names in provider order.
    pub labels: Vec<String>,
    /// Short link to the card.
    pub url: String,
    /// Name of the list holding the card.
    pub list_name: String,
    /// Board position used to order siblings.
    pub position: f64,
}

/// Per-issue progress counters.
///
/// Always zero when assembled; filling them in is left to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Stories in the current sprint.
    pub current: u32,
    /// Stories in past sprints.
    pub past: u32,
    /// Open stories.
    pub open: u32,
    /// Closed stories.
    pub close: u32,
    /// Stories waiting on a dependency.
    pub wait: u32,
}

/// A story attached under an issue or another story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryNode {
    /// Story identifier.
    pub id: StoryId,
    /// Cleaned title.
    pub title: String,
    /// Dependencies in order of appearance.
    pub dependency_ids: Vec<StoryId>,
    /// Parent issue or story.
    pub parent_id: StoryId,
    /// Effort numbers.
    pub effort: Effort,
    /// Source card metadata.
    pub card: CardMeta,
    /// Child stories in board order.
    pub children: Vec<StoryNode>,
}

impl StoryNode {
    /// Counts every story below this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Root of one story tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueNode {
    /// Issue identifier.
    pub id: StoryId,
    /// Cleaned title.
    pub title: String,
    /// Dependencies in order of appearance.
    pub dependency_ids: Vec<StoryId>,
    /// Whether the issue is open.
    pub status: StoryStatus,
    /// Members assigned to the card, unknown ids dropped.
    pub members: Vec<Member>,
    /// Source card metadata.
    pub card: CardMeta,
    /// Sprint derived from the card's list, if the list is a sprint.
    pub sprint: Option<Sprint>,
    /// Progress counters.
    pub summary: Summary,
    /// Child stories in board order.
    pub children: Vec<StoryNode>,
}

impl IssueNode {
    /// Counts every story in this issue's tree.
    #[must_use]
    pub fn story_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// A card whose name does not follow the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidNode {
    /// The raw card name.
    pub title: String,
}

/// Any assembled node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoryTreeNode {
    /// Issue node.
    Issue(IssueNode),
    /// Story node.
    Story(StoryNode),
    /// Invalid node.
    Invalid(InvalidNode),
}

impl StoryTreeNode {
    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> StoryKind {
        match self {
            Self::Issue(_) => StoryKind::Issue,
            Self::Story(_) => StoryKind::Story,
            Self::Invalid(_) => StoryKind::Invalid,
        }
    }

    /// Returns the board position, which invalid nodes do not carry.
    #[must_use]
    pub const fn position(&self) -> Option<f64> {
        match self {
            Self::Issue(issue) => Some(issue.card.position),
            Self::Story(story) => Some(story.card.position),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the node title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Issue(issue) => &issue.title,
            Self::Story(story) => &story.title,
            Self::Invalid(invalid) => &invalid.title,
        }
    }
}
