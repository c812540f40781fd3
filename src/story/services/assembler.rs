//! Card-to-node assembly.

use crate::story::domain::{
    BoardSnapshot, CardMeta, InvalidNode, IssueNode, Member, ParsedName, RawCard, Sprint,
    StoryConfig, StoryDomainError, StoryNode, StoryStatus, StoryTreeNode, Summary,
};
use tracing::{debug, warn};

/// Turns raw cards into typed forest nodes.
///
/// # Examples
///
/// ```
/// use storyline::story::domain::{BoardSnapshot, StoryKind};
/// use storyline::story::services::StoryAssembler;
///
/// let snapshot = BoardSnapshot::from_json(
///     r#"{
///         "cards": [{"id": "c1", "name": "42: Fix bug", "idList": "l1", "pos": 1}],
///         "lists": [{"id": "l1", "name": "Backlog"}]
///     }"#,
/// ).expect("valid snapshot");
///
/// let nodes = StoryAssembler::new().assemble_all(&snapshot).expect("lists resolve");
/// assert_eq!(nodes.first().map(|node| node.kind()), Some(StoryKind::Issue));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StoryAssembler {
    config: StoryConfig,
}

impl StoryAssembler {
    /// Creates an assembler with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assembler with custom configuration.
    #[must_use]
    pub const fn with_config(config: StoryConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Assembles one card.
    ///
    /// Invalid names short-circuit before any lookup, so an invalid card never
    /// fails on a missing list.
    ///
    /// # Errors
    ///
    /// Returns [`StoryDomainError::UnknownList`] when the card's list is not
    /// part of the snapshot.
    pub fn assemble(
        &self,
        card: &RawCard,
        snapshot: &BoardSnapshot,
    ) -> Result<StoryTreeNode, StoryDomainError> {
        let (base, parent) = match ParsedName::parse(&card.name) {
            ParsedName::Invalid { title } => {
                debug!(card = %card.id, name = %title, "card name does not follow the grammar");
                return Ok(StoryTreeNode::Invalid(InvalidNode { title }));
            }
            ParsedName::Issue(base) => (base, None),
            ParsedName::Story {
                base,
                parent_id,
                effort,
            } => (base, Some((parent_id, effort))),
        };

        let Some(list) = snapshot.list(&card.id_list) else {
            warn!(card = %card.id, list = %card.id_list, "card references unknown list");
            return Err(StoryDomainError::UnknownList {
                card: card.id.clone(),
                list: card.id_list.clone(),
            });
        };

        let labels: Vec<String> = card.labels.iter().map(|label| label.name.clone()).collect();
        let status = StoryStatus::from_labels(&labels, &self.config.open_label);
        let meta = CardMeta {
            labels,
            url: card.short_url.clone(),
            list_name: list.name.clone(),
            position: card.pos,
        };

        if let Some((parent_id, effort)) = parent {
            return Ok(StoryTreeNode::Story(StoryNode {
                id: base.id,
                title: base.title,
                dependency_ids: base.dependency_ids,
                parent_id,
                effort,
                card: meta,
                children: Vec::new(),
            }));
        }

        Ok(StoryTreeNode::Issue(IssueNode {
            id: base.id,
            title: base.title,
            dependency_ids: base.dependency_ids,
            status,
            members: self.resolve_members(card, snapshot),
            card: meta,
            sprint: Sprint::parse(&list.name),
            summary: Summary::default(),
            children: Vec::new(),
        }))
    }

    /// Assembles every card of a snapshot in provider order.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoryDomainError`] raised by [`Self::assemble`].
    pub fn assemble_all(
        &self,
        snapshot: &BoardSnapshot,
    ) -> Result<Vec<StoryTreeNode>, StoryDomainError> {
        snapshot
            .cards
            .iter()
            .map(|card| self.assemble(card, snapshot))
            .collect()
    }

    fn resolve_members(&self, card: &RawCard, snapshot: &BoardSnapshot) -> Vec<Member> {
        card.id_members
            .iter()
            .filter_map(|member_id| {
                let Some(member) = snapshot.member(member_id) else {
                    debug!(card = %card.id, member = member_id.as_str(), "dropping unknown member");
                    return None;
                };
                let avatar_url = member
                    .avatar_hash
                    .as_deref()
                    .filter(|hash| !hash.is_empty())
                    .map(|hash| self.config.avatar_url(hash));
                Some(Member::new(member.username.clone(), avatar_url))
            })
            .collect()
    }
}
