//! Shared world state for story tree BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use storyline::story::{
    adapters::memory::InMemoryBoardSource,
    domain::{
        BoardId, BoardSnapshot, CardId, ListId, MemberId, RawCard, RawList, RawMember, StoryId,
        StoryNode,
    },
    services::{StorySync, StorySyncError, StorySyncService},
};

/// Service type used by the BDD world.
pub type TestSyncService = StorySyncService<InMemoryBoardSource, DefaultClock>;

/// List every card lands in unless a step names another one.
pub const BACKLOG_LIST: &str = "list-backlog";

/// Scenario world for story tree behaviour tests.
pub struct StoryWorld {
    pub source: InMemoryBoardSource,
    pub service: TestSyncService,
    pub board: BoardId,
    pub snapshot: BoardSnapshot,
    pub last_sync_result: Option<Result<StorySync, StorySyncError>>,
}

impl StoryWorld {
    /// Creates a world with an empty backlog board.
    #[must_use]
    pub fn new() -> Self {
        let source = InMemoryBoardSource::new();
        let service = StorySyncService::new(Arc::new(source.clone()), Arc::new(DefaultClock));
        let snapshot = BoardSnapshot {
            cards: Vec::new(),
            lists: vec![RawList {
                id: ListId::new(BACKLOG_LIST),
                name: "Backlog".to_owned(),
            }],
            members: vec![RawMember {
                id: MemberId::new("m-alice"),
                username: "alice".to_owned(),
                avatar_hash: Some("a1".to_owned()),
            }],
        };
        Self {
            source,
            service,
            board: BoardId::new("bddBoard").unwrap_or_else(|err| panic!("board id: {err}")),
            snapshot,
            last_sync_result: None,
        }
    }

    /// Adds a card to the pending snapshot.
    pub fn add_card(&mut self, name: &str, pos: f64, list: &str, members: Vec<MemberId>) {
        let id = format!("card-{}", self.snapshot.cards.len());
        self.snapshot.cards.push(RawCard {
            id: CardId::new(id.clone()),
            name: name.to_owned(),
            labels: Vec::new(),
            id_members: members,
            id_list: ListId::new(list),
            short_url: format!("https://trello.com/c/{id}"),
            pos,
        });
    }

    /// Returns the last successful synchronisation outcome.
    pub fn synced(&self) -> Result<&StorySync, eyre::Report> {
        let result = self
            .last_sync_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing sync result in scenario world"))?;
        result
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected sync failure: {err}"))
    }
}

impl Default for StoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StoryWorld {
    StoryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Finds a story anywhere below the given stories.
pub fn find_story(stories: &[StoryNode], id: StoryId) -> Option<&StoryNode> {
    stories.iter().find_map(|story| {
        if story.id == id {
            Some(story)
        } else {
            find_story(&story.children, id)
        }
    })
}

/// Splits a comma-separated step argument.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
