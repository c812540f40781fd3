//! Forest construction from assembled nodes.

use crate::story::domain::{InvalidNode, IssueNode, StoryId, StoryNode, StoryTreeNode};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Issues with their story trees, plus the cards that failed to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryForest {
    /// Issues in board order, each carrying its story tree.
    pub issues: Vec<IssueNode>,
    /// Invalid cards in encounter order.
    pub invalids: Vec<InvalidNode>,
}

impl StoryForest {
    /// Returns the first issue in board order.
    #[must_use]
    pub fn first_issue(&self) -> Option<&IssueNode> {
        self.issues.first()
    }

    /// Finds an issue by identifier.
    #[must_use]
    pub fn issue(&self, id: StoryId) -> Option<&IssueNode> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    /// Returns `true` when the forest holds neither issues nor invalid cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.invalids.is_empty()
    }

    /// Flattens the forest back into childless nodes.
    ///
    /// Issues and their stories come out in tree pre-order, followed by the
    /// invalid cards. Feeding the result to [`build_forest`] reproduces the
    /// forest.
    #[must_use]
    pub fn flatten(&self) -> Vec<StoryTreeNode> {
        let mut nodes = Vec::new();
        for issue in &self.issues {
            nodes.push(StoryTreeNode::Issue(IssueNode {
                children: Vec::new(),
                ..issue.clone()
            }));
            flatten_stories(&issue.children, &mut nodes);
        }
        nodes.extend(self.invalids.iter().cloned().map(StoryTreeNode::Invalid));
        nodes
    }
}

fn flatten_stories(stories: &[StoryNode], nodes: &mut Vec<StoryTreeNode>) {
    for story in stories {
        nodes.push(StoryTreeNode::Story(StoryNode {
            children: Vec::new(),
            ..story.clone()
        }));
        flatten_stories(&story.children, nodes);
    }
}

/// Builds the story forest from a flat node list.
///
/// Issues and stories are stably sorted by board position; equal positions
/// keep their input order. Stories hang under the node whose identifier
/// matches their parent id. Stories whose parent chain never reaches an
/// issue are left out, as is any story whose identifier already appears on
/// its own ancestor path.
#[must_use]
pub fn build_forest(nodes: impl IntoIterator<Item = StoryTreeNode>) -> StoryForest {
    let mut invalids = Vec::new();
    let mut positioned = Vec::new();
    for node in nodes {
        match node {
            StoryTreeNode::Invalid(invalid) => invalids.push(invalid),
            other => positioned.push(other),
        }
    }
    positioned.sort_by(compare_positions);

    let mut issues = Vec::new();
    let mut child_map: HashMap<StoryId, Vec<StoryNode>> = HashMap::new();
    for node in positioned {
        match node {
            StoryTreeNode::Issue(issue) => issues.push(issue),
            StoryTreeNode::Story(story) => child_map.entry(story.parent_id).or_default().push(story),
            StoryTreeNode::Invalid(invalid) => invalids.push(invalid),
        }
    }

    let mut linker = Linker {
        child_map: &child_map,
        path: Vec::new(),
        visited: HashSet::new(),
    };
    let issues: Vec<IssueNode> = issues
        .into_iter()
        .map(|issue| {
            let children = linker.children_of(issue.id);
            IssueNode { children, ..issue }
        })
        .collect();

    let orphans: usize = child_map
        .iter()
        .filter(|(parent, _)| !linker.visited.contains(*parent))
        .map(|(_, stories)| stories.len())
        .sum();
    if orphans > 0 {
        debug!(orphans, "stories without a reachable issue left out of the forest");
    }

    StoryForest { issues, invalids }
}

fn compare_positions(left: &StoryTreeNode, right: &StoryTreeNode) -> Ordering {
    match (left.position(), right.position()) {
        (Some(left_pos), Some(right_pos)) => left_pos.total_cmp(&right_pos),
        _ => Ordering::Equal,
    }
}

struct Linker<'a> {
    child_map: &'a HashMap<StoryId, Vec<StoryNode>>,
    path: Vec<StoryId>,
    visited: HashSet<StoryId>,
}

impl Linker<'_> {
    fn children_of(&mut self, parent: StoryId) -> Vec<StoryNode> {
        let child_map = self.child_map;
        let Some(stories) = child_map.get(&parent) else {
            return Vec::new();
        };
        self.visited.insert(parent);
        self.path.push(parent);

        let mut children = Vec::with_capacity(stories.len());
        for story in stories {
            if self.path.contains(&story.id) {
                warn!(story = %story.id, parent = %parent, "parent cycle cut");
                continue;
            }
            let grandchildren = self.children_of(story.id);
            children.push(StoryNode {
                children: grandchildren,
                ..story.clone()
            });
        }

        self.path.pop();
        children
    }
}
