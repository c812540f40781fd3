//! Raw board data as delivered by the board provider.
//!
//! Field names follow the provider's camelCase payload so a response body
//! decodes without a translation layer.

use super::{CardId, ListId, MemberId, StoryDomainError};
use serde::{Deserialize, Serialize};

/// A card label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLabel {
    /// Label text; unnamed labels decode as an empty string.
    #[serde(default)]
    pub name: String,
}

/// A card exactly as the provider reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    /// Provider card identifier.
    pub id: CardId,
    /// Encoded card name.
    pub name: String,
    /// Labels attached to the card.
    #[serde(default)]
    pub labels: Vec<RawLabel>,
    /// Members assigned to the card.
    #[serde(default)]
    pub id_members: Vec<MemberId>,
    /// List the card sits in.
    pub id_list: ListId,
    /// Short link to the card.
    #[serde(default)]
    pub short_url: String,
    /// Position of the card on the board.
    pub pos: f64,
}

/// A board list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawList {
    /// Provider list identifier.
    pub id: ListId,
    /// List name.
    pub name: String,
}

/// A board member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    /// Provider member identifier.
    pub id: MemberId,
    /// Member handle.
    pub username: String,
    /// Avatar hash, when the member uploaded one.
    #[serde(default)]
    pub avatar_hash: Option<String>,
}

/// Complete in-memory copy of one board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Visible cards in provider order.
    #[serde(default)]
    pub cards: Vec<RawCard>,
    /// Open lists.
    #[serde(default)]
    pub lists: Vec<RawList>,
    /// All board members.
    #[serde(default)]
    pub members: Vec<RawMember>,
}

impl BoardSnapshot {
    /// Decodes a board payload.
    ///
    /// # Errors
    ///
    /// Returns [`StoryDomainError::InvalidSnapshot`] when the body is not a
    /// board payload.
    pub fn from_json(body: &str) -> Result<Self, StoryDomainError> {
        serde_json::from_str(body).map_err(|err| StoryDomainError::InvalidSnapshot(err.to_string()))
    }

    /// Finds a list by identifier.
    #[must_use]
    pub fn list(&self, id: &ListId) -> Option<&RawList> {
        self.lists.iter().find(|list| &list.id == id)
    }

    /// Finds a member by identifier.
    #[must_use]
    pub fn member(&self, id: &MemberId) -> Option<&RawMember> {
        self.members.iter().find(|member| &member.id == id)
    }
}
