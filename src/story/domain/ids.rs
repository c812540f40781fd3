//! Identifier types for the story domain.

use super::StoryDomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static BOARD_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://trello\.com/b/([-_0-9A-Za-z]+)").expect("board url pattern compiles")
});

/// Numeric story identifier written at the head of a card name.
///
/// Identifiers are assigned by whoever names the cards; they are unique within
/// one board snapshot and act as the join key for parent links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(u64);

impl StoryId {
    /// Creates a story identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for StoryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque card identifier assigned by the board provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wraps a provider card identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque list identifier assigned by the board provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    /// Wraps a provider list identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque member identifier assigned by the board provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Wraps a provider member identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Short board identifier taken from a board URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    /// Creates a board identifier from its short id.
    ///
    /// # Errors
    ///
    /// Returns [`StoryDomainError::InvalidBoardUrl`] when the value is empty
    /// or contains characters outside `[-_0-9A-Za-z]`.
    pub fn new(value: impl Into<String>) -> Result<Self, StoryDomainError> {
        let raw = value.into();
        let is_valid = !raw.is_empty()
            && raw
                .chars()
                .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'));
        if !is_valid {
            return Err(StoryDomainError::InvalidBoardUrl(raw));
        }
        Ok(Self(raw))
    }

    /// Extracts the board identifier from a `https://trello.com/b/<id>` URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoryDomainError::InvalidBoardUrl`] when the URL does not
    /// reference a board.
    pub fn from_url(url: &str) -> Result<Self, StoryDomainError> {
        BOARD_URL
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id| Self(id.as_str().to_owned()))
            .ok_or_else(|| StoryDomainError::InvalidBoardUrl(url.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
