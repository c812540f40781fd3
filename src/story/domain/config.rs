//! Configuration consumed by the story assembler.

use serde::{Deserialize, Serialize};

/// Label that marks a card as open unless configured otherwise.
pub const DEFAULT_OPEN_LABEL: &str = "open";

/// Avatar host used unless configured otherwise.
pub const DEFAULT_AVATAR_HOST: &str = "https://trello-avatars.s3.amazonaws.com";

/// Board-specific conventions applied while assembling stories.
///
/// # Examples
///
/// ```
/// use storyline::story::domain::StoryConfig;
///
/// let config = StoryConfig::default().with_open_label("doing");
/// assert_eq!(config.open_label, "doing");
/// assert_eq!(config.avatar_url("abc"), "https://trello-avatars.s3.amazonaws.com/abc/30.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Card label whose presence makes an issue open.
    pub open_label: String,
    /// Base URL that avatar hashes are appended to.
    pub avatar_host: String,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            open_label: DEFAULT_OPEN_LABEL.to_owned(),
            avatar_host: DEFAULT_AVATAR_HOST.to_owned(),
        }
    }
}

impl StoryConfig {
    /// Sets the open label.
    #[must_use]
    pub fn with_open_label(mut self, open_label: impl Into<String>) -> Self {
        self.open_label = open_label.into();
        self
    }

    /// Sets the avatar host. A trailing slash is dropped.
    #[must_use]
    pub fn with_avatar_host(mut self, avatar_host: impl Into<String>) -> Self {
        let host = avatar_host.into();
        self.avatar_host = host.trim_end_matches('/').to_owned();
        self
    }

    /// Builds the 30px avatar URL for an avatar hash.
    #[must_use]
    pub fn avatar_url(&self, avatar_hash: &str) -> String {
        format!("{}/{avatar_hash}/30.png", self.avatar_host)
    }
}
