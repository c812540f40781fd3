//! Board members as shown on issues.

use serde::{Deserialize, Serialize};

/// A resolved board member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member handle.
    pub username: String,
    /// 30px avatar image, when the member has one.
    pub avatar_url: Option<String>,
}

impl Member {
    /// Creates a member.
    #[must_use]
    pub fn new(username: impl Into<String>, avatar_url: Option<String>) -> Self {
        Self {
            username: username.into(),
            avatar_url,
        }
    }
}
