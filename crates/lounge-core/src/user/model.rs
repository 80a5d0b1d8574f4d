//! UserProfile domain model.

use serde::{Deserialize, Serialize};

/// The current user's profile.
///
/// The nickname is the author label for user-sent chat messages and the
/// owner label for created playlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User's display nickname
    pub nickname: String,
    /// Avatar glyph shown next to the user's chat messages
    pub avatar: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            nickname: "You".to_string(),
            avatar: "🎯".to_string(),
        }
    }
}
