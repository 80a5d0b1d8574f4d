//! Watch-party room types: chat, emoji reactions, roster.
//!
//! The room is a single-client simulation; there is no network peer. The
//! chat log is append-only, reactions are time-bounded, and the roster only
//! ever grows.

use crate::catalog::Title;
use crate::clock::Clock;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Author label for synthetic system messages (join announcements).
pub const SYSTEM_AUTHOR: &str = "System";

/// Avatar glyph for system messages.
pub const SYSTEM_AVATAR: &str = "🤖";

/// How long an emoji reaction stays in the active set.
pub const REACTION_TTL: Duration = Duration::from_millis(2000);

/// Avatar pool for friends joining the room.
pub const FRIEND_AVATARS: [&str; 8] = ["🎨", "🎸", "🎮", "🎲", "🎳", "🎺", "🎻", "🎹"];

/// The emoji tray offered in the room view.
pub const REACTION_TRAY: [&str; 8] = ["😂", "❤️", "😮", "👏", "🔥", "💯", "😍", "🤔"];

/// A single message in the room chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    /// Display name of the sender ("System" for synthetic announcements)
    pub author: String,
    pub body: String,
    /// Timestamp when the message was created (ISO 8601 format)
    pub timestamp: String,
    /// Avatar glyph of the sender
    pub avatar: String,
}

/// A transient floating emoji reaction.
///
/// Created on user action and removed from the active set after
/// [`REACTION_TTL`]; models an animation event, not a persisted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiReaction {
    pub id: String,
    pub glyph: String,
    /// Screen coordinates of the reaction origin
    pub x: f32,
    pub y: f32,
}

/// A member of the watch-party roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMember {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub online: bool,
}

/// A watch-party room record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// The title picked when the room was created, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_title: Option<Title>,
    pub members: Vec<RoomMember>,
}

/// The chat log every session starts with.
pub fn seed_chat(clock: &dyn Clock) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: "1".to_string(),
            author: "Varshith".to_string(),
            body: "Hey everyone! Ready for movie night? 🍿".to_string(),
            timestamp: clock.now_rfc3339(),
            avatar: "🎭".to_string(),
        },
        ChatMessage {
            id: "2".to_string(),
            author: "Rohith".to_string(),
            body: "Absolutely! What are we watching first?".to_string(),
            timestamp: clock.now_rfc3339(),
            avatar: "🎬".to_string(),
        },
    ]
}

/// The roster every session starts with.
pub fn seed_roster() -> Vec<RoomMember> {
    vec![
        RoomMember {
            id: "1".to_string(),
            name: "You".to_string(),
            avatar: "🧑🏻‍🦰".to_string(),
            online: true,
        },
        RoomMember {
            id: "2".to_string(),
            name: "Rohith".to_string(),
            avatar: "👨🏻‍🦰".to_string(),
            online: true,
        },
        RoomMember {
            id: "3".to_string(),
            name: "Varshith".to_string(),
            avatar: "🧑🏻‍🦰".to_string(),
            online: true,
        },
        RoomMember {
            id: "4".to_string(),
            name: "Harsha".to_string(),
            avatar: "👩🏻".to_string(),
            online: false,
        },
    ]
}
