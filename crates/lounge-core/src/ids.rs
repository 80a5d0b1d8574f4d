//! Id generation and avatar selection seams.
//!
//! Production implementations live in the infrastructure crate (UUID v4,
//! `rand`); tests supply sequential or fixed implementations so generated
//! values are deterministic.

/// Source of unique identifiers for store-created entities
/// (chat messages, reactions, playlists, roster entries).
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Picks an avatar glyph from a pool for a friend joining the room.
pub trait AvatarPicker: Send + Sync {
    /// Picks one glyph from `pool`. `pool` is never empty.
    fn pick(&self, pool: &[&str]) -> String;
}
