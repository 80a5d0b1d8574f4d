//! Personal collections: the playback queue, title sets, and playlists.
//!
//! All three keep membership unique per title id and absorb missing-id
//! operations as silent no-ops. None of them returns an error.

use crate::catalog::Title;
use serde::{Deserialize, Serialize};

/// The watch-party playback queue.
///
/// Ordered, unique by title id. Index 0 is "now playing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    entries: Vec<Title>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a title to the queue.
    ///
    /// Returns `false` without changing anything if the id is already queued,
    /// so the title keeps its original position.
    pub fn add(&mut self, title: Title) -> bool {
        if self.contains(&title.id) {
            return false;
        }
        self.entries.push(title);
        true
    }

    /// Removes the entry with the given id. Returns `false` if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    /// Moves the entry with the given id to the front (index 0) while
    /// preserving the relative order of everything else.
    ///
    /// Returns `false` without changing anything if the id is absent.
    pub fn promote(&mut self, id: &str) -> bool {
        let Some(index) = self.entries.iter().position(|t| t.id == id) else {
            return false;
        };
        let entry = self.entries.remove(index);
        self.entries.insert(0, entry);
        true
    }

    /// The entry at index 0, if any.
    pub fn now_playing(&self) -> Option<&Title> {
        self.entries.first()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Title> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An insertion-ordered set of titles, unique by id.
///
/// Used for both the wishlist and the watch-later list. Insertion order is
/// preserved for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleSet {
    entries: Vec<Title>,
}

impl TitleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a title. Idempotent: re-adding an id changes nothing.
    pub fn add(&mut self, title: Title) -> bool {
        if self.contains(&title.id) {
            return false;
        }
        self.entries.push(title);
        true
    }

    /// Removes the entry with the given id. Returns `false` if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Title> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named, ordered collection of titles, unique by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub titles: Vec<Title>,
    /// Creation timestamp (ISO 8601 format)
    pub created_at: String,
    pub owner: String,
    pub shared: bool,
    /// Collaborator labels, empty unless the playlist is shared
    #[serde(default)]
    pub collaborators: Vec<String>,
}

impl Playlist {
    /// Creates an empty, unshared playlist. Duplicate names are allowed;
    /// identity is the id alone.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        created_at: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            titles: Vec::new(),
            created_at: created_at.into(),
            owner: owner.into(),
            shared: false,
            collaborators: Vec::new(),
        }
    }

    /// Adds a title, dedup-then-append: re-adding an id removes the old entry
    /// and appends the new one, so the length never grows on re-add.
    pub fn add(&mut self, title: Title) {
        self.titles.retain(|t| t.id != title.id);
        self.titles.push(title);
    }

    /// Removes the entry with the given id. Returns `false` if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.titles.len();
        self.titles.retain(|t| t.id != id);
        self.titles.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.titles.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
