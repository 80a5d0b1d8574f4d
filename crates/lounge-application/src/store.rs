//! The session state store.
//!
//! `SessionStore` is the single process-wide owner of all mutable UI state:
//! navigation, selections, the queue, wishlist, watch-later, playlists, and
//! the watch-party room artifacts (chat, reactions, roster). Every mutator is
//! infallible: operations targeting an id that is not present are silent
//! no-ops, never errors.

use lounge_core::catalog::Title;
use lounge_core::clock::Clock;
use lounge_core::ids::{AvatarPicker, IdSource};
use lounge_core::library::{Playlist, Queue, TitleSet};
use lounge_core::room::{
    ChatMessage, EmojiReaction, FRIEND_AVATARS, REACTION_TTL, Room, RoomMember, SYSTEM_AUTHOR,
    SYSTEM_AVATAR, seed_chat, seed_roster,
};
use lounge_core::user::UserProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{RwLock, watch};

/// The full mutable session state.
///
/// `snapshot()` clones this out wholesale; views render from the clone and
/// never hold the lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub current_page: String,
    pub selected_title: Option<Title>,
    pub selected_room_title: Option<Title>,
    pub queue: Queue,
    pub chat: Vec<ChatMessage>,
    pub reactions: Vec<EmojiReaction>,
    pub roster: Vec<RoomMember>,
    pub in_room: bool,
    pub room_name: String,
    pub current_room: Option<Room>,
    pub wishlist: TitleSet,
    pub watch_later: TitleSet,
    pub playlists: Vec<Playlist>,
    pub search_query: String,
    pub selected_category: String,
    pub selected_platform: String,
}

impl SessionState {
    fn initial(clock: &dyn Clock) -> Self {
        Self {
            current_page: "home".to_string(),
            selected_title: None,
            selected_room_title: None,
            queue: Queue::new(),
            chat: seed_chat(clock),
            reactions: Vec::new(),
            roster: seed_roster(),
            in_room: false,
            room_name: "Movie Night Party".to_string(),
            current_room: None,
            wishlist: TitleSet::new(),
            watch_later: TitleSet::new(),
            playlists: Vec::new(),
            search_query: String::new(),
            selected_category: "All".to_string(),
            selected_platform: String::new(),
        }
    }
}

/// Single-writer state container shared by every view.
///
/// Construct one per running application process. Cloning the store clones
/// the `Arc` handles, not the state; all clones observe the same session.
///
/// Mutations run to completion under one write lock before the next one is
/// processed; every mutation bumps a revision counter that the shell can
/// subscribe to for re-rendering.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
    revision: Arc<watch::Sender<u64>>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
    avatars: Arc<dyn AvatarPicker>,
    profile: UserProfile,
}

impl SessionStore {
    pub fn new(
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn Clock>,
        avatars: Arc<dyn AvatarPicker>,
        profile: UserProfile,
    ) -> Self {
        let state = SessionState::initial(clock.as_ref());
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(state)),
            revision: Arc::new(revision),
            ids,
            clock,
            avatars,
            profile,
        }
    }

    /// Subscribes to the revision counter; it changes after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Clones out the full state for rendering.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    async fn mutate<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let out = {
            let mut state = self.state.write().await;
            f(&mut state)
        };
        self.revision.send_modify(|rev| *rev += 1);
        out
    }

    // ============================================================================
    // Navigation and selection setters (wholesale overwrite, no history)
    // ============================================================================

    /// Overwrites the navigation target. The id is not validated here; the
    /// router maps unknown ids to the home view at render time.
    pub async fn set_current_page(&self, page: impl Into<String>) {
        let page = page.into();
        tracing::debug!(page = %page, "navigating");
        self.mutate(|s| s.current_page = page).await;
    }

    pub async fn set_selected_title(&self, title: Option<Title>) {
        self.mutate(|s| s.selected_title = title).await;
    }

    pub async fn set_selected_room_title(&self, title: Option<Title>) {
        self.mutate(|s| s.selected_room_title = title).await;
    }

    pub async fn set_selected_platform(&self, platform: impl Into<String>) {
        self.mutate(|s| s.selected_platform = platform.into()).await;
    }

    pub async fn set_selected_category(&self, category: impl Into<String>) {
        self.mutate(|s| s.selected_category = category.into()).await;
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        self.mutate(|s| s.search_query = query.into()).await;
    }

    pub async fn set_room_name(&self, name: impl Into<String>) {
        self.mutate(|s| s.room_name = name.into()).await;
    }

    pub async fn set_in_room(&self, in_room: bool) {
        self.mutate(|s| s.in_room = in_room).await;
    }

    pub async fn set_current_room(&self, room: Option<Room>) {
        self.mutate(|s| s.current_room = room).await;
    }

    /// Leaves the room: clears the override flag and returns to the home
    /// view. The roster is kept untouched; re-entering shows the same
    /// members.
    pub async fn leave_room(&self) {
        tracing::info!("leaving room");
        self.mutate(|s| {
            s.in_room = false;
            s.current_page = "home".to_string();
        })
        .await;
    }

    // ============================================================================
    // Queue
    // ============================================================================

    /// Appends a title to the queue. Returns `false` (and changes nothing)
    /// if the id is already queued.
    pub async fn add_to_queue(&self, title: Title) -> bool {
        tracing::debug!(id = %title.id, "queue add");
        self.mutate(|s| s.queue.add(title)).await
    }

    pub async fn remove_from_queue(&self, id: &str) -> bool {
        self.mutate(|s| s.queue.remove(id)).await
    }

    /// Moves the queued entry with the given id to index 0 ("play next").
    /// No-op if the id is absent.
    pub async fn promote_to_front(&self, id: &str) -> bool {
        self.mutate(|s| s.queue.promote(id)).await
    }

    // ============================================================================
    // Wishlist / watch later
    // ============================================================================

    pub async fn add_to_wishlist(&self, title: Title) -> bool {
        self.mutate(|s| s.wishlist.add(title)).await
    }

    pub async fn remove_from_wishlist(&self, id: &str) -> bool {
        self.mutate(|s| s.wishlist.remove(id)).await
    }

    pub async fn add_to_watch_later(&self, title: Title) -> bool {
        self.mutate(|s| s.watch_later.add(title)).await
    }

    pub async fn remove_from_watch_later(&self, id: &str) -> bool {
        self.mutate(|s| s.watch_later.remove(id)).await
    }

    // ============================================================================
    // Playlists
    // ============================================================================

    /// Creates an empty playlist owned by the current user and returns its
    /// generated id. Duplicate names are allowed.
    pub async fn create_playlist(&self, name: impl Into<String>) -> String {
        let id = self.ids.next_id();
        let playlist = Playlist::new(
            id.clone(),
            name,
            self.clock.now_rfc3339(),
            self.profile.nickname.clone(),
        );
        tracing::info!(id = %id, name = %playlist.name, "playlist created");
        self.mutate(|s| s.playlists.push(playlist)).await;
        id
    }

    /// Adds a title to a playlist, dedup-then-append. No-op if the playlist
    /// id is unknown.
    pub async fn add_to_playlist(&self, playlist_id: &str, title: Title) {
        self.mutate(|s| {
            if let Some(playlist) = s.playlists.iter_mut().find(|p| p.id == playlist_id) {
                playlist.add(title);
            }
        })
        .await;
    }

    /// Removes a title from a playlist. No-op if either id is unknown.
    pub async fn remove_from_playlist(&self, playlist_id: &str, title_id: &str) {
        self.mutate(|s| {
            if let Some(playlist) = s.playlists.iter_mut().find(|p| p.id == playlist_id) {
                playlist.remove(title_id);
            }
        })
        .await;
    }

    // ============================================================================
    // Room: chat, reactions, roster
    // ============================================================================

    /// Appends a chat message authored by the current user.
    pub async fn add_chat_message(&self, body: impl Into<String>) -> ChatMessage {
        let message = ChatMessage {
            id: self.ids.next_id(),
            author: self.profile.nickname.clone(),
            body: body.into(),
            timestamp: self.clock.now_rfc3339(),
            avatar: self.profile.avatar.clone(),
        };
        let out = message.clone();
        self.mutate(|s| s.chat.push(message)).await;
        out
    }

    /// Appends an emoji reaction and schedules its removal after
    /// [`REACTION_TTL`]. Each reaction gets its own timer keyed by id, so
    /// concurrent reactions expire independently.
    pub async fn add_emoji_reaction(
        &self,
        glyph: impl Into<String>,
        x: f32,
        y: f32,
    ) -> EmojiReaction {
        let reaction = EmojiReaction {
            id: self.ids.next_id(),
            glyph: glyph.into(),
            x,
            y,
        };
        let out = reaction.clone();
        self.mutate(|s| s.reactions.push(reaction)).await;

        let store = self.clone();
        let id = out.id.clone();
        // The timer must be anchored here, at creation, not at the task's
        // first poll.
        let expiry = tokio::time::sleep(REACTION_TTL);
        tokio::spawn(async move {
            expiry.await;
            store.expire_reaction(&id).await;
        });

        out
    }

    /// Removes a reaction from the active set. Safe to call for an id that
    /// is already gone.
    pub async fn expire_reaction(&self, id: &str) {
        self.mutate(|s| s.reactions.retain(|r| r.id != id)).await;
    }

    /// Adds a friend to the roster and announces the join in chat.
    ///
    /// Both effects happen under one write lock so they are observed
    /// together: the new member (avatar picked from the friend pool,
    /// online) and a system chat message.
    pub async fn add_friend_to_room(&self, name: impl Into<String>) -> RoomMember {
        let name = name.into();
        let member = RoomMember {
            id: self.ids.next_id(),
            name: name.clone(),
            avatar: self.avatars.pick(&FRIEND_AVATARS),
            online: true,
        };
        let announcement = ChatMessage {
            id: self.ids.next_id(),
            author: SYSTEM_AUTHOR.to_string(),
            body: format!("{} joined the room!", name),
            timestamp: self.clock.now_rfc3339(),
            avatar: SYSTEM_AVATAR.to_string(),
        };
        tracing::info!(name = %member.name, "friend joined room");

        let out = member.clone();
        self.mutate(|s| {
            s.roster.push(member);
            s.chat.push(announcement);
        })
        .await;
        out
    }

    // ============================================================================
    // Targeted reads
    // ============================================================================

    pub async fn current_page(&self) -> String {
        self.state.read().await.current_page.clone()
    }

    pub async fn in_room(&self) -> bool {
        self.state.read().await.in_room
    }

    pub async fn queue(&self) -> Queue {
        self.state.read().await.queue.clone()
    }

    pub async fn chat(&self) -> Vec<ChatMessage> {
        self.state.read().await.chat.clone()
    }

    pub async fn reactions(&self) -> Vec<EmojiReaction> {
        self.state.read().await.reactions.clone()
    }

    pub async fn roster(&self) -> Vec<RoomMember> {
        self.state.read().await.roster.clone()
    }

    pub async fn playlists(&self) -> Vec<Playlist> {
        self.state.read().await.playlists.clone()
    }

    /// The current user's profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}
