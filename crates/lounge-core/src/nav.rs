//! Page navigation: the view enumeration and the page router.
//!
//! The session store never validates page ids; [`resolve`] alone decides
//! which view a page id maps to, and unknown ids fall back to [`View::Home`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The fixed set of renderable views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum View {
    Home,
    Detail,
    Search,
    Categories,
    MyList,
    CreateRoom,
    JoinRoom,
    Settings,
    Apps,
    Games,
    Subscriptions,
    Playlists,
    History,
    Friends,
    Dashboard,
    Platform,
    WatchParty,
}

impl View {
    /// The canonical page id for this view.
    pub fn page_id(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Detail => "detail",
            View::Search => "search",
            View::Categories => "categories",
            View::MyList => "mylist",
            View::CreateRoom => "create-room",
            View::JoinRoom => "join-room",
            View::Settings => "settings",
            View::Apps => "apps",
            View::Games => "games",
            View::Subscriptions => "subscriptions",
            View::Playlists => "playlists",
            View::History => "history",
            View::Friends => "friends",
            View::Dashboard => "dashboard",
            View::Platform => "platform",
            View::WatchParty => "room",
        }
    }

    /// Display heading used by the shell renderer.
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Detail => "Details",
            View::Search => "Search",
            View::Categories => "Categories",
            View::MyList => "My List",
            View::CreateRoom => "Create Room",
            View::JoinRoom => "Join Room",
            View::Settings => "Settings",
            View::Apps => "Apps",
            View::Games => "Games",
            View::Subscriptions => "Subscriptions",
            View::Playlists => "Playlists",
            View::History => "Watch History",
            View::Friends => "Friends",
            View::Dashboard => "Dashboard",
            View::Platform => "Platform",
            View::WatchParty => "Watch Party",
        }
    }
}

/// Maps `(current_page, in_room)` to exactly one active view.
///
/// If `in_room` is set or the page id is `"room"`, the result is
/// [`View::WatchParty`] regardless of the page id. Unknown page ids fall
/// back to [`View::Home`]. Pure function, re-derived on every state change.
pub fn resolve(current_page: &str, in_room: bool) -> View {
    if in_room || current_page == "room" {
        return View::WatchParty;
    }

    match current_page {
        "home" => View::Home,
        "detail" => View::Detail,
        "search" => View::Search,
        "categories" => View::Categories,
        "mylist" => View::MyList,
        "create-room" => View::CreateRoom,
        "join-room" => View::JoinRoom,
        "settings" => View::Settings,
        "apps" => View::Apps,
        "games" => View::Games,
        "subscriptions" => View::Subscriptions,
        "playlists" => View::Playlists,
        "history" => View::History,
        "friends" => View::Friends,
        "dashboard" => View::Dashboard,
        "platform" => View::Platform,
        _ => View::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn room_override_beats_current_page() {
        assert_eq!(resolve("settings", true), View::WatchParty);
        assert_eq!(resolve("home", true), View::WatchParty);
    }

    #[test]
    fn room_page_id_resolves_without_flag() {
        assert_eq!(resolve("room", false), View::WatchParty);
    }

    #[test]
    fn unknown_page_falls_back_to_home() {
        assert_eq!(resolve("no-such-page", false), View::Home);
        assert_eq!(resolve("", false), View::Home);
    }

    #[test]
    fn every_view_round_trips_through_its_page_id() {
        for view in View::iter() {
            if view == View::WatchParty {
                // "room" resolves through the override branch.
                assert_eq!(resolve(view.page_id(), false), View::WatchParty);
            } else {
                assert_eq!(resolve(view.page_id(), false), view);
            }
        }
    }
}
