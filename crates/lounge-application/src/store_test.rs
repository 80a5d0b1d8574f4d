#[cfg(test)]
mod tests {
    use crate::store::SessionStore;
    use lounge_core::catalog::{Platform, Title};
    use lounge_core::clock::Clock;
    use lounge_core::ids::{AvatarPicker, IdSource};
    use lounge_core::nav::{View, resolve};
    use lounge_core::room::SYSTEM_AUTHOR;
    use lounge_core::user::UserProfile;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    // Deterministic seams for the store's generated values.

    struct SeqIds(AtomicU64);

    impl IdSource for SeqIds {
        fn next_id(&self) -> String {
            format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_rfc3339(&self) -> String {
            "2024-01-01T00:00:00Z".to_string()
        }
    }

    struct FirstAvatar;

    impl AvatarPicker for FirstAvatar {
        fn pick(&self, pool: &[&str]) -> String {
            pool[0].to_string()
        }
    }

    fn store() -> SessionStore {
        SessionStore::new(
            Arc::new(SeqIds(AtomicU64::new(0))),
            Arc::new(FixedClock),
            Arc::new(FirstAvatar),
            UserProfile::default(),
        )
    }

    fn title(id: &str, name: &str) -> Title {
        Title {
            id: id.to_string(),
            title: name.to_string(),
            description: String::new(),
            genres: vec!["Action".to_string()],
            duration: "2h".to_string(),
            rating: "8.0".to_string(),
            year: 2022,
            image: String::new(),
            platform: Platform::Netflix,
            featured: false,
        }
    }

    #[tokio::test]
    async fn queue_double_add_keeps_single_entry() {
        let store = store();
        assert!(store.add_to_queue(title("a", "A")).await);
        assert!(store.add_to_queue(title("b", "B")).await);
        assert!(!store.add_to_queue(title("a", "A")).await);

        let queue = store.queue().await;
        let ids: Vec<String> = queue.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn removing_absent_ids_changes_nothing() {
        let store = store();
        store.add_to_queue(title("a", "A")).await;
        store.add_to_wishlist(title("a", "A")).await;
        store.add_to_watch_later(title("a", "A")).await;

        assert!(!store.remove_from_queue("zz").await);
        assert!(!store.remove_from_wishlist("zz").await);
        assert!(!store.remove_from_watch_later("zz").await);

        let snap = store.snapshot().await;
        assert_eq!(snap.queue.len(), 1);
        assert_eq!(snap.wishlist.len(), 1);
        assert_eq!(snap.watch_later.len(), 1);
    }

    #[tokio::test]
    async fn promote_to_front_reorders_and_keeps_rest_stable() {
        let store = store();
        for (id, name) in [("a", "A"), ("b", "B"), ("c", "C")] {
            store.add_to_queue(title(id, name)).await;
        }

        assert!(store.promote_to_front("c").await);
        let ids: Vec<String> = store.queue().await.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);

        assert!(!store.promote_to_front("zz").await);
        let ids: Vec<String> = store.queue().await.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn created_playlist_receives_added_title() {
        let store = store();
        let id = store.create_playlist("Favorites").await;
        store.add_to_playlist(&id, title("x", "X")).await;

        let playlists = store.playlists().await;
        assert_eq!(playlists.len(), 1);
        let playlist = &playlists[0];
        assert_eq!(playlist.name, "Favorites");
        assert_eq!(playlist.owner, "You");
        assert!(!playlist.shared);
        let ids: Vec<&str> = playlist.titles.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["x"]);
    }

    #[tokio::test]
    async fn playlist_re_add_does_not_grow() {
        let store = store();
        let id = store.create_playlist("Favorites").await;
        store.add_to_playlist(&id, title("x", "X")).await;
        store.add_to_playlist(&id, title("y", "Y")).await;
        store.add_to_playlist(&id, title("x", "X")).await;

        let playlists = store.playlists().await;
        assert_eq!(playlists[0].len(), 2);
    }

    #[tokio::test]
    async fn playlist_ops_with_unknown_id_are_noops() {
        let store = store();
        store.add_to_playlist("nope", title("x", "X")).await;
        store.remove_from_playlist("nope", "x").await;
        assert!(store.playlists().await.is_empty());
    }

    #[tokio::test]
    async fn duplicate_playlist_names_are_allowed() {
        let store = store();
        let first = store.create_playlist("Movie Night").await;
        let second = store.create_playlist("Movie Night").await;
        assert_ne!(first, second);
        assert_eq!(store.playlists().await.len(), 2);
    }

    #[tokio::test]
    async fn chat_message_is_authored_by_current_user() {
        let store = store();
        let seeded = store.chat().await.len();

        let message = store.add_chat_message("Let's start!").await;
        assert_eq!(message.author, "You");
        assert_eq!(message.avatar, "🎯");
        assert_eq!(message.timestamp, "2024-01-01T00:00:00Z");

        let chat = store.chat().await;
        assert_eq!(chat.len(), seeded + 1);
        assert_eq!(chat.last().unwrap().body, "Let's start!");
    }

    #[tokio::test(start_paused = true)]
    async fn reactions_expire_independently_after_ttl() {
        let store = store();

        let first = store.add_emoji_reaction("🔥", 10.0, 20.0).await;
        tokio::time::advance(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        let second = store.add_emoji_reaction("❤️", 30.0, 40.0).await;

        // Both still active: first is 1000ms old, second brand new.
        let active: Vec<String> = store.reactions().await.iter().map(|r| r.id.clone()).collect();
        assert!(active.contains(&first.id));
        assert!(active.contains(&second.id));

        // Past the first reaction's TTL, short of the second's.
        tokio::time::advance(Duration::from_millis(1100)).await;
        tokio::task::yield_now().await;
        let active: Vec<String> = store.reactions().await.iter().map(|r| r.id.clone()).collect();
        assert!(!active.contains(&first.id));
        assert!(active.contains(&second.id));

        tokio::time::advance(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        assert!(store.reactions().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn reaction_ttl_is_anchored_at_creation() {
        let store = store();
        store.add_emoji_reaction("💯", 0.0, 0.0).await;

        // Advance past the TTL in one jump, without giving the expiry task
        // a chance to run first. The deadline counts from creation, so one
        // poll afterwards is enough to clear the reaction.
        tokio::time::advance(Duration::from_millis(2001)).await;
        tokio::task::yield_now().await;

        assert!(store.reactions().await.is_empty());
    }

    #[tokio::test]
    async fn expire_reaction_is_idempotent() {
        let store = store();
        let reaction = store.add_emoji_reaction("👏", 0.0, 0.0).await;
        store.expire_reaction(&reaction.id).await;
        store.expire_reaction(&reaction.id).await;
        assert!(store.reactions().await.is_empty());
    }

    #[tokio::test]
    async fn friend_join_grows_roster_and_chat_together() {
        let store = store();
        let roster_before = store.roster().await.len();
        let chat_before = store.chat().await.len();

        let member = store.add_friend_to_room("Priya").await;
        assert_eq!(member.name, "Priya");
        assert!(member.online);
        assert_eq!(member.avatar, "🎨"); // first of the friend pool

        let snap = store.snapshot().await;
        assert_eq!(snap.roster.len(), roster_before + 1);
        assert_eq!(snap.chat.len(), chat_before + 1);

        let announcement = snap.chat.last().unwrap();
        assert_eq!(announcement.author, SYSTEM_AUTHOR);
        assert_ne!(announcement.author, "Priya");
        assert_eq!(announcement.body, "Priya joined the room!");
    }

    #[tokio::test]
    async fn leave_room_returns_home_and_keeps_roster() {
        let store = store();
        store.set_in_room(true).await;
        store.set_current_page("room").await;
        store.add_friend_to_room("Priya").await;
        let roster_before = store.roster().await.len();

        store.leave_room().await;

        let snap = store.snapshot().await;
        assert!(!snap.in_room);
        assert_eq!(snap.current_page, "home");
        assert_eq!(snap.roster.len(), roster_before);
    }

    #[tokio::test]
    async fn room_title_selection_is_independent_of_browse_selection() {
        let store = store();
        store.set_selected_title(Some(title("a", "A"))).await;
        store.set_selected_room_title(Some(title("b", "B"))).await;

        let snap = store.snapshot().await;
        assert_eq!(snap.selected_title.unwrap().id, "a");
        assert_eq!(snap.selected_room_title.unwrap().id, "b");

        store.set_selected_room_title(None).await;
        assert!(store.snapshot().await.selected_room_title.is_none());
    }

    #[tokio::test]
    async fn router_override_wins_over_stored_page() {
        let store = store();
        store.set_current_page("settings").await;
        store.set_in_room(true).await;

        let snap = store.snapshot().await;
        assert_eq!(resolve(&snap.current_page, snap.in_room), View::WatchParty);
    }

    #[tokio::test]
    async fn store_accepts_unknown_page_ids() {
        let store = store();
        store.set_current_page("not-a-page").await;

        let snap = store.snapshot().await;
        // The store keeps the raw id; only the router interprets it.
        assert_eq!(snap.current_page, "not-a-page");
        assert_eq!(resolve(&snap.current_page, snap.in_room), View::Home);
    }

    #[tokio::test]
    async fn every_mutation_bumps_the_revision() {
        let store = store();
        let rx = store.subscribe();
        let start = *rx.borrow();

        store.set_current_page("apps").await;
        store.add_to_queue(title("a", "A")).await;
        store.set_search_query("dune").await;

        assert_eq!(*rx.borrow(), start + 3);
    }

    #[tokio::test]
    async fn initial_state_matches_defaults() {
        let store = store();
        let snap = store.snapshot().await;

        assert_eq!(snap.current_page, "home");
        assert!(!snap.in_room);
        assert_eq!(snap.room_name, "Movie Night Party");
        assert_eq!(snap.selected_category, "All");
        assert_eq!(snap.selected_platform, "");
        assert!(snap.queue.is_empty());
        assert!(snap.playlists.is_empty());
        assert_eq!(snap.chat.len(), 2);
        assert_eq!(snap.roster.len(), 4);
    }
}
