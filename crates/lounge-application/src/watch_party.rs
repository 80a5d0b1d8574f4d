//! Watch-party room controller.
//!
//! Owns the camera stream while the room view is active and funnels every
//! exit path (explicit leave, toggle off, drop) through track release.

use crate::store::SessionStore;
use lounge_core::media::{CaptureConstraints, CaptureStream, MediaCapture};
use std::sync::Arc;

/// The room-screen session object held by the shell while the room view is
/// active.
///
/// Camera acquisition failure never blocks the room: the view degrades to
/// "video unavailable" and chat, reactions, and the roster keep working.
pub struct WatchParty {
    store: SessionStore,
    capture: Arc<dyn MediaCapture>,
    stream: Option<CaptureStream>,
    muted: bool,
    video_unavailable: bool,
}

impl WatchParty {
    /// Enters the room: flips the store's room override and requests the
    /// camera, mirroring the room view's auto-start.
    pub async fn join(store: SessionStore, capture: Arc<dyn MediaCapture>) -> Self {
        store.set_in_room(true).await;

        let mut party = Self {
            store,
            capture,
            stream: None,
            muted: true, // mic starts muted
            video_unavailable: false,
        };
        party.start_video().await;
        party
    }

    async fn start_video(&mut self) {
        match self
            .capture
            .acquire(CaptureConstraints::video_and_audio())
            .await
        {
            Ok(stream) => {
                self.stream = Some(stream);
                self.video_unavailable = false;
            }
            Err(err) => {
                tracing::warn!(error = %err, "camera unavailable, continuing without video");
                self.stream = None;
                self.video_unavailable = true;
            }
        }
    }

    fn stop_video(&mut self) {
        if let Some(stream) = self.stream.take() {
            stream.stop();
        }
    }

    /// Toggles the camera. Turning it off stops and drops the stream;
    /// turning it back on re-acquires (and may fail into the degraded state
    /// again). Returns whether video is on afterwards.
    pub async fn toggle_video(&mut self) -> bool {
        if self.stream.is_some() {
            self.stop_video();
        } else {
            self.start_video().await;
        }
        self.video_on()
    }

    /// Toggles the microphone. Returns whether it is muted afterwards.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Leaves the room: releases the camera, clears the room override, and
    /// navigates home.
    pub async fn leave(mut self) {
        self.stop_video();
        self.store.leave_room().await;
    }

    pub fn video_on(&self) -> bool {
        self.stream.is_some()
    }

    pub fn video_unavailable(&self) -> bool {
        self.video_unavailable
    }

    pub fn muted(&self) -> bool {
        self.muted
    }
}

impl Drop for WatchParty {
    fn drop(&mut self) {
        // Covers teardown and navigation-away paths that skip leave().
        self.stop_video();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lounge_core::clock::Clock;
    use lounge_core::error::{LoungeError, Result};
    use lounge_core::ids::{AvatarPicker, IdSource};
    use lounge_core::media::{CaptureTrack, TrackKind};
    use lounge_core::user::UserProfile;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticIds;

    impl IdSource for StaticIds {
        fn next_id(&self) -> String {
            "id".to_string()
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
            Arc::new(StaticIds),
            Arc::new(FixedClock),
            Arc::new(FirstAvatar),
            UserProfile::default(),
        )
    }

    /// Hands out streams and keeps a clone of each track for inspection.
    struct FakeCapture {
        denied: bool,
        handed_out: Mutex<Vec<CaptureTrack>>,
    }

    impl FakeCapture {
        fn granted() -> Self {
            Self {
                denied: false,
                handed_out: Mutex::new(Vec::new()),
            }
        }

        fn denied() -> Self {
            Self {
                denied: true,
                handed_out: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MediaCapture for FakeCapture {
        async fn acquire(&self, constraints: CaptureConstraints) -> Result<CaptureStream> {
            if self.denied {
                return Err(LoungeError::capture_unavailable("permission denied"));
            }
            let mut tracks = Vec::new();
            if constraints.video {
                tracks.push(CaptureTrack::new("v0", TrackKind::Video, "cam"));
            }
            if constraints.audio {
                tracks.push(CaptureTrack::new("a0", TrackKind::Audio, "mic"));
            }
            self.handed_out.lock().unwrap().extend(tracks.iter().cloned());
            Ok(CaptureStream::new(tracks))
        }
    }

    #[tokio::test]
    async fn join_starts_video_and_flips_room_flag() {
        let store = store();
        let party = WatchParty::join(store.clone(), Arc::new(FakeCapture::granted())).await;

        assert!(store.in_room().await);
        assert!(party.video_on());
        assert!(!party.video_unavailable());
        assert!(party.muted());
    }

    #[tokio::test]
    async fn denied_capture_degrades_instead_of_blocking() {
        let store = store();
        let party = WatchParty::join(store.clone(), Arc::new(FakeCapture::denied())).await;

        // The room itself is joined regardless.
        assert!(store.in_room().await);
        assert!(!party.video_on());
        assert!(party.video_unavailable());
    }

    #[tokio::test]
    async fn leave_releases_tracks_and_navigates_home() {
        let store = store();
        let capture = Arc::new(FakeCapture::granted());
        let party = WatchParty::join(store.clone(), capture.clone()).await;

        party.leave().await;

        let tracks = capture.handed_out.lock().unwrap();
        assert!(tracks.iter().all(CaptureTrack::is_stopped));
        drop(tracks);

        let snap = store.snapshot().await;
        assert!(!snap.in_room);
        assert_eq!(snap.current_page, "home");
    }

    #[tokio::test]
    async fn toggle_video_stops_then_reacquires() {
        let store = store();
        let capture = Arc::new(FakeCapture::granted());
        let mut party = WatchParty::join(store, capture.clone()).await;

        assert!(!party.toggle_video().await);
        {
            let tracks = capture.handed_out.lock().unwrap();
            assert!(tracks.iter().all(CaptureTrack::is_stopped));
        }

        assert!(party.toggle_video().await);
        assert!(party.video_on());
    }

    #[tokio::test]
    async fn drop_releases_tracks() {
        let store = store();
        let capture = Arc::new(FakeCapture::granted());
        let party = WatchParty::join(store, capture.clone()).await;

        drop(party);

        let tracks = capture.handed_out.lock().unwrap();
        assert!(tracks.iter().all(CaptureTrack::is_stopped));
    }

    #[tokio::test]
    async fn toggle_mute_flips_state() {
        let store = store();
        let mut party = WatchParty::join(store, Arc::new(FakeCapture::granted())).await;

        assert!(party.muted());
        assert!(!party.toggle_mute());
        assert!(party.toggle_mute());
    }
}
