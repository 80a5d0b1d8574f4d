//! Media capture contract.
//!
//! Models the platform webcam/microphone collaborator: request a stream on
//! room entry, hold the live handle while the room view is up, and release
//! every track on every exit path (explicit stop, navigation away, drop).

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// What to request from the capture device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub video: bool,
    pub audio: bool,
}

impl CaptureConstraints {
    /// The room view's default request.
    pub fn video_and_audio() -> Self {
        Self {
            video: true,
            audio: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
}

/// A single live capture track.
///
/// The stop flag is shared between clones so a held handle observes a stop
/// issued through the owning stream.
#[derive(Debug, Clone)]
pub struct CaptureTrack {
    pub id: String,
    pub kind: TrackKind,
    pub label: String,
    stopped: Arc<AtomicBool>,
}

impl CaptureTrack {
    pub fn new(id: impl Into<String>, kind: TrackKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stops the track. Idempotent.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// A live stream handle owning its tracks.
///
/// Dropping the stream stops every track, so the device is released on every
/// exit path even when `stop` is never called explicitly.
#[derive(Debug)]
pub struct CaptureStream {
    tracks: Vec<CaptureTrack>,
}

impl CaptureStream {
    pub fn new(tracks: Vec<CaptureTrack>) -> Self {
        Self { tracks }
    }

    /// Stops every track. Idempotent.
    pub fn stop(&self) {
        for track in &self.tracks {
            track.stop();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.tracks.iter().all(CaptureTrack::is_stopped)
    }

    pub fn tracks(&self) -> &[CaptureTrack] {
        &self.tracks
    }

    pub fn has_video(&self) -> bool {
        self.tracks.iter().any(|t| t.kind == TrackKind::Video)
    }
}

impl Drop for CaptureStream {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The platform capture collaborator.
///
/// Acquisition may fail (permission denied, no device); the failure is
/// surfaced as `LoungeError::CaptureUnavailable` and degrades the room view
/// rather than blocking it.
#[async_trait]
pub trait MediaCapture: Send + Sync {
    async fn acquire(&self, constraints: CaptureConstraints) -> Result<CaptureStream>;
}
