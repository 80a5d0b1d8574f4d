//! Simulated media capture device.
//!
//! Stands in for the platform webcam/microphone API: acquisition either
//! yields a live stream with one video and one audio track, or fails the way
//! a denied permission prompt would. There is no real device behind it.

use async_trait::async_trait;
use lounge_core::error::{LoungeError, Result};
use lounge_core::media::{CaptureConstraints, CaptureStream, CaptureTrack, MediaCapture, TrackKind};
use uuid::Uuid;

/// A capture source that always grants or always denies.
#[derive(Debug, Clone)]
pub struct SimulatedCapture {
    denied: bool,
}

impl SimulatedCapture {
    /// A device that grants every request.
    pub fn granted() -> Self {
        Self { denied: false }
    }

    /// A device that rejects every request, like a denied permission prompt.
    pub fn denied() -> Self {
        Self { denied: true }
    }
}

impl Default for SimulatedCapture {
    fn default() -> Self {
        Self::granted()
    }
}

#[async_trait]
impl MediaCapture for SimulatedCapture {
    async fn acquire(&self, constraints: CaptureConstraints) -> Result<CaptureStream> {
        if self.denied {
            tracing::warn!("capture request denied");
            return Err(LoungeError::capture_unavailable("permission denied by user"));
        }

        let mut tracks = Vec::new();
        if constraints.video {
            tracks.push(CaptureTrack::new(
                Uuid::new_v4().to_string(),
                TrackKind::Video,
                "Integrated Webcam",
            ));
        }
        if constraints.audio {
            tracks.push(CaptureTrack::new(
                Uuid::new_v4().to_string(),
                TrackKind::Audio,
                "Built-in Microphone",
            ));
        }
        tracing::debug!(tracks = tracks.len(), "capture stream acquired");
        Ok(CaptureStream::new(tracks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn granted_device_yields_video_and_audio() {
        let capture = SimulatedCapture::granted();
        let stream = capture
            .acquire(CaptureConstraints::video_and_audio())
            .await
            .unwrap();

        assert_eq!(stream.tracks().len(), 2);
        assert!(stream.has_video());
        assert!(!stream.is_stopped());
    }

    #[tokio::test]
    async fn denied_device_fails_with_capture_unavailable() {
        let capture = SimulatedCapture::denied();
        let err = capture
            .acquire(CaptureConstraints::video_and_audio())
            .await
            .unwrap_err();
        assert!(err.is_capture_unavailable());
    }

    #[tokio::test]
    async fn video_only_request_skips_audio() {
        let capture = SimulatedCapture::granted();
        let stream = capture
            .acquire(CaptureConstraints {
                video: true,
                audio: false,
            })
            .await
            .unwrap();
        assert_eq!(stream.tracks().len(), 1);
        assert!(stream.has_video());
    }
}
