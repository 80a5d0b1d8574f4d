//! Wall-clock seam for timestamp generation.

/// Source of creation timestamps for chat messages and playlists.
///
/// Injected so tests can supply fixed values; the production implementation
/// formats `chrono::Utc::now()` as RFC 3339.
pub trait Clock: Send + Sync {
    fn now_rfc3339(&self) -> String;
}
