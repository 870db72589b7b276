//! Playback snapshot and the reconciler that owns it.
//!
//! Commands never mutate this state; it moves only on engine events plus two
//! optimistic hints (a confirmed seek target and a confirmed volume). Events
//! arrive on independent channels with no sequence numbers, so every
//! transition is last-write-wins per field. A stale `playing` arriving after
//! a fresher `stopped` is possible under adversarial scheduling and is an
//! accepted limitation of the boundary contract.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::boundary::{ProgressEvent, StatusEvent};

use super::types::{file_name_of, PlayerStatus};

/// Display metadata for the item currently loaded in the engine.
///
/// Derived from the engine-reported path, not from the track cache: deleting
/// a track from its collection does not invalidate an in-flight snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NowPlaying {
    pub path: String,
    pub title: String,
    pub artist: String,
}

impl NowPlaying {
    pub fn from_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            title: file_name_of(path),
            artist: "Unknown Artist".to_string(),
        }
    }
}

/// The single authoritative view of playback, consumed by presentation.
#[derive(Clone, Debug)]
pub struct PlaybackSnapshot {
    pub status: PlayerStatus,
    pub current_item: Option<NowPlaying>,
    pub position_secs: f64,
    pub duration_secs: f64,
    pub volume: f64,
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self {
            status: PlayerStatus::Stopped,
            current_item: None,
            position_secs: 0.0,
            duration_secs: 0.0,
            volume: 1.0,
        }
    }
}

impl PlaybackSnapshot {
    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }
}

/// Owner of the playback snapshot.
///
/// Cloning shares the same snapshot; mutation happens only through the
/// reconciler methods below, reads always see the latest committed value.
#[derive(Clone, Default)]
pub struct PlaybackState {
    inner: Arc<RwLock<PlaybackSnapshot>>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> PlaybackSnapshot {
        self.inner.read().await.clone()
    }

    /// Applies a status event.
    ///
    /// `stopped` clears the current item; `playing`/`paused` carrying a path
    /// replace it. A duration on the event overwrites the known duration.
    pub async fn apply_status(&self, event: StatusEvent) {
        let mut snap = self.inner.write().await;
        snap.status = event.status;

        if let Some(duration) = event.duration {
            snap.duration_secs = sanitize(duration);
            snap.position_secs = clamp_position(snap.position_secs, snap.duration_secs);
        }

        match event.status {
            PlayerStatus::Stopped => {
                snap.current_item = None;
            }
            PlayerStatus::Playing | PlayerStatus::Paused => {
                if let Some(path) = event.path.as_deref() {
                    snap.current_item = Some(NowPlaying::from_path(path));
                }
            }
        }
    }

    /// Applies a progress tick. The engine owns playback timing, so the
    /// event's values overwrite whatever is held locally, clamped so the
    /// position never exceeds the duration and never goes negative or NaN.
    pub async fn apply_progress(&self, event: ProgressEvent) {
        let mut snap = self.inner.write().await;
        snap.duration_secs = sanitize(event.duration);
        snap.position_secs = clamp_position(sanitize(event.position), snap.duration_secs);
    }

    /// Optimistic position hint after a confirmed seek.
    pub async fn note_seek(&self, seconds: f64) {
        let mut snap = self.inner.write().await;
        snap.position_secs = clamp_position(sanitize(seconds), snap.duration_secs);
    }

    /// Optimistic volume hint after a confirmed volume change.
    pub async fn note_volume(&self, volume: f64) {
        let mut snap = self.inner.write().await;
        snap.volume = volume;
    }

    pub async fn reset(&self) {
        *self.inner.write().await = PlaybackSnapshot::default();
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn clamp_position(position: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        position.min(duration)
    } else {
        position
    }
}
