//! Controller module - command dispatch and event handling
//!
//! This module contains the controller that turns user intent into boundary
//! commands and keeps local state synchronized with what the backends push
//! back. It is organized into submodules by responsibility:
//!
//! - `commands`: playback command dispatch and the Recent side effect
//! - `events`: engine event listeners feeding the reconciler
//! - `subscriptions`: cancellation guards for spawned listeners
//! - `library`: remote collection synchronizers

mod commands;
mod events;
mod library;
mod subscriptions;

pub use events::EventBindings;
pub use library::{FolderSync, PlaylistSync, TrackSync};
pub use subscriptions::{spawn_listener, Subscription};

use std::sync::Arc;

use crate::boundary::PlayerPort;
use crate::model::{EngineAlerts, PlaybackState};

/// Coordinates playback commands, engine events, and the play-history
/// side effect.
///
/// Owns the playback snapshot and the engine alert slot; the playlist
/// synchronizer is shared with whoever drives the library views, since the
/// Recent append goes through the same mutation path.
#[derive(Clone)]
pub struct PlayerController {
    pub(crate) player: Arc<dyn PlayerPort>,
    pub(crate) playback: PlaybackState,
    pub(crate) alerts: EngineAlerts,
    pub(crate) playlists: PlaylistSync,
}

impl PlayerController {
    pub fn new(player: Arc<dyn PlayerPort>, playlists: PlaylistSync) -> Self {
        Self {
            player,
            playback: PlaybackState::new(),
            alerts: EngineAlerts::new(),
            playlists,
        }
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn alerts(&self) -> &EngineAlerts {
        &self.alerts
    }
}
