//! Tunebridge - client controller core for a local music player
//!
//! This crate sits between a UI shell and two external collaborators reached
//! over an asynchronous boundary: a playback engine (commands out, status /
//! progress / error events in) and a library store (tracks, playlists, local
//! folders). It owns no rendering and no persistence; it turns user intent
//! into boundary commands and reconciles the pushed-back events into one
//! playback snapshot the UI can consume, while keeping the remote-backed
//! collections cached locally with a mutate-then-refetch consistency rule.

pub mod boundary;
pub mod controller;
pub mod logging;
pub mod model;

pub use boundary::{LibraryPort, PlayerError, PlayerPort, ProgressEvent, StatusEvent};
pub use controller::{EventBindings, FolderSync, PlayerController, PlaylistSync, Subscription, TrackSync};
pub use model::{
    Alert, CacheSnapshot, CollectionCache, EngineAlerts, LocalFolder, NowPlaying, PlaybackSnapshot,
    PlaybackState, PlayerStatus, Playlist, Track, FAVORITES_PLAYLIST, RECENT_PLAYLIST,
};
