//! Model module - application state and data types
//!
//! This module contains the data structures and state owned by the
//! controller core. It is organized into submodules by responsibility:
//!
//! - `types`: entity types (tracks, playlists, folders) and status enums
//! - `playback`: the playback snapshot and its reconciler
//! - `cache`: the generic remote-collection cache
//! - `alerts`: the engine runtime error slot

mod alerts;
mod cache;
mod playback;
mod types;

pub use alerts::{Alert, EngineAlerts};
pub use cache::{CacheSnapshot, CollectionCache};
pub use playback::{NowPlaying, PlaybackSnapshot, PlaybackState};
pub use types::{
    LocalFolder, PlayerStatus, Playlist, Track, FAVORITES_PLAYLIST, RECENT_PLAYLIST,
};
