//! Boundary traits for the backend playback engine and data store.
//!
//! Everything beyond these two traits is another process's problem: the
//! engine decodes and mixes, the store scans and persists. The controller
//! only ever sees async commands that settle with ok/error and event
//! channels that push payloads at unspecified times, in no guaranteed order
//! across classes.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::model::{LocalFolder, PlayerStatus, Playlist, Track};

/// Failure of a single playback command, surfaced to the immediate caller.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("playback engine is not available")]
    EngineUnavailable,
    #[error("invalid media path: {0}")]
    InvalidPath(String),
    #[error("engine error: {0}")]
    Engine(String),
}

/// Status change pushed by the engine.
///
/// `path` and `duration` are optional on the wire; a bare status change
/// (e.g. pause/resume) omits both.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusEvent {
    pub status: PlayerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Position tick pushed by the engine, several times per second while playing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub position: f64,
    pub duration: f64,
}

/// Command and event surface of the playback engine.
///
/// Commands settle with ok/error but never return playback state; state
/// arrives exclusively through the event channels. Each `subscribe_*` call
/// hands out a fresh receiver for that event class.
#[async_trait]
pub trait PlayerPort: Send + Sync {
    async fn play(&self, path: &str) -> Result<(), PlayerError>;
    async fn pause(&self) -> Result<(), PlayerError>;
    async fn resume(&self) -> Result<(), PlayerError>;
    async fn stop(&self) -> Result<(), PlayerError>;
    async fn seek(&self, seconds: f64) -> Result<(), PlayerError>;
    async fn set_volume(&self, volume: f64) -> Result<(), PlayerError>;

    fn subscribe_status(&self) -> UnboundedReceiver<StatusEvent>;
    fn subscribe_progress(&self) -> UnboundedReceiver<ProgressEvent>;
    fn subscribe_errors(&self) -> UnboundedReceiver<String>;
}

/// Collection operations of the backend library store.
#[async_trait]
pub trait LibraryPort: Send + Sync {
    async fn list_tracks(&self, title_filter: Option<&str>) -> Result<Vec<Track>>;

    async fn list_playlists(&self) -> Result<Vec<Playlist>>;
    async fn create_playlist(&self, name: &str) -> Result<String>;
    async fn delete_playlist(&self, playlist_id: &str) -> Result<()>;
    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>>;
    async fn add_playlist_tracks(&self, playlist_id: &str, track_ids: &[i64]) -> Result<()>;
    async fn remove_playlist_tracks(&self, playlist_id: &str, track_ids: &[i64]) -> Result<()>;

    async fn list_folders(&self, name_filter: Option<&str>) -> Result<Vec<LocalFolder>>;
    async fn add_folder(&self, name: &str, path: &str) -> Result<String>;
    async fn delete_folders(&self, ids: &[String]) -> Result<()>;
}
