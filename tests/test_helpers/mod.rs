//! Shared fakes for exercising the controller against scripted boundaries.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use tunebridge::{
    LibraryPort, LocalFolder, PlayerError, PlayerPort, Playlist, ProgressEvent, StatusEvent, Track,
};

/// Scripted playback engine: records every dispatched command verbatim and
/// hands out the senders for its three event channels.
pub struct FakeEngine {
    commands: Mutex<Vec<String>>,
    fail_next: AtomicBool,
    status_rx: Mutex<Option<UnboundedReceiver<StatusEvent>>>,
    progress_rx: Mutex<Option<UnboundedReceiver<ProgressEvent>>>,
    errors_rx: Mutex<Option<UnboundedReceiver<String>>>,
    pub status_tx: UnboundedSender<StatusEvent>,
    pub progress_tx: UnboundedSender<ProgressEvent>,
    pub error_tx: UnboundedSender<String>,
}

impl FakeEngine {
    pub fn new() -> Arc<Self> {
        let (status_tx, status_rx) = unbounded_channel();
        let (progress_tx, progress_rx) = unbounded_channel();
        let (error_tx, errors_rx) = unbounded_channel();
        Arc::new(Self {
            commands: Mutex::new(Vec::new()),
            fail_next: AtomicBool::new(false),
            status_rx: Mutex::new(Some(status_rx)),
            progress_rx: Mutex::new(Some(progress_rx)),
            errors_rx: Mutex::new(Some(errors_rx)),
            status_tx,
            progress_tx,
            error_tx,
        })
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    /// Makes the next dispatched command fail with `EngineUnavailable`.
    pub fn fail_next_command(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn dispatch(&self, command: String) -> Result<(), PlayerError> {
        self.commands.lock().unwrap().push(command);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(PlayerError::EngineUnavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PlayerPort for FakeEngine {
    async fn play(&self, path: &str) -> Result<(), PlayerError> {
        self.dispatch(format!("play {path}"))
    }

    async fn pause(&self) -> Result<(), PlayerError> {
        self.dispatch("pause".to_string())
    }

    async fn resume(&self) -> Result<(), PlayerError> {
        self.dispatch("resume".to_string())
    }

    async fn stop(&self) -> Result<(), PlayerError> {
        self.dispatch("stop".to_string())
    }

    async fn seek(&self, seconds: f64) -> Result<(), PlayerError> {
        self.dispatch(format!("seek {seconds}"))
    }

    async fn set_volume(&self, volume: f64) -> Result<(), PlayerError> {
        self.dispatch(format!("set_volume {volume}"))
    }

    fn subscribe_status(&self) -> UnboundedReceiver<StatusEvent> {
        self.status_rx
            .lock()
            .unwrap()
            .take()
            .expect("status channel already subscribed")
    }

    fn subscribe_progress(&self) -> UnboundedReceiver<ProgressEvent> {
        self.progress_rx
            .lock()
            .unwrap()
            .take()
            .expect("progress channel already subscribed")
    }

    fn subscribe_errors(&self) -> UnboundedReceiver<String> {
        self.errors_rx
            .lock()
            .unwrap()
            .take()
            .expect("error channel already subscribed")
    }
}

/// In-memory library store: records every call and serves scripted rows.
#[derive(Default)]
pub struct FakeLibrary {
    calls: Mutex<Vec<String>>,
    fail_next: AtomicBool,
    pub tracks: Mutex<Vec<Track>>,
    pub playlists: Mutex<Vec<Playlist>>,
    pub folders: Mutex<Vec<LocalFolder>>,
    pub playlist_tracks: Mutex<HashMap<String, Vec<Track>>>,
}

impl FakeLibrary {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Makes the next store operation fail.
    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(anyhow!("store offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LibraryPort for FakeLibrary {
    async fn list_tracks(&self, title_filter: Option<&str>) -> Result<Vec<Track>> {
        self.record(match title_filter {
            Some(filter) => format!("list_tracks {filter}"),
            None => "list_tracks".to_string(),
        })?;
        let tracks = self.tracks.lock().unwrap().clone();
        Ok(match title_filter {
            Some(filter) => tracks
                .into_iter()
                .filter(|t| t.title.as_deref().is_some_and(|title| title.contains(filter)))
                .collect(),
            None => tracks,
        })
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>> {
        self.record("list_playlists".to_string())?;
        Ok(self.playlists.lock().unwrap().clone())
    }

    async fn create_playlist(&self, name: &str) -> Result<String> {
        self.record(format!("create_playlist {name}"))?;
        let mut playlists = self.playlists.lock().unwrap();
        let id = format!("p{}", playlists.len() + 1);
        playlists.push(playlist(&id, name));
        Ok(id)
    }

    async fn delete_playlist(&self, playlist_id: &str) -> Result<()> {
        self.record(format!("delete_playlist {playlist_id}"))?;
        self.playlists.lock().unwrap().retain(|p| p.id != playlist_id);
        Ok(())
    }

    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>> {
        self.record(format!("list_playlist_tracks {playlist_id}"))?;
        Ok(self
            .playlist_tracks
            .lock()
            .unwrap()
            .get(playlist_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_playlist_tracks(&self, playlist_id: &str, track_ids: &[i64]) -> Result<()> {
        self.record(format!("add_playlist_tracks {playlist_id} {track_ids:?}"))
    }

    async fn remove_playlist_tracks(&self, playlist_id: &str, track_ids: &[i64]) -> Result<()> {
        self.record(format!(
            "remove_playlist_tracks {playlist_id} {track_ids:?}"
        ))?;
        if let Some(tracks) = self.playlist_tracks.lock().unwrap().get_mut(playlist_id) {
            tracks.retain(|t| !track_ids.contains(&t.id));
        }
        Ok(())
    }

    async fn list_folders(&self, name_filter: Option<&str>) -> Result<Vec<LocalFolder>> {
        self.record(match name_filter {
            Some(filter) => format!("list_folders {filter}"),
            None => "list_folders".to_string(),
        })?;
        Ok(self.folders.lock().unwrap().clone())
    }

    async fn add_folder(&self, name: &str, path: &str) -> Result<String> {
        self.record(format!("add_folder {name} {path}"))?;
        let mut folders = self.folders.lock().unwrap();
        let id = format!("f{}", folders.len() + 1);
        folders.push(folder(&id, name, path));
        Ok(id)
    }

    async fn delete_folders(&self, ids: &[String]) -> Result<()> {
        self.record(format!("delete_folders {ids:?}"))?;
        self.folders.lock().unwrap().retain(|f| !ids.contains(&f.id));
        Ok(())
    }
}

pub fn track(id: i64, path: &str) -> Track {
    Track {
        id,
        path: path.to_string(),
        title: None,
        artist: None,
        album: None,
        duration_secs: 0,
        cover_mime: None,
        has_cover: false,
    }
}

pub fn playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        created_at: chrono::Utc::now(),
    }
}

pub fn folder(id: &str, name: &str, path: &str) -> LocalFolder {
    LocalFolder {
        id: id.to_string(),
        name: name.to_string(),
        path: path.to_string(),
        song_count: 0,
    }
}

/// Lets spawned listener tasks drain their channels.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(25)).await;
}
