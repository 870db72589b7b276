//! Remote collection synchronizers for tracks, playlists, and folders.
//!
//! All three follow the same consistency rule: a mutation never splices the
//! cached items itself; on success it refetches from the store before
//! `loading` drops, so `items` never diverges from the store's notion of
//! truth (the store may apply side effects the client cannot predict).
//! Fetches report failure only through the cache's `error` field; mutation
//! helpers also re-raise so a caller can show transient feedback.

use std::sync::Arc;

use anyhow::Result;

use crate::boundary::LibraryPort;
use crate::model::{CacheSnapshot, CollectionCache, LocalFolder, Playlist, Track};

/// Cache of all known tracks, optionally narrowed by title.
#[derive(Clone)]
pub struct TrackSync {
    store: Arc<dyn LibraryPort>,
    cache: CollectionCache<Track>,
}

impl TrackSync {
    pub fn new(store: Arc<dyn LibraryPort>) -> Self {
        Self {
            store,
            cache: CollectionCache::new(),
        }
    }

    pub async fn snapshot(&self) -> CacheSnapshot<Track> {
        self.cache.snapshot().await
    }

    pub async fn items(&self) -> Vec<Track> {
        self.cache.items().await
    }

    pub async fn fetch(&self, title_filter: Option<&str>) {
        self.cache.begin().await;
        match self.store.list_tracks(title_filter).await {
            Ok(tracks) => {
                tracing::debug!(count = tracks.len(), "track list fetched");
                self.cache.replace(tracks).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "track fetch failed");
                self.cache.fail(e.to_string()).await;
            }
        }
        self.cache.end().await;
    }
}

/// Cache of the playlist list plus a second, isolated cache for the tracks
/// of the playlist currently opened. A playlist's track listing is never
/// merged into the main track cache.
#[derive(Clone)]
pub struct PlaylistSync {
    store: Arc<dyn LibraryPort>,
    cache: CollectionCache<Playlist>,
    current_tracks: CollectionCache<Track>,
}

impl PlaylistSync {
    pub fn new(store: Arc<dyn LibraryPort>) -> Self {
        Self {
            store,
            cache: CollectionCache::new(),
            current_tracks: CollectionCache::new(),
        }
    }

    pub async fn snapshot(&self) -> CacheSnapshot<Playlist> {
        self.cache.snapshot().await
    }

    pub async fn items(&self) -> Vec<Playlist> {
        self.cache.items().await
    }

    pub async fn current_tracks(&self) -> CacheSnapshot<Track> {
        self.current_tracks.snapshot().await
    }

    pub async fn fetch(&self) {
        self.cache.begin().await;
        let _ = self.refetch_list().await;
        self.cache.end().await;
    }

    /// Creates a playlist, then refetches the list before `loading` drops.
    /// The store may seed content on creation; the refetch picks that up.
    pub async fn create(&self, name: &str) -> Result<String> {
        self.cache.begin().await;
        let result = self.store.create_playlist(name).await;
        match &result {
            Ok(id) => {
                tracing::info!(name, id = %id, "playlist created");
                let _ = self.refetch_list().await;
            }
            Err(e) => {
                tracing::error!(name, error = %e, "playlist create failed");
                self.cache.fail(e.to_string()).await;
            }
        }
        self.cache.end().await;
        result
    }

    pub async fn delete(&self, playlist_id: &str) -> Result<()> {
        self.cache.begin().await;
        let result = self.store.delete_playlist(playlist_id).await;
        match &result {
            Ok(()) => {
                tracing::info!(playlist_id, "playlist deleted");
                let _ = self.refetch_list().await;
            }
            Err(e) => {
                tracing::error!(playlist_id, error = %e, "playlist delete failed");
                self.cache.fail(e.to_string()).await;
            }
        }
        self.cache.end().await;
        result
    }

    /// Loads one playlist's track listing into its own cache, leaving the
    /// main track cache untouched.
    pub async fn fetch_tracks(&self, playlist_id: &str) {
        self.current_tracks.begin().await;
        match self.store.list_playlist_tracks(playlist_id).await {
            Ok(tracks) => {
                tracing::debug!(playlist_id, count = tracks.len(), "playlist tracks fetched");
                self.current_tracks.replace(tracks).await;
            }
            Err(e) => {
                tracing::error!(playlist_id, error = %e, "playlist tracks fetch failed");
                self.current_tracks.fail(e.to_string()).await;
            }
        }
        self.current_tracks.end().await;
    }

    /// Adds tracks to a playlist, then refetches the playlist list. The
    /// store tolerates duplicates, so repeat appends are fine.
    pub async fn add_tracks(&self, playlist_id: &str, track_ids: &[i64]) -> Result<()> {
        self.cache.begin().await;
        let result = self.store.add_playlist_tracks(playlist_id, track_ids).await;
        match &result {
            Ok(()) => {
                tracing::debug!(playlist_id, count = track_ids.len(), "tracks added to playlist");
                let _ = self.refetch_list().await;
            }
            Err(e) => {
                tracing::error!(playlist_id, error = %e, "adding tracks to playlist failed");
                self.cache.fail(e.to_string()).await;
            }
        }
        self.cache.end().await;
        result
    }

    /// Removes tracks from a playlist, then refetches that playlist's track
    /// listing into the current-tracks cache.
    pub async fn remove_tracks(&self, playlist_id: &str, track_ids: &[i64]) -> Result<()> {
        self.current_tracks.begin().await;
        let result = self
            .store
            .remove_playlist_tracks(playlist_id, track_ids)
            .await;
        match &result {
            Ok(()) => {
                tracing::debug!(playlist_id, count = track_ids.len(), "tracks removed from playlist");
                match self.store.list_playlist_tracks(playlist_id).await {
                    Ok(tracks) => self.current_tracks.replace(tracks).await,
                    Err(e) => self.current_tracks.fail(e.to_string()).await,
                }
            }
            Err(e) => {
                tracing::error!(playlist_id, error = %e, "removing tracks from playlist failed");
                self.current_tracks.fail(e.to_string()).await;
            }
        }
        self.current_tracks.end().await;
        result
    }

    async fn refetch_list(&self) -> Result<()> {
        match self.store.list_playlists().await {
            Ok(playlists) => {
                self.cache.replace(playlists).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "playlist fetch failed");
                self.cache.fail(e.to_string()).await;
                Err(e)
            }
        }
    }
}

/// Cache of the watched local folders.
#[derive(Clone)]
pub struct FolderSync {
    store: Arc<dyn LibraryPort>,
    cache: CollectionCache<LocalFolder>,
}

impl FolderSync {
    pub fn new(store: Arc<dyn LibraryPort>) -> Self {
        Self {
            store,
            cache: CollectionCache::new(),
        }
    }

    pub async fn snapshot(&self) -> CacheSnapshot<LocalFolder> {
        self.cache.snapshot().await
    }

    pub async fn items(&self) -> Vec<LocalFolder> {
        self.cache.items().await
    }

    pub async fn fetch(&self, name_filter: Option<&str>) {
        self.cache.begin().await;
        let _ = self.refetch_list(name_filter).await;
        self.cache.end().await;
    }

    pub async fn add(&self, name: &str, path: &str) -> Result<String> {
        self.cache.begin().await;
        let result = self.store.add_folder(name, path).await;
        match &result {
            Ok(id) => {
                tracing::info!(name, path, id = %id, "folder added");
                let _ = self.refetch_list(None).await;
            }
            Err(e) => {
                tracing::error!(name, path, error = %e, "folder add failed");
                self.cache.fail(e.to_string()).await;
            }
        }
        self.cache.end().await;
        result
    }

    pub async fn delete(&self, ids: &[String]) -> Result<()> {
        self.cache.begin().await;
        let result = self.store.delete_folders(ids).await;
        match &result {
            Ok(()) => {
                tracing::info!(count = ids.len(), "folders deleted");
                let _ = self.refetch_list(None).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "folder delete failed");
                self.cache.fail(e.to_string()).await;
            }
        }
        self.cache.end().await;
        result
    }

    async fn refetch_list(&self, name_filter: Option<&str>) -> Result<()> {
        match self.store.list_folders(name_filter).await {
            Ok(folders) => {
                tracing::debug!(count = folders.len(), "folder list fetched");
                self.cache.replace(folders).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "folder fetch failed");
                self.cache.fail(e.to_string()).await;
                Err(e)
            }
        }
    }
}
