//! Core entity types shared across the controller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist treated as the automatic play-history slot.
pub const RECENT_PLAYLIST: &str = "Recent";
/// Playlist treated as the favorites slot.
pub const FAVORITES_PLAYLIST: &str = "Favorites";

/// Engine-reported playback status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Playing,
    Paused,
    #[default]
    Stopped,
}

/// A track as reported by the library store.
///
/// Title/artist/album come from file tags and may be absent; display code
/// must go through [`Track::display_title`] / [`Track::display_artist`] so
/// the fallback rule stays uniform.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: i64,
    pub path: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    #[serde(default)]
    pub duration_secs: u64,
    #[serde(default)]
    pub cover_mime: Option<String>,
    #[serde(default)]
    pub has_cover: bool,
}

impl Track {
    /// Tag title, falling back to the file name.
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => file_name_of(&self.path),
        }
    }

    /// Tag artist, falling back to "Unknown Artist".
    pub fn display_artist(&self) -> String {
        match self.artist.as_deref() {
            Some(artist) if !artist.is_empty() => artist.to_string(),
            _ => "Unknown Artist".to_string(),
        }
    }
}

/// Last path segment of an engine/store path, extension included.
pub(crate) fn file_name_of(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(path)
        .to_string()
}

/// A user playlist.
///
/// The names "Recent" and "Favorites" carry system semantics by exact,
/// case-sensitive match; there is no dedicated flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    pub fn is_reserved(&self) -> bool {
        self.name == RECENT_PLAYLIST || self.name == FAVORITES_PLAYLIST
    }
}

/// A watched local folder; `song_count` is denormalized by the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalFolder {
    pub id: String,
    pub name: String,
    pub path: String,
    #[serde(rename = "songCount")]
    pub song_count: i32,
}
