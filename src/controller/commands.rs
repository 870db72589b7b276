//! Playback command dispatch and the Recent-playlist side effect.
//!
//! Commands are one-way triggers: none of them writes playback status into
//! the snapshot, that arrives only through the event channel. The two
//! exceptions are the optimistic hints for a confirmed seek target and a
//! confirmed volume, which the engine does not echo back.

use crate::boundary::PlayerError;
use crate::model::{Track, RECENT_PLAYLIST};

use super::PlayerController;

impl PlayerController {
    /// Requests playback of `track` and, once the engine accepts the
    /// command, records it in the "Recent" playlist.
    pub async fn play(&self, track: &Track) -> Result<(), PlayerError> {
        tracing::debug!(path = %track.path, "engine: play");
        self.player.play(&track.path).await?;
        self.record_recent(track).await;
        Ok(())
    }

    pub async fn pause(&self) -> Result<(), PlayerError> {
        tracing::debug!("engine: pause");
        self.player.pause().await
    }

    /// Safe to call defensively; the engine treats resume-while-playing as
    /// a no-op.
    pub async fn resume(&self) -> Result<(), PlayerError> {
        tracing::debug!("engine: resume");
        self.player.resume().await
    }

    /// Releases current playback. The engine is expected to follow up with
    /// a `stopped` status event.
    pub async fn stop(&self) -> Result<(), PlayerError> {
        tracing::debug!("engine: stop");
        self.player.stop().await
    }

    /// Seeks to `seconds`, clamped to `[0, duration]` before dispatch. The
    /// gateway itself performs no range validation beyond this clamp.
    pub async fn seek(&self, seconds: f64) -> Result<(), PlayerError> {
        let duration = self.playback.snapshot().await.duration_secs;
        let clamped = if duration > 0.0 {
            seconds.clamp(0.0, duration)
        } else {
            seconds.max(0.0)
        };

        tracing::debug!(seconds = clamped, "engine: seek");
        self.player.seek(clamped).await?;
        self.playback.note_seek(clamped).await;
        Ok(())
    }

    /// Sets engine volume. The value is dispatched verbatim; keeping it in
    /// `[0, 1]` is the caller's contract.
    pub async fn set_volume(&self, volume: f64) -> Result<(), PlayerError> {
        tracing::debug!(volume, "engine: set_volume");
        self.player.set_volume(volume).await?;
        self.playback.note_volume(volume).await;
        Ok(())
    }

    /// Appends `track` to the "Recent" playlist through the playlist
    /// synchronizer. Issued on every play, repeats included; the store is
    /// duplicate-tolerant. Running without a "Recent" playlist provisioned
    /// is fine, the append is skipped.
    async fn record_recent(&self, track: &Track) {
        let recent = self
            .playlists
            .items()
            .await
            .into_iter()
            .find(|p| p.name == RECENT_PLAYLIST);

        let Some(recent) = recent else {
            tracing::debug!("no Recent playlist, skipping history append");
            return;
        };

        if let Err(e) = self.playlists.add_tracks(&recent.id, &[track.id]).await {
            tracing::warn!(error = %e, playlist_id = %recent.id, "failed to record track in Recent");
        }
    }
}
