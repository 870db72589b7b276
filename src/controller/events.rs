//! Engine event listeners feeding the playback reconciler.

use super::subscriptions::{spawn_listener, Subscription};
use super::PlayerController;

/// Guards for the three engine event listeners.
///
/// Dropping the bundle tears all three down; listeners are scoped to the
/// consumer that spawned them.
pub struct EventBindings {
    pub status: Subscription,
    pub progress: Subscription,
    pub errors: Subscription,
}

impl EventBindings {
    /// Tears down all three listeners. Safe to call more than once.
    pub fn cancel(&mut self) {
        self.status.cancel();
        self.progress.cancel();
        self.errors.cancel();
    }
}

impl PlayerController {
    /// Spawns one listener per engine event class and wires them into the
    /// playback state and the alert slot.
    ///
    /// Status and progress arrive on independent channels; each listener
    /// applies its events last-write-wins per field. Error events never
    /// touch the snapshot - if the engine wants a status change after an
    /// error it must also emit the corresponding status event.
    pub fn spawn_event_listeners(&self) -> EventBindings {
        tracing::info!("starting engine event listeners");

        let playback = self.playback.clone();
        let status = spawn_listener(self.player.subscribe_status(), move |event| {
            let playback = playback.clone();
            async move {
                tracing::debug!(status = ?event.status, path = ?event.path, "engine status event");
                playback.apply_status(event).await;
            }
        });

        let playback = self.playback.clone();
        let progress = spawn_listener(self.player.subscribe_progress(), move |event| {
            let playback = playback.clone();
            async move {
                tracing::trace!(position = event.position, "engine progress event");
                playback.apply_progress(event).await;
            }
        });

        let alerts = self.alerts.clone();
        let errors = spawn_listener(self.player.subscribe_errors(), move |message: String| {
            let alerts = alerts.clone();
            async move {
                tracing::error!(%message, "engine error event");
                alerts.raise(message).await;
            }
        });

        EventBindings {
            status,
            progress,
            errors,
        }
    }
}
