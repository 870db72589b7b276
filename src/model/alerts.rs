//! Engine runtime error slot, surfaced to the embedding UI.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// One engine-reported runtime error, kept verbatim.
#[derive(Clone, Debug)]
pub struct Alert {
    pub message: String,
    pub raised_at: Instant,
}

/// Holds the most recent engine error until the consumer takes it.
///
/// Engine errors never change the playback snapshot; they land here and the
/// UI decides how to present them. A new error overwrites an unconsumed one.
#[derive(Clone, Default)]
pub struct EngineAlerts {
    inner: Arc<RwLock<Option<Alert>>>,
}

impl EngineAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn raise(&self, message: String) {
        *self.inner.write().await = Some(Alert {
            message,
            raised_at: Instant::now(),
        });
    }

    pub async fn current(&self) -> Option<Alert> {
        self.inner.read().await.clone()
    }

    pub async fn take(&self) -> Option<Alert> {
        self.inner.write().await.take()
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}
