//! Cancellation guards for engine event listeners.

use std::future::Future;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

/// Guard for one spawned event listener.
///
/// `cancel` is idempotent and remains a no-op after the underlying channel
/// has already closed; dropping the guard cancels too, so a listener never
/// outlives the component that registered it.
pub struct Subscription {
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawns a task draining `receiver` into `handler`.
///
/// Registration itself never blocks the caller; the task ends on its own
/// when the sender side closes.
pub fn spawn_listener<T, F, Fut>(mut receiver: UnboundedReceiver<T>, handler: F) -> Subscription
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let handle = tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            handler(event).await;
        }
    });

    Subscription {
        handle: Some(handle),
    }
}
