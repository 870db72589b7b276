//! Generic cache for a remote-backed collection.
//!
//! One instance per collection (tracks, playlists, folders). Items are
//! replaced wholesale on every successful fetch, never spliced element-wise.
//! `loading` spans the whole operation that a synchronizer brackets around
//! it, including a mutate-then-refetch compound; callers must not treat
//! `items` as final until `loading` is false again.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Point-in-time view of a cached collection.
#[derive(Clone, Debug)]
pub struct CacheSnapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct CollectionCache<T> {
    inner: Arc<RwLock<CacheState<T>>>,
}

struct CacheState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheState {
                items: Vec::new(),
                loading: false,
                error: None,
            })),
        }
    }
}

impl<T: Clone> CollectionCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> CacheSnapshot<T> {
        let state = self.inner.read().await;
        CacheSnapshot {
            items: state.items.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    pub async fn items(&self) -> Vec<T> {
        self.inner.read().await.items.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.inner.read().await.error.clone()
    }

    /// Start of an operation: loading on, previous error cleared.
    pub(crate) async fn begin(&self) {
        let mut state = self.inner.write().await;
        state.loading = true;
        state.error = None;
    }

    /// Wholesale replacement from a successful fetch.
    pub(crate) async fn replace(&self, items: Vec<T>) {
        self.inner.write().await.items = items;
    }

    /// Records a failure; items keep their previous value.
    pub(crate) async fn fail(&self, message: String) {
        self.inner.write().await.error = Some(message);
    }

    /// End of an operation, whatever its outcome.
    pub(crate) async fn end(&self) {
        self.inner.write().await.loading = false;
    }
}
