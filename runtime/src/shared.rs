//! Mutex-serialized store handle.
//!
//! [`Store`] does no locking: `dispatch(&mut self)` relies on the caller for
//! exclusive access. [`SharedStore`] provides that exclusivity for hosts that
//! run several tasks or threads. Every operation takes one async mutex, so
//! dispatches are serialized and each one still runs all reducers and the
//! subscriber before the next begins.
//!
//! # Example
//!
//! ```ignore
//! let shared = SharedStore::new(Store::new(AppState::default(), todo_reducers()));
//!
//! let handle = shared.clone();
//! tokio::spawn(async move { handle.dispatch(TodoAction::add("from a task")).await });
//!
//! let count = shared.state(|s| s.items.len()).await;
//! ```

use crate::{Store, StoreError};
use reflux_core::Action;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable handle that serializes access to a [`Store`]
pub struct SharedStore<S, A> {
    inner: Arc<Mutex<Store<S, A>>>,
}

impl<S, A> SharedStore<S, A>
where
    A: Action,
{
    /// Wrap a store for shared use
    #[must_use]
    pub fn new(store: Store<S, A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Dispatch an action once the store is free
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Reducer`] if a reducer fails.
    #[tracing::instrument(skip(self, action), name = "shared_store_dispatch")]
    pub async fn dispatch(&self, action: A) -> Result<(), StoreError> {
        let mut store = self.inner.lock().await;
        store.dispatch(action)
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let item_count = shared.state(|s| s.items.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let store = self.inner.lock().await;
        f(store.state())
    }

    /// Register the subscriber, replacing any previous one
    pub async fn set_subscriber<F>(&self, subscriber: F)
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.inner.lock().await.set_subscriber(subscriber);
    }

    /// Number of dispatches that completed successfully
    pub async fn dispatch_count(&self) -> u64 {
        self.inner.lock().await.dispatch_count()
    }
}

impl<S, A> Clone for SharedStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> std::fmt::Debug for SharedStore<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}
