//! Subscriber probes.
//!
//! A [`SubscriberProbe`] hands out subscriber closures that record a
//! projection of the state on every notification. The probe keeps a shared
//! handle to the recordings, so tests can inspect them while the store still
//! owns the closure.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Panics only on a poisoned lock

use std::sync::{Arc, RwLock};

/// Records what a subscriber was shown
///
/// # Example
///
/// ```
/// use reflux_testing::SubscriberProbe;
///
/// let probe = SubscriberProbe::new();
/// let mut subscriber = probe.recorder(|state: &Vec<u8>| state.len());
///
/// subscriber(&vec![1, 2, 3]);
/// subscriber(&vec![]);
///
/// assert_eq!(probe.count(), 2);
/// assert_eq!(probe.snapshots(), vec![3, 0]);
/// ```
#[derive(Debug)]
pub struct SubscriberProbe<T> {
    snapshots: Arc<RwLock<Vec<T>>>,
}

impl<T> SubscriberProbe<T>
where
    T: Send + Sync + 'static,
{
    /// Create a probe with no recordings
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a subscriber that records `project(state)` on each call
    pub fn recorder<S, F>(&self, project: F) -> impl FnMut(&S) + Send + 'static + use<T, S, F>
    where
        S: 'static,
        F: Fn(&S) -> T + Send + 'static,
    {
        let snapshots = Arc::clone(&self.snapshots);
        move |state: &S| {
            snapshots.write().unwrap().push(project(state));
        }
    }

    /// Number of notifications recorded so far
    #[must_use]
    pub fn count(&self) -> usize {
        self.snapshots.read().unwrap().len()
    }

    /// All recorded projections, oldest first
    #[must_use]
    pub fn snapshots(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.snapshots.read().unwrap().clone()
    }

    /// The most recent projection
    #[must_use]
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.snapshots.read().unwrap().last().cloned()
    }
}

impl SubscriberProbe<()> {
    /// Build a subscriber that only counts notifications
    pub fn counter<S: 'static>(&self) -> impl FnMut(&S) + Send + 'static + use<S> {
        self.recorder(|_: &S| ())
    }
}

impl<T> Clone for SubscriberProbe<T> {
    fn clone(&self) -> Self {
        Self {
            snapshots: Arc::clone(&self.snapshots),
        }
    }
}

impl<T> Default for SubscriberProbe<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
