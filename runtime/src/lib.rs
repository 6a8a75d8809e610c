//! # Reflux Runtime
//!
//! Runtime implementation for the Reflux state engine.
//!
//! This crate provides the Store that owns application state, runs every
//! dispatched action through an ordered reducer chain, and notifies an
//! optional subscriber afterwards.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state, the reducer chain and the subscriber slot
//! - **`SharedStore`**: Mutex-serialized handle for multi-threaded hosts
//! - **Metrics**: Names and descriptions of the counters the Store records
//!
//! ## Example
//!
//! ```ignore
//! use reflux_runtime::Store;
//!
//! let mut store = Store::new(AppState::default(), todo_reducers());
//! store.set_subscriber(|state: &AppState| println!("{} items", state.items.len()));
//!
//! store.dispatch(TodoAction::add("Hello"))?;
//!
//! let count = store.state().items.len();
//! ```

use reflux_core::{Action, Reducer};

/// Prometheus-style metric names recorded by the Store
pub mod metrics;

/// Mutex-serialized store handle for multi-threaded hosts
pub mod shared;

pub use error::StoreError;
pub use shared::SharedStore;
pub use store::{Store, Subscriber};

/// Error types for the Store runtime
pub mod error {
    use reflux_core::ReduceError;
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A reducer in the chain failed
        ///
        /// The dispatch stopped at the failing reducer. Reducers that ran
        /// before it keep their changes and the subscriber was not called.
        #[error("Reducer failed: {0}")]
        Reducer(#[from] ReduceError),
    }
}

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use reflux_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_name("todos")
///     .with_metrics(false);
///
/// assert_eq!(config.name, "todos");
/// assert!(!config.record_metrics);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name attached to dispatch spans and metric labels
    pub name: String,
    /// Whether dispatches are recorded through the `metrics` facade
    pub record_metrics: bool,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(name: impl Into<String>, record_metrics: bool) -> Self {
        Self {
            name: name.into(),
            record_metrics,
        }
    }

    /// Set the store name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable metrics recording
    #[must_use]
    pub const fn with_metrics(mut self, record_metrics: bool) -> Self {
        self.record_metrics = record_metrics;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "store".to_string(),
            record_metrics: true,
        }
    }
}

/// Store module - owned state plus the dispatch pipeline
pub mod store {
    use super::{Action, Reducer, StoreConfig, StoreError, metrics};
    use reflux_core::composition::{BoxedReducer, CombinedReducer, combine_reducers};
    use std::time::Instant;

    /// Post-dispatch observer with read access to the state
    ///
    /// The `&S` borrow ends when the call returns, so a subscriber cannot keep
    /// a view of state that a later dispatch might reallocate.
    pub type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

    /// The Store - owner of state and coordinator of reducers
    ///
    /// The Store manages:
    /// 1. State (exclusively owned)
    /// 2. Reducers (an ordered chain fixed at construction)
    /// 3. Subscriber (at most one, optional)
    ///
    /// # Concurrency
    ///
    /// `dispatch` takes `&mut self`: a dispatch runs to completion (all
    /// reducers, then the subscriber) before another can start, and the
    /// subscriber cannot dispatch back into the store. The Store does no
    /// locking of its own. Hosts with several threads must serialize
    /// dispatches externally, for example through [`SharedStore`].
    ///
    /// [`SharedStore`]: crate::SharedStore
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    pub struct Store<S, A> {
        state: S,
        reducer: CombinedReducer<S, A>,
        subscriber: Option<Subscriber<S>>,
        config: StoreConfig,
        dispatch_count: u64,
    }

    impl<S, A> Store<S, A>
    where
        A: Action,
    {
        /// Create a new store with initial state and an ordered reducer list
        ///
        /// Reducers run in the order given here for every dispatched action.
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducers`: The reducer chain, in application order
        #[must_use]
        pub fn new(initial_state: S, reducers: Vec<BoxedReducer<S, A>>) -> Self {
            Self::with_config(initial_state, reducers, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducers: Vec<BoxedReducer<S, A>>,
            config: StoreConfig,
        ) -> Self {
            tracing::debug!(
                store = %config.name,
                reducers = reducers.len(),
                "Store created"
            );

            Self {
                state: initial_state,
                reducer: combine_reducers(reducers),
                subscriber: None,
                config,
                dispatch_count: 0,
            }
        }

        /// Register the subscriber, replacing any previous one
        pub fn set_subscriber<F>(&mut self, subscriber: F)
        where
            F: FnMut(&S) + Send + 'static,
        {
            if self.subscriber.is_some() {
                tracing::debug!(store = %self.config.name, "Replacing subscriber");
            }
            self.subscriber = Some(Box::new(subscriber));
        }

        /// Remove the subscriber, if any
        pub fn clear_subscriber(&mut self) {
            self.subscriber = None;
        }

        /// Returns true if a subscriber is registered
        #[must_use]
        pub const fn has_subscriber(&self) -> bool {
            self.subscriber.is_some()
        }

        /// Dispatch an action through the reducer chain
        ///
        /// This method:
        /// 1. Offers the action to every reducer in registration order
        /// 2. Calls the subscriber (if any) with the updated state
        ///
        /// The mutation is observed through [`Store::state`] or the
        /// subscriber; nothing is returned on success.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Reducer`] if a reducer fails. The chain stops
        /// at that reducer, earlier reducers keep their changes, and the
        /// subscriber is not called.
        pub fn dispatch(&mut self, action: A) -> Result<(), StoreError> {
            let span = tracing::debug_span!(
                "store_dispatch",
                store = %self.config.name,
                action = action.name()
            );
            let _enter = span.enter();

            tracing::debug!("Processing action");

            let start = Instant::now();
            let result = self.reducer.reduce(&mut self.state, &action);
            let duration = start.elapsed();

            if self.config.record_metrics {
                metrics::counter!(metrics::DISPATCH_TOTAL, "store" => self.config.name.clone())
                    .increment(1);
                metrics::histogram!(
                    metrics::REDUCE_DURATION_SECONDS,
                    "store" => self.config.name.clone()
                )
                .record(duration.as_secs_f64());
            }

            if let Err(error) = result {
                tracing::error!(%error, "Reducer chain failed");
                if self.config.record_metrics {
                    metrics::counter!(
                        metrics::DISPATCH_FAILED_TOTAL,
                        "store" => self.config.name.clone()
                    )
                    .increment(1);
                }
                return Err(error.into());
            }

            self.dispatch_count += 1;
            tracing::trace!(?duration, "Reducers completed");

            if let Some(subscriber) = self.subscriber.as_mut() {
                subscriber(&self.state);
                if self.config.record_metrics {
                    metrics::counter!(
                        metrics::SUBSCRIBER_NOTIFIED_TOTAL,
                        "store" => self.config.name.clone()
                    )
                    .increment(1);
                }
                tracing::trace!("Subscriber notified");
            }

            tracing::debug!("Action processing completed");
            Ok(())
        }
    }

    impl<S, A> Store<S, A> {
        /// Read access to the current state
        ///
        /// ```ignore
        /// let item_count = store.state().items.len();
        /// ```
        #[must_use]
        pub const fn state(&self) -> &S {
            &self.state
        }

        /// Number of reducers in the chain
        #[must_use]
        pub fn reducer_count(&self) -> usize {
            self.reducer.len()
        }

        /// Number of dispatches that completed successfully
        #[must_use]
        pub const fn dispatch_count(&self) -> u64 {
            self.dispatch_count
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Consume the store and return its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }

    impl<S, A> std::fmt::Debug for Store<S, A>
    where
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("name", &self.config.name)
                .field("state", &self.state)
                .field("reducers", &self.reducer.len())
                .field("has_subscriber", &self.subscriber.is_some())
                .field("dispatch_count", &self.dispatch_count)
                .finish()
        }
    }
}
