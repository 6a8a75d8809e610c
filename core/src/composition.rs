//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run an ordered list of reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a part of a larger state
//!
//! # Examples
//!
//! ## Combining Reducers
//!
//! ```
//! use reflux_core::{ReduceError, Reducer};
//! use reflux_core::composition::combine_reducers;
//!
//! #[derive(Default)]
//! struct MyState {
//!     count: i32,
//!     name: String,
//! }
//!
//! enum MyAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CounterReducer;
//! struct NameReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = MyState;
//!     type Action = MyAction;
//!
//!     fn reduce(&self, state: &mut MyState, action: &MyAction) -> Result<(), ReduceError> {
//!         match action {
//!             MyAction::Increment => state.count += 1,
//!             MyAction::SetName(_) => {},
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = MyState;
//!     type Action = MyAction;
//!
//!     fn reduce(&self, state: &mut MyState, action: &MyAction) -> Result<(), ReduceError> {
//!         match action {
//!             MyAction::SetName(name) => state.name.clone_from(name),
//!             MyAction::Increment => {},
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);
//!
//! let mut state = MyState::default();
//! combined.reduce(&mut state, &MyAction::Increment)?;
//! combined.reduce(&mut state, &MyAction::SetName("Alice".into()))?;
//! assert_eq!(state.count, 1);
//! assert_eq!(state.name, "Alice");
//! # Ok::<(), ReduceError>(())
//! ```

use crate::error::ReduceError;
use crate::reducer::Reducer;

/// A boxed reducer over state `S` and action `A`
///
/// Reducers are `Send` so that a store holding them can be moved to, or
/// shared behind a mutex with, another thread.
pub type BoxedReducer<S, A> = Box<dyn Reducer<State = S, Action = A> + Send>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Every reducer sees every action, in registration order. Order is part of
/// the contract: a reducer registered later observes the state left behind by
/// the ones before it.
#[must_use]
pub fn combine_reducers<S, A>(reducers: Vec<BoxedReducer<S, A>>) -> CombinedReducer<S, A> {
    CombinedReducer { reducers }
}

/// An ordered chain of reducers run in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A> {
    reducers: Vec<BoxedReducer<S, A>>,
}

impl<S, A> CombinedReducer<S, A> {
    /// Number of reducers in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if the chain has no reducers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A> std::fmt::Debug for CombinedReducer<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl<S, A> Reducer for CombinedReducer<S, A> {
    type State = S;
    type Action = A;

    /// Runs each reducer in order.
    ///
    /// Stops at the first error. Reducers that already ran keep their
    /// changes; there is no rollback.
    fn reduce(&self, state: &mut S, action: &A) -> Result<(), ReduceError> {
        for reducer in &self.reducers {
            reducer.reduce(state, action)?;
        }
        Ok(())
    }
}

/// Scopes a reducer to operate on a part of a larger state.
///
/// The `lens` borrows the sub-state mutably out of the parent, so the child
/// reducer works in place with no copy of the sub-state.
///
/// # Examples
///
/// ```
/// use reflux_core::{ReduceError, Reducer};
/// use reflux_core::composition::scope_reducer;
///
/// #[derive(Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = i32;
///
///     fn reduce(&self, state: &mut CounterState, delta: &i32) -> Result<(), ReduceError> {
///         state.count += delta;
///         Ok(())
///     }
/// }
///
/// #[derive(Default)]
/// struct AppState {
///     counter: CounterState,
///     other_data: String,
/// }
///
/// fn counter(app: &mut AppState) -> &mut CounterState {
///     &mut app.counter
/// }
///
/// let scoped = scope_reducer(CounterReducer, counter);
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, &3)?;
/// assert_eq!(state.counter.count, 3);
/// # Ok::<(), ReduceError>(())
/// ```
pub const fn scope_reducer<S, R>(reducer: R, lens: fn(&mut S) -> &mut R::State) -> ScopedReducer<S, R>
where
    R: Reducer,
{
    ScopedReducer { reducer, lens }
}

/// A scoped reducer that operates on a part of the state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, R>
where
    R: Reducer,
{
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
}

impl<S, R> Reducer for ScopedReducer<S, R>
where
    R: Reducer,
{
    type State = S;
    type Action = R::Action;

    fn reduce(&self, state: &mut S, action: &Self::Action) -> Result<(), ReduceError> {
        self.reducer.reduce((self.lens)(state), action)
    }
}
