//! # Reflux Core
//!
//! Core traits and types for the Reflux state engine.
//!
//! This crate provides the fundamental abstractions for unidirectional state
//! management: owned state is changed only by dispatching actions through an
//! ordered chain of reducers.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain data (often built around a [`Collection`])
//! - **Action**: A closed, tagged set of intents
//! - **Reducer**: Pure function `(&mut State, &Action) → Result<(), ReduceError>`
//! - **Composition**: Ordered reducer chains and scoped sub-state reducers
//!
//! ## Example
//!
//! ```
//! use reflux_core::{Action, Collection, ReduceError, Reducer};
//!
//! #[derive(Clone, Debug)]
//! enum NoteAction {
//!     Push(String),
//!     Clear,
//! }
//!
//! impl Action for NoteAction {
//!     fn name(&self) -> &'static str {
//!         match self {
//!             NoteAction::Push(_) => "Push",
//!             NoteAction::Clear => "Clear",
//!         }
//!     }
//! }
//!
//! struct PushReducer;
//!
//! impl Reducer for PushReducer {
//!     type State = Collection<String>;
//!     type Action = NoteAction;
//!
//!     fn reduce(&self, state: &mut Self::State, action: &Self::Action) -> Result<(), ReduceError> {
//!         match action {
//!             NoteAction::Push(note) => state.append(note.clone()),
//!             NoteAction::Clear => Ok(()),
//!         }
//!     }
//! }
//!
//! let mut notes = Collection::new();
//! PushReducer.reduce(&mut notes, &NoteAction::Push("hello".into()))?;
//! assert_eq!(notes.len(), 1);
//! # Ok::<(), ReduceError>(())
//! ```

/// Growable owned sequence with an explicit growth policy
pub mod collection;

/// Reducer composition utilities (ordered chains, scoped reducers)
pub mod composition;

pub use action::Action;
pub use collection::Collection;
pub use error::ReduceError;
pub use reducer::Reducer;

/// Action module - Tagged intents dispatched to reducers
///
/// Actions are closed enums. Every reducer sees every action and selects the
/// tags it handles with an exhaustive `match`.
pub mod action {
    use std::fmt::Debug;

    /// Marker trait for values that can be dispatched to a store
    ///
    /// Use `#[derive(Action)]` from `reflux-macros` to implement it for an enum.
    pub trait Action: Clone + Debug {
        /// Stable name of the action tag, used for logging
        fn name(&self) -> &'static str;
    }
}

/// Error module - Failures a reducer may report
pub mod error {
    use thiserror::Error;

    /// Errors a reducer can return
    ///
    /// Only resource exhaustion is an error. Bad inputs (unknown ids,
    /// oversized payloads) are handled by policy inside reducers and
    /// constructors and never reach this type.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ReduceError {
        /// The collection could not grow to the requested capacity
        ///
        /// Fatal: the store does not attempt degraded operation.
        #[error("Allocation failed while growing collection to {requested} slots")]
        AllocationFailure {
            /// Capacity that could not be reserved
            requested: usize,
        },
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action) → State` mutated in place.
pub mod reducer {
    use super::error::ReduceError;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ToggleReducer {
    ///     type State = Collection<Record>;
    ///     type Action = TodoAction;
    ///
    ///     fn reduce(&self, state: &mut Self::State, action: &TodoAction) -> Result<(), ReduceError> {
    ///         match action {
    ///             TodoAction::Toggle { id } => { /* mark complete */ }
    ///             TodoAction::Add { .. } | TodoAction::SetFilter { .. } => {}
    ///         }
    ///         Ok(())
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into in-place state changes
        ///
        /// Actions whose tag the reducer does not handle must leave `state`
        /// untouched and return `Ok(())`. The action is borrowed for the
        /// duration of the call only.
        ///
        /// # Errors
        ///
        /// Returns [`ReduceError::AllocationFailure`] when owned storage
        /// cannot grow.
        fn reduce(&self, state: &mut Self::State, action: &Self::Action)
        -> Result<(), ReduceError>;
    }

    impl<R> Reducer for Box<R>
    where
        R: Reducer + ?Sized,
    {
        type State = R::State;
        type Action = R::Action;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: &Self::Action,
        ) -> Result<(), ReduceError> {
            (**self).reduce(state, action)
        }
    }
}
