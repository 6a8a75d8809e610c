//! Todo list built on the Reflux state engine.
//!
//! The list is an append-only collection of records plus a visibility
//! filter, driven by three actions:
//!
//! - `Add` appends an incomplete record whose id is its position
//! - `Toggle` marks the record at a position completed (out of range is ignored)
//! - `SetFilter` replaces the filter label
//!
//! Each action is handled by its own reducer; the two record reducers are
//! scoped to the collection, the filter reducer sees the whole state.
//!
//! # Quick Start
//!
//! ```
//! use todo::{Filter, TodoAction, todo_store};
//!
//! let mut store = todo_store();
//! store.set_subscriber(|state: &todo::AppState| {
//!     print!("{}", todo::render::render_listing(state));
//! });
//!
//! store.dispatch(TodoAction::add("Hello"))?;
//! store.dispatch(TodoAction::add("World"))?;
//! store.dispatch(TodoAction::toggle(1))?;
//! store.dispatch(TodoAction::set_filter(Filter::Completed))?;
//!
//! assert_eq!(store.state().count(), 2);
//! assert_eq!(store.state().completed_count(), 1);
//! # Ok::<(), reflux_runtime::StoreError>(())
//! ```

pub mod config;
pub mod reducer;
pub mod render;
pub mod types;

pub use config::{ConfigError, DemoConfig, OutputFormat};
pub use reducer::{
    AddReducer, FilterReducer, ToggleReducer, todo_reducers, todo_store, todo_store_with_config,
};
pub use types::{AppState, Filter, MAX_TEXT_LEN, Record, RecordText, TodoAction};

/// The scripted demo run, in dispatch order
#[must_use]
pub fn demo_script() -> Vec<TodoAction> {
    vec![
        TodoAction::add("Hello"),
        TodoAction::add("World"),
        TodoAction::toggle(1),
        TodoAction::set_filter(Filter::Completed),
        TodoAction::add("Funny"),
    ]
}
