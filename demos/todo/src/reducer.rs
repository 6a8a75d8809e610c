//! Reducers for the todo list.
//!
//! Three reducers, each handling one action and ignoring the rest:
//!
//! - [`AddReducer`] appends a record (scoped to the record collection)
//! - [`ToggleReducer`] completes a record by position (scoped to the record collection)
//! - [`FilterReducer`] replaces the visibility filter (whole state)
//!
//! [`todo_reducers`] wires them in that order.

use crate::types::{AppState, Record, TodoAction};
use reflux_core::composition::{BoxedReducer, scope_reducer};
use reflux_core::{Collection, ReduceError, Reducer};
use reflux_runtime::{Store, StoreConfig};

/// Appends a new, incomplete record on `Add`
///
/// The new record's id is the collection length before the append.
#[derive(Clone, Copy, Debug, Default)]
pub struct AddReducer;

impl Reducer for AddReducer {
    type State = Collection<Record>;
    type Action = TodoAction;

    fn reduce(&self, items: &mut Collection<Record>, action: &TodoAction) -> Result<(), ReduceError> {
        match action {
            TodoAction::Add { text } => {
                let id = items.len();
                items.append(Record::new(id, text.clone()))?;
                tracing::debug!(id, "Record added");
            },
            TodoAction::Toggle { .. } | TodoAction::SetFilter { .. } => {},
        }
        Ok(())
    }
}

/// Marks the record at position `id` completed on `Toggle`
///
/// An id past the end is ignored. Completing an already completed record
/// changes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToggleReducer;

impl Reducer for ToggleReducer {
    type State = Collection<Record>;
    type Action = TodoAction;

    fn reduce(&self, items: &mut Collection<Record>, action: &TodoAction) -> Result<(), ReduceError> {
        match action {
            TodoAction::Toggle { id } => {
                let len = items.len();
                match items.get_mut(*id) {
                    Some(record) => record.complete(),
                    None => tracing::debug!(id, len, "Toggle out of range, ignored"),
                }
            },
            TodoAction::Add { .. } | TodoAction::SetFilter { .. } => {},
        }
        Ok(())
    }
}

/// Replaces the visibility filter on `SetFilter`
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = AppState;
    type Action = TodoAction;

    fn reduce(&self, state: &mut AppState, action: &TodoAction) -> Result<(), ReduceError> {
        match action {
            TodoAction::SetFilter { filter } => state.filter = *filter,
            TodoAction::Add { .. } | TodoAction::Toggle { .. } => {},
        }
        Ok(())
    }
}

/// The todo reducer chain: add, toggle, filter
#[must_use]
pub fn todo_reducers() -> Vec<BoxedReducer<AppState, TodoAction>> {
    vec![
        Box::new(scope_reducer(AddReducer, AppState::items_mut)),
        Box::new(scope_reducer(ToggleReducer, AppState::items_mut)),
        Box::new(FilterReducer),
    ]
}

/// An empty todo store with the default configuration
#[must_use]
pub fn todo_store() -> Store<AppState, TodoAction> {
    todo_store_with_config(StoreConfig::default().with_name("todo"))
}

/// An empty todo store with a custom configuration
#[must_use]
pub fn todo_store_with_config(config: StoreConfig) -> Store<AppState, TodoAction> {
    Store::with_config(AppState::new(), todo_reducers(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Filter, RecordText};
    use reflux_testing::{ReducerTest, assertions};

    fn collection_of(texts: &[&str]) -> Collection<Record> {
        let mut items = Collection::new();
        for (id, text) in texts.iter().enumerate() {
            assert!(items.append(Record::new(id, RecordText::new(*text))).is_ok());
        }
        items
    }

    #[test]
    fn add_assigns_insertion_index() {
        ReducerTest::new(AddReducer)
            .given_state(Collection::new())
            .when_action(TodoAction::add("Hello"))
            .when_action(TodoAction::add("World"))
            .then_state(|items| {
                assert_eq!(items.len(), 2);
                assert_eq!(items.get(0).map(|r| r.id), Some(0));
                assert_eq!(items.get(1).map(|r| r.text.as_str()), Some("World"));
                assert!(items.iter().all(|r| !r.completed));
            })
            .then_result(assertions::assert_ok)
            .run();
    }

    #[test]
    fn add_ignores_other_actions() {
        ReducerTest::new(AddReducer)
            .given_state(collection_of(&["Hello"]))
            .when_action(TodoAction::toggle(0))
            .when_action(TodoAction::set_filter(Filter::Completed))
            .then_state(|items| {
                assert_eq!(items, &collection_of(&["Hello"]));
            })
            .run();
    }

    #[test]
    fn toggle_completes_record() {
        ReducerTest::new(ToggleReducer)
            .given_state(collection_of(&["Hello", "World"]))
            .when_action(TodoAction::toggle(1))
            .then_state(|items| {
                assert_eq!(items.get(0).map(|r| r.completed), Some(false));
                assert_eq!(items.get(1).map(|r| r.completed), Some(true));
            })
            .then_result(assertions::assert_ok)
            .run();
    }

    #[test]
    fn toggle_twice_stays_completed() {
        ReducerTest::new(ToggleReducer)
            .given_state(collection_of(&["Hello"]))
            .when_action(TodoAction::toggle(0))
            .when_action(TodoAction::toggle(0))
            .then_state(|items| {
                assert_eq!(items.get(0).map(|r| r.completed), Some(true));
            })
            .run();
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        ReducerTest::new(ToggleReducer)
            .given_state(collection_of(&["Hello", "World"]))
            .when_action(TodoAction::toggle(2))
            .when_action(TodoAction::toggle(usize::MAX))
            .then_state(|items| {
                assert_eq!(items, &collection_of(&["Hello", "World"]));
            })
            .then_result(assertions::assert_ok)
            .run();
    }

    #[test]
    fn toggle_on_empty_collection_is_ignored() {
        ReducerTest::new(ToggleReducer)
            .given_state(Collection::new())
            .when_action(TodoAction::toggle(5))
            .then_state(|items| assert!(items.is_empty()))
            .then_result(assertions::assert_ok)
            .run();
    }

    #[test]
    fn filter_is_replaced() {
        ReducerTest::new(FilterReducer)
            .given_state(AppState::new())
            .when_action(TodoAction::set_filter(Filter::Incomplete))
            .when_action(TodoAction::set_filter(Filter::Completed))
            .then_state(|state| {
                assert_eq!(state.filter, Filter::Completed);
                assert!(state.items.is_empty());
            })
            .run();
    }

    #[test]
    fn chain_has_three_reducers() {
        let store = todo_store();
        assert_eq!(store.reducer_count(), 3);
        assert_eq!(store.config().name, "todo");
    }

    #[test]
    fn filter_does_not_change_records() {
        let mut store = todo_store_with_config(StoreConfig::new("filter-test", false));
        assert!(store.dispatch(TodoAction::add("Hello")).is_ok());
        assert!(store.dispatch(TodoAction::set_filter(Filter::Completed)).is_ok());

        assert_eq!(store.state().count(), 1);
        assert_eq!(store.state().completed_count(), 0);
        assert_eq!(store.state().filter, Filter::Completed);
    }
}
