//! Property tests for the todo reducer chain

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use reflux_runtime::StoreConfig;
use todo::{AppState, Filter, MAX_TEXT_LEN, TodoAction, todo_store_with_config};

fn quiet_store() -> reflux_runtime::Store<AppState, TodoAction> {
    todo_store_with_config(StoreConfig::new("props", false))
}

fn filter_strategy() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        Just(Filter::Incomplete),
        Just(Filter::Completed),
    ]
}

fn action_strategy() -> impl Strategy<Value = TodoAction> {
    prop_oneof![
        ".{0,20}".prop_map(TodoAction::add),
        (0usize..32).prop_map(TodoAction::toggle),
        filter_strategy().prop_map(TodoAction::set_filter),
    ]
}

proptest! {
    #[test]
    fn adds_get_sequential_ids(texts in prop::collection::vec(".{0,20}", 0..40)) {
        let mut store = quiet_store();
        for text in &texts {
            store.dispatch(TodoAction::add(text.as_str())).unwrap();
        }

        let state = store.state();
        prop_assert_eq!(state.count(), texts.len());
        for (i, record) in state.items.iter().enumerate() {
            prop_assert_eq!(record.id, i);
            prop_assert!(!record.completed);
            prop_assert_eq!(record.text.as_str(), texts[i].as_str());
        }
    }

    #[test]
    fn toggle_twice_equals_once(
        actions in prop::collection::vec(action_strategy(), 0..30),
        id in 0usize..32,
    ) {
        let mut once = quiet_store();
        let mut twice = quiet_store();
        for action in &actions {
            once.dispatch(action.clone()).unwrap();
            twice.dispatch(action.clone()).unwrap();
        }

        once.dispatch(TodoAction::toggle(id)).unwrap();
        twice.dispatch(TodoAction::toggle(id)).unwrap();
        twice.dispatch(TodoAction::toggle(id)).unwrap();

        prop_assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn toggle_out_of_range_changes_nothing(
        actions in prop::collection::vec(action_strategy(), 0..30),
        past_end in 0usize..1000,
    ) {
        let mut store = quiet_store();
        for action in actions {
            store.dispatch(action).unwrap();
        }
        let before = store.state().clone();

        store.dispatch(TodoAction::toggle(before.count() + past_end)).unwrap();

        prop_assert_eq!(store.state(), &before);
    }

    #[test]
    fn long_text_keeps_prefix(text in ".{0,300}") {
        let mut store = quiet_store();
        store.dispatch(TodoAction::add(text.as_str())).unwrap();

        let expected: String = text.chars().take(MAX_TEXT_LEN).collect();
        let stored = store.state().get(0).unwrap();
        prop_assert_eq!(stored.text.as_str(), expected.as_str());
    }

    #[test]
    fn filter_only_changes_filter(
        actions in prop::collection::vec(action_strategy(), 0..30),
        filter in filter_strategy(),
    ) {
        let mut store = quiet_store();
        for action in actions {
            store.dispatch(action).unwrap();
        }
        let before = store.state().items.clone();

        store.dispatch(TodoAction::set_filter(filter)).unwrap();

        prop_assert_eq!(&store.state().items, &before);
        prop_assert_eq!(store.state().filter, filter);
    }
}
