//! Tests for #[derive(Action)] macro

use reflux_core::Action as _;
use reflux_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum TodoAction {
    Add {
        text: String,
    },

    Toggle {
        id: usize,
    },

    #[action(rename = "filter")]
    SetFilter(u8),

    Reset,
}

#[derive(Action, Clone, Debug)]
enum Wrapped<T: Clone + std::fmt::Debug> {
    Value(T),
    Nothing,
}

#[derive(Action, Clone, Debug)]
enum Never {}

fn action_name_of<A: reflux_core::Action>(action: &A) -> &'static str {
    action.name()
}

#[test]
fn test_struct_variant_name() {
    let action = TodoAction::Add {
        text: "Hello".to_string(),
    };
    assert_eq!(action.name(), "Add");
}

#[test]
fn test_renamed_variant() {
    assert_eq!(TodoAction::SetFilter(3).name(), "filter");
}

#[test]
fn test_unit_variant_name() {
    assert_eq!(TodoAction::Reset.name(), "Reset");
}

#[test]
fn test_names_unique() {
    let actions = vec![
        (TodoAction::Add { text: String::new() }, "Add"),
        (TodoAction::Toggle { id: 0 }, "Toggle"),
        (TodoAction::SetFilter(0), "filter"),
        (TodoAction::Reset, "Reset"),
    ];

    for (action, expected) in actions {
        assert_eq!(action.name(), expected, "Unexpected tag for {action:?}");
    }
}

#[test]
fn test_generic_enum() {
    assert_eq!(Wrapped::Value(7_u32).name(), "Value");
    assert_eq!(Wrapped::<u32>::Nothing.name(), "Nothing");
}

#[test]
fn test_empty_enum_derives() {
    // No value of `Never` exists; this only checks the impl is usable
    let no_actions: Vec<Never> = Vec::new();
    let names: Vec<&'static str> = no_actions.iter().map(action_name_of).collect();
    assert!(names.is_empty());
}
