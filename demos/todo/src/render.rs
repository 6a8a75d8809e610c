//! Console rendering of the todo list.
//!
//! The text listing shows every record, whatever the filter. The filter is
//! printed as a label below the records.

use crate::types::AppState;
use std::fmt;

/// Separator printed after each listing
pub const RULE: &str = "========================================";

/// [`Display`](fmt::Display) adapter that writes the text listing of a state
///
/// ```
/// use todo::{AppState, render::Listing};
///
/// let state = AppState::new();
/// assert_eq!(
///     Listing(&state).to_string(),
///     "**** ALL ****\n========================================\n"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Listing<'a>(pub &'a AppState);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.0.items {
            let mark = if record.completed { 'X' } else { ' ' };
            writeln!(f, "{mark}   {}", record.text)?;
        }
        writeln!(f, "**** {} ****", self.0.filter)?;
        writeln!(f, "{RULE}")
    }
}

/// Renders the text listing of `state`
#[must_use]
pub fn render_listing(state: &AppState) -> String {
    Listing(state).to_string()
}

/// Renders `state` as a single JSON line
///
/// # Errors
///
/// Returns an error if the state cannot be serialized.
pub fn render_json(state: &AppState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}
