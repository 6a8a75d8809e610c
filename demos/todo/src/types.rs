//! Domain types for the todo list.
//!
//! A todo list is an append-only collection of records plus a visibility
//! filter. Records are added and marked complete; they are never removed,
//! so a record's id is also its position in the collection.

use reflux_core::Collection;
use reflux_macros::Action;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of characters kept in a record's text
pub const MAX_TEXT_LEN: usize = 100;

/// Record text, capped at [`MAX_TEXT_LEN`] characters
///
/// Longer input is cut silently when the value is built. Truncation counts
/// `char`s, so a multi-byte character is either kept whole or dropped.
///
/// ```
/// use todo::{RecordText, MAX_TEXT_LEN};
///
/// let long = "x".repeat(MAX_TEXT_LEN + 20);
/// assert_eq!(RecordText::new(long).char_count(), MAX_TEXT_LEN);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RecordText(String);

impl RecordText {
    /// Creates record text, truncating to [`MAX_TEXT_LEN`] characters
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if let Some((cut, _)) = text.char_indices().nth(MAX_TEXT_LEN) {
            text.truncate(cut);
        }
        Self(text)
    }

    /// The text as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the text
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for RecordText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for RecordText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<RecordText> for String {
    fn from(text: RecordText) -> Self {
        text.0
    }
}

impl AsRef<str> for RecordText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Insertion index at creation time; never reassigned
    pub id: usize,
    /// Whether the record has been marked complete
    pub completed: bool,
    /// Text of the record
    pub text: RecordText,
}

impl Record {
    /// Creates a new, incomplete record
    #[must_use]
    pub const fn new(id: usize, text: RecordText) -> Self {
        Self {
            id,
            completed: false,
            text,
        }
    }

    /// Marks the record as completed
    ///
    /// One-directional: there is no way back to incomplete.
    pub const fn complete(&mut self) {
        self.completed = true;
    }
}

/// Which records a consumer should show
///
/// Presentation intent only. It is stored beside the records and never
/// changes how other actions are reduced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Filter {
    /// Every record
    #[default]
    All,
    /// Records not yet completed
    Incomplete,
    /// Completed records
    Completed,
}

impl Filter {
    /// Display label of the filter
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Incomplete => "INCOMPLETE",
            Self::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// State of the todo list
///
/// Deserialization rejects a record whose `id` differs from its position,
/// since toggles address records by position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// All records, in insertion order
    #[serde(deserialize_with = "deserialize_records")]
    pub items: Collection<Record>,
    /// Active visibility filter
    pub filter: Filter,
}

fn deserialize_records<'de, D>(deserializer: D) -> Result<Collection<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Collection::<Record>::deserialize(deserializer)?;
    if let Some((position, record)) = items
        .iter()
        .enumerate()
        .find(|(position, record)| record.id != *position)
    {
        return Err(serde::de::Error::custom(format!(
            "record at position {position} has id {}",
            record.id
        )));
    }
    Ok(items)
}

impl AppState {
    /// Creates an empty state with the `All` filter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Collection::new(),
            filter: Filter::All,
        }
    }

    /// Mutable access to the records, used to scope collection reducers
    pub const fn items_mut(&mut self) -> &mut Collection<Record> {
        &mut self.items
    }

    /// Returns the number of records
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of completed records
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|record| record.completed).count()
    }

    /// Returns a record by id
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Record> {
        self.items.get(id)
    }

    /// Frees record storage and resets the filter
    pub fn release(&mut self) {
        self.items.release();
        self.filter = Filter::All;
    }
}

/// Actions that can change the todo list
///
/// Build them with [`TodoAction::add`], [`TodoAction::toggle`] and
/// [`TodoAction::set_filter`].
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new record
    Add {
        /// Text of the new record, already truncated
        text: RecordText,
    },

    /// Mark the record at `id` as completed
    Toggle {
        /// Position of the record to complete
        id: usize,
    },

    /// Replace the visibility filter
    SetFilter {
        /// New filter
        filter: Filter,
    },
}

impl TodoAction {
    /// Builds an `Add` action, truncating `text` to [`MAX_TEXT_LEN`] characters
    #[must_use]
    pub fn add(text: impl Into<String>) -> Self {
        Self::Add {
            text: RecordText::new(text),
        }
    }

    /// Builds a `Toggle` action
    #[must_use]
    pub const fn toggle(id: usize) -> Self {
        Self::Toggle { id }
    }

    /// Builds a `SetFilter` action
    #[must_use]
    pub const fn set_filter(filter: Filter) -> Self {
        Self::SetFilter { filter }
    }
}
