//! Domain types for the to-do demo.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Unique identifier for a to-do item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw number
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw number
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out fresh, never reused [`TodoId`]s, starting at `0`.
///
/// Owned by whoever creates `AddTodo` actions.
#[derive(Debug, Default)]
pub struct TodoIdGenerator {
    next: u64,
}

impl TodoIdGenerator {
    /// A generator whose first id is `0`
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// A generator that continues after existing items
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Returns the next id
    pub fn next_id(&mut self) -> TodoId {
        let id = TodoId(self.next);
        self.next += 1;
        id
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the item is done
    pub completed: bool,
}

impl TodoItem {
    /// Creates an open item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Shared, immutable list of items
pub type Todos = Arc<Vec<TodoItem>>;

/// Which items a view shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    /// Every item
    #[default]
    ShowAll,
    /// Done items only
    ShowCompleted,
    /// Open items only
    ShowActive,
}

impl VisibilityFilter {
    /// Wire name, e.g. `SHOW_ALL`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowCompleted => "SHOW_COMPLETED",
            Self::ShowActive => "SHOW_ACTIVE",
        }
    }

    /// Whether an item passes this filter
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowCompleted => item.completed,
            Self::ShowActive => !item.completed,
        }
    }
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown visibility filter name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown visibility filter `{0}` (expected SHOW_ALL, SHOW_COMPLETED or SHOW_ACTIVE)")]
pub struct ParseFilterError(pub String);

impl FromStr for VisibilityFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHOW_ALL" => Ok(Self::ShowAll),
            "SHOW_COMPLETED" => Ok(Self::ShowCompleted),
            "SHOW_ACTIVE" => Ok(Self::ShowActive),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// Whole to-do application state
///
/// One field per combined slice: `todos` and `visibilityFilter`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoAppState {
    /// All items, oldest first
    pub todos: Todos,
    /// Current filter
    pub visibility_filter: VisibilityFilter,
}

impl TodoAppState {
    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of done items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}

/// To-do actions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new open item
    AddTodo {
        /// Id for the new item
        id: TodoId,
        /// Item text
        text: String,
    },
    /// Flip `completed` on the item with this id
    ToggleTodo {
        /// Item to toggle
        id: TodoId,
    },
    /// Change which items are shown
    SetVisibilityFilter {
        /// New filter
        filter: VisibilityFilter,
    },
}

impl TodoAction {
    /// `AddTodo` with the next id from `ids`
    pub fn add_todo(ids: &mut TodoIdGenerator, text: impl Into<String>) -> Self {
        Self::AddTodo {
            id: ids.next_id(),
            text: text.into(),
        }
    }

    /// `ToggleTodo` for `id`
    #[must_use]
    pub const fn toggle_todo(id: TodoId) -> Self {
        Self::ToggleTodo { id }
    }

    /// `SetVisibilityFilter` to `filter`
    #[must_use]
    pub const fn set_visibility_filter(filter: VisibilityFilter) -> Self {
        Self::SetVisibilityFilter { filter }
    }
}
