//! Reducers for the to-do demo.
//!
//! Two independent reducers, each owning one field of [`TodoAppState`], joined
//! by [`todo_app`]:
//!
//! - [`TodoListReducer`] owns `todos`
//! - [`VisibilityFilterReducer`] owns `visibilityFilter`

use crate::types::{TodoAction, TodoAppState, TodoItem, Todos, VisibilityFilter};
use statecraft_core::{combine_reducers, reducer::Reducer, scope_reducer, CombinedReducer};
use std::sync::Arc;

/// The combined to-do reducer
pub type TodoApp = CombinedReducer<TodoAppState, TodoAction>;

/// Per-item transition
///
/// - `AddTodo` builds a fresh open item, whatever `state` is.
/// - `ToggleTodo` flips `completed` on a matching item and returns any other
///   item unchanged. Without an item there is nothing to toggle: `None`.
/// - Anything else returns `state` as is.
#[must_use]
pub fn todo_item(state: Option<&TodoItem>, action: &TodoAction) -> Option<TodoItem> {
    match action {
        TodoAction::AddTodo { id, text } => Some(TodoItem::new(*id, text.clone())),
        TodoAction::ToggleTodo { id } => state.map(|item| {
            if item.id == *id {
                TodoItem {
                    completed: !item.completed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        }),
        TodoAction::SetVisibilityFilter { .. } => state.cloned(),
    }
}

/// Reducer for the item list
///
/// Starts empty. `AddTodo` appends; `ToggleTodo` always yields a new list,
/// even when no id matches. Every other action returns the same list.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoListReducer;

impl Reducer for TodoListReducer {
    type State = Todos;
    type Action = TodoAction;

    fn reduce(&self, state: Option<&Todos>, action: Option<&TodoAction>) -> Todos {
        let todos = state.cloned().unwrap_or_default();
        let Some(action) = action else {
            return todos;
        };

        match action {
            TodoAction::AddTodo { id, .. } => {
                tracing::trace!(%id, "Adding todo");
                let mut next = Vec::with_capacity(todos.len() + 1);
                next.extend(todos.iter().cloned());
                next.extend(todo_item(None, action));
                Arc::new(next)
            },
            TodoAction::ToggleTodo { .. } => Arc::new(
                todos
                    .iter()
                    .map(|item| todo_item(Some(item), action).unwrap_or_else(|| item.clone()))
                    .collect(),
            ),
            TodoAction::SetVisibilityFilter { .. } => todos,
        }
    }
}

/// Reducer for the visibility filter
///
/// Starts at [`VisibilityFilter::ShowAll`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;

    fn reduce(&self, state: Option<&VisibilityFilter>, action: Option<&TodoAction>) -> VisibilityFilter {
        match action {
            Some(TodoAction::SetVisibilityFilter { filter }) => *filter,
            _ => state.copied().unwrap_or_default(),
        }
    }
}

/// The whole to-do application: `todos` then `visibilityFilter`.
///
/// # Example
///
/// ```
/// use statecraft_core::Reducer;
/// use todo::{todo_app, TodoAction, TodoIdGenerator, VisibilityFilter};
///
/// let app = todo_app();
/// let mut ids = TodoIdGenerator::new();
///
/// let state = app.initial_state();
/// let state = app.reduce(Some(&state), Some(&TodoAction::add_todo(&mut ids, "Learn Redux")));
///
/// assert_eq!(state.count(), 1);
/// assert_eq!(state.visibility_filter, VisibilityFilter::ShowAll);
/// ```
#[must_use]
pub fn todo_app() -> TodoApp {
    combine_reducers(vec![
        Box::new(scope_reducer(
            "todos",
            TodoListReducer,
            |state: &TodoAppState| &state.todos,
            |state: &mut TodoAppState, todos| state.todos = todos,
        )),
        Box::new(scope_reducer(
            "visibilityFilter",
            VisibilityFilterReducer,
            |state: &TodoAppState| &state.visibility_filter,
            |state: &mut TodoAppState, filter| state.visibility_filter = filter,
        )),
    ])
}

/// Items that pass `filter`, in list order
#[must_use]
pub fn visible_todos(todos: &[TodoItem], filter: VisibilityFilter) -> Vec<TodoItem> {
    todos.iter().filter(|item| filter.matches(item)).cloned().collect()
}
