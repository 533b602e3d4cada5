//! To-do demo built from two independent reducers.
//!
//! - `todos`: the item list, grown by `AddTodo` and changed by `ToggleTodo`
//! - `visibilityFilter`: which items a view shows
//!
//! [`todo_app`] combines them into one reducer over [`TodoAppState`]; a
//! [`Store`](statecraft_runtime::Store) holds the result.
//!
//! # Quick Start
//!
//! ```
//! use statecraft_runtime::Store;
//! use todo::{todo_app, visible_todos, TodoAction, TodoIdGenerator, VisibilityFilter};
//!
//! let store = Store::new(todo_app());
//! let mut ids = TodoIdGenerator::new();
//!
//! let learn = TodoAction::add_todo(&mut ids, "Learn Redux");
//! store.dispatch(learn);
//! store.dispatch(TodoAction::add_todo(&mut ids, "Go shopping"));
//! store.dispatch(TodoAction::toggle_todo(todo::TodoId::new(0)));
//! store.dispatch(TodoAction::set_visibility_filter(VisibilityFilter::ShowCompleted));
//!
//! let state = store.get_state();
//! let shown = visible_todos(&state.todos, state.visibility_filter);
//! assert_eq!(shown.len(), 1);
//! assert_eq!(shown[0].text, "Learn Redux");
//! ```

pub mod reducer;
pub mod types;

pub use reducer::{todo_app, todo_item, visible_todos, TodoApp, TodoListReducer, VisibilityFilterReducer};
pub use types::{
    ParseFilterError, TodoAction, TodoAppState, TodoId, TodoIdGenerator, TodoItem, Todos, VisibilityFilter,
};
