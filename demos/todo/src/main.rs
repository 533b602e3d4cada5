//! To-do demo binary
//!
//! Replays a short session against the combined reducer and prints the whole
//! state as JSON after every notification.
//!
//! An optional first argument selects the final filter, e.g. `SHOW_ACTIVE`.

use statecraft_runtime::{Store, StoreConfig};
use todo::{todo_app, visible_todos, TodoAction, TodoIdGenerator, VisibilityFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,statecraft_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let final_filter = match std::env::args().nth(1) {
        Some(name) => name.parse::<VisibilityFilter>()?,
        None => VisibilityFilter::ShowCompleted,
    };

    let store = Store::with_config(todo_app(), StoreConfig::new("todos"));
    println!("Initial state: {}", serde_json::to_string(&store.get_state())?);

    let view = store.downgrade();
    let subscription = store.subscribe(move || {
        let Some(store) = view.upgrade() else { return };
        match serde_json::to_string(&store.get_state()) {
            Ok(json) => println!("{json}"),
            Err(error) => tracing::warn!(%error, "Failed to render state"),
        }
    });

    let mut ids = TodoIdGenerator::new();
    let learn_id = ids.next_id();

    for action in [
        TodoAction::AddTodo {
            id: learn_id,
            text: "Learn about actions".to_string(),
        },
        TodoAction::add_todo(&mut ids, "Learn about reducers"),
        TodoAction::add_todo(&mut ids, "Learn about store"),
        TodoAction::toggle_todo(learn_id),
        TodoAction::set_visibility_filter(final_filter),
    ] {
        store.dispatch(action);
    }

    subscription.unsubscribe();

    let state = store.get_state();
    println!(
        "\n{} of {} done; showing {}:",
        state.completed_count(),
        state.count(),
        state.visibility_filter
    );
    for item in visible_todos(&state.todos, state.visibility_filter) {
        println!("  [{}] {}", if item.completed { "x" } else { " " }, item.text);
    }

    Ok(())
}
