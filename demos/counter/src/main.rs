//! Counter demo binary
//!
//! Drives both counter reducers through a store and prints the state as
//! JSON after every notification.

use counter::{CounterAction, CounterListAction, CounterListReducer, CounterReducer};
use statecraft_runtime::{Store, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,statecraft_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter ===\n");

    let store = Store::with_config(CounterReducer, StoreConfig::new("counter"));
    println!("Initial count: {}", serde_json::to_string(&store.get_state())?);

    let view = store.downgrade();
    let subscription = store.subscribe(move || {
        if let Some(store) = view.upgrade() {
            println!("count = {}", store.get_state());
        }
    });

    for action in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
    ] {
        println!(">>> {}", serde_json::to_string(&action)?);
        store.dispatch(action);
    }
    subscription.unsubscribe();

    println!("\n=== Counter list ===\n");

    let list = Store::with_config(CounterListReducer, StoreConfig::new("counter-list"));
    let view = list.downgrade();
    let _subscription = list.subscribe(move || {
        if let Some(list) = view.upgrade() {
            match serde_json::to_string(&*list.get_state()) {
                Ok(json) => println!("counters = {json}"),
                Err(error) => tracing::warn!(%error, "Failed to render counters"),
            }
        }
    });

    for action in [
        CounterListAction::AddCounter,
        CounterListAction::AddCounter,
        CounterListAction::IncrementCounter(1),
        CounterListAction::IncrementCounter(1),
        CounterListAction::RemoveCounter(0),
        CounterListAction::IncrementCounter(5),
    ] {
        println!(">>> {}", serde_json::to_string(&action)?);
        list.dispatch(action);
    }

    Ok(())
}
