//! Integration tests for the counter reducers running in a Store.

use counter::{CounterAction, CounterListAction, CounterListReducer, CounterReducer};
use proptest::prelude::*;
use statecraft_runtime::Store;
use statecraft_testing::{init_test_tracing, properties, ListenerProbe};
use std::sync::Arc;

#[test]
fn test_counter_with_store() {
    init_test_tracing();
    let store = Store::new(CounterReducer);
    let probe = ListenerProbe::new();
    let _sub = probe.attach(&store, "view");

    assert_eq!(store.get_state(), 0);

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    assert_eq!(store.get_state(), 2);

    store.dispatch(CounterAction::Decrement);
    assert_eq!(store.get_state(), 1);
    assert_eq!(probe.count("view"), 3);
}

#[test]
fn test_counter_list_snapshots_are_independent() {
    let store = Store::new(CounterListReducer);

    store.dispatch(CounterListAction::AddCounter);
    let one = store.get_state();
    store.dispatch(CounterListAction::AddCounter);
    store.dispatch(CounterListAction::IncrementCounter(0));
    let two = store.get_state();

    assert_eq!(*one, vec![0]);
    assert_eq!(*two, vec![1, 0]);

    store.dispatch(CounterListAction::RemoveCounter(7));
    assert!(Arc::ptr_eq(&two, &store.get_state()));
}

fn list_action() -> impl Strategy<Value = CounterListAction> {
    prop_oneof![
        Just(CounterListAction::AddCounter),
        (0usize..8).prop_map(CounterListAction::RemoveCounter),
        (0usize..8).prop_map(CounterListAction::IncrementCounter),
    ]
}

proptest! {
    #[test]
    fn counter_equals_increments_minus_decrements(ups in 0usize..50, downs in 0usize..50) {
        let store = Store::new(CounterReducer);
        for _ in 0..ups {
            store.dispatch(CounterAction::Increment);
        }
        for _ in 0..downs {
            store.dispatch(CounterAction::Decrement);
        }
        prop_assert_eq!(store.get_state(), ups as i64 - downs as i64);
    }

    #[test]
    fn list_length_tracks_adds_and_valid_removes(actions in properties::action_sequence(list_action(), 40)) {
        let store = Store::new(CounterListReducer);
        let mut expected = 0usize;

        for action in actions {
            match action {
                CounterListAction::AddCounter => expected += 1,
                CounterListAction::RemoveCounter(i) if i < expected => expected -= 1,
                _ => {},
            }
            let before = store.get_state();
            store.dispatch(action);
            prop_assert!(before.len().abs_diff(store.get_state().len()) <= 1);
        }

        prop_assert_eq!(store.get_state().len(), expected);
        prop_assert!(store.get_state().iter().all(|count| *count >= 0));
    }
}
