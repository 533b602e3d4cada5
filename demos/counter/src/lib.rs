//! # Counter Demo
//!
//! Two small reducers for the Statecraft store:
//!
//! - [`CounterReducer`]: a single `i64` moved by `Increment` / `Decrement`
//! - [`CounterListReducer`]: a shared list of counters, each change producing
//!   a fresh list and leaving the previous one untouched
//!
//! ## Example
//!
//! ```
//! use counter::{CounterAction, CounterReducer};
//! use statecraft_runtime::Store;
//!
//! let store = Store::new(CounterReducer);
//! store.dispatch(CounterAction::Increment);
//! store.dispatch(CounterAction::Increment);
//! store.dispatch(CounterAction::Decrement);
//! assert_eq!(store.get_state(), 1);
//! ```

use serde::{Deserialize, Serialize};
use statecraft_core::reducer::Reducer;
use std::sync::Arc;

/// Counter actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    /// Add 1, saturating at `i64::MAX`
    Increment,
    /// Subtract 1, saturating at `i64::MIN`
    Decrement,
}

/// Counter reducer
///
/// State is the count itself, starting at `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = i64;
    type Action = CounterAction;

    fn reduce(&self, state: Option<&i64>, action: Option<&CounterAction>) -> i64 {
        let count = state.copied().unwrap_or_default();
        match action {
            Some(CounterAction::Increment) => count.saturating_add(1),
            Some(CounterAction::Decrement) => count.saturating_sub(1),
            None => count,
        }
    }
}

/// A list of counters, shared between snapshots
pub type Counters = Arc<Vec<i64>>;

/// Counter list actions
///
/// Indices that do not name an existing counter are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterListAction {
    /// Append a counter starting at `0`
    AddCounter,
    /// Remove the counter at an index
    RemoveCounter(usize),
    /// Add 1 to the counter at an index, saturating at `i64::MAX`
    IncrementCounter(usize),
}

/// Counter list reducer
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterListReducer;

impl Reducer for CounterListReducer {
    type State = Counters;
    type Action = CounterListAction;

    fn reduce(&self, state: Option<&Counters>, action: Option<&CounterListAction>) -> Counters {
        let counters = state.cloned().unwrap_or_default();
        match action {
            Some(CounterListAction::AddCounter) => {
                let mut next = Vec::with_capacity(counters.len() + 1);
                next.extend_from_slice(&counters);
                next.push(0);
                Arc::new(next)
            },
            Some(CounterListAction::RemoveCounter(index)) if *index < counters.len() => {
                let next = counters[..*index]
                    .iter()
                    .chain(&counters[index + 1..])
                    .copied()
                    .collect();
                Arc::new(next)
            },
            Some(CounterListAction::IncrementCounter(index)) if *index < counters.len() => {
                let next = counters
                    .iter()
                    .enumerate()
                    .map(|(i, count)| if i == *index { count.saturating_add(1) } else { *count })
                    .collect();
                Arc::new(next)
            },
            Some(CounterListAction::RemoveCounter(index) | CounterListAction::IncrementCounter(index)) => {
                tracing::debug!(index, len = counters.len(), "Counter index out of range");
                counters
            },
            None => counters,
        }
    }
}
