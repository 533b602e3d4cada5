//! # Statecraft Testing
//!
//! Testing utilities and helpers for Statecraft reducers and stores.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for a single transition
//! - [`ListenerProbe`]: Records which listeners a store called, in order
//! - Assertion helpers for identity transitions and shared allocations
//! - Property-based testing utilities
//!
//! ## Example
//!
//! ```ignore
//! use statecraft_testing::{ListenerProbe, ReducerTest};
//!
//! ReducerTest::new(VisibilityFilterReducer)
//!     .given_state(VisibilityFilter::ShowAll)
//!     .when_action(TodoAction::set_visibility_filter(VisibilityFilter::ShowCompleted))
//!     .then_state(|filter| assert_eq!(*filter, VisibilityFilter::ShowCompleted))
//!     .run();
//!
//! let store = Store::new(todo_app());
//! let probe = ListenerProbe::new();
//! let _first = probe.attach(&store, "first");
//! store.dispatch(TodoAction::toggle_todo(TodoId::new(0)));
//! assert_eq!(probe.calls(), vec!["first"]);
//! ```

pub mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Listener recording for store tests
pub mod probe {
    use statecraft_core::reducer::Reducer;
    use statecraft_runtime::{Store, Subscription};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared call log for store listeners
    ///
    /// Every listener attached through [`ListenerProbe::attach`] appends its
    /// label to the same log when called, so one probe shows the global
    /// notification order across listeners.
    #[derive(Debug, Clone, Default)]
    pub struct ListenerProbe {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ListenerProbe {
        /// Create an empty probe
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Subscribe a listener to `store` that records `label`
        pub fn attach<R>(&self, store: &Store<R>, label: &'static str) -> Subscription
        where
            R: Reducer,
        {
            store.subscribe(self.listener(label))
        }

        /// A listener closure that records `label`
        ///
        /// For custom listeners that should also show up in the log.
        pub fn listener(&self, label: &'static str) -> impl Fn() + 'static {
            let calls = Rc::clone(&self.calls);
            move || calls.borrow_mut().push(label)
        }

        /// Every recorded call, oldest first
        #[must_use]
        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }

        /// How many times `label` was called
        #[must_use]
        pub fn count(&self, label: &str) -> usize {
            self.calls.borrow().iter().filter(|call| **call == label).count()
        }

        /// Total calls recorded
        #[must_use]
        pub fn total(&self) -> usize {
            self.calls.borrow().len()
        }

        /// Forget all recorded calls
        pub fn clear(&self) {
            self.calls.borrow_mut().clear();
        }
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::collection::vec;
    use proptest::strategy::Strategy;

    /// Sequences of up to `max_len` actions drawn from `action`
    pub fn action_sequence<S>(action: S, max_len: usize) -> impl Strategy<Value = Vec<S::Value>>
    where
        S: Strategy,
    {
        vec(action, 0..=max_len)
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
/// Honours `RUST_LOG`, defaulting to `debug`.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub use probe::ListenerProbe;
