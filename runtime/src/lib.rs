//! # Statecraft Runtime
//!
//! Runtime implementation for Statecraft.
//!
//! This crate provides the [`Store`]: the single owner of a reducer's state.
//! It mediates every read and write of that state and notifies listeners
//! after each transition.
//!
//! ## Core Components
//!
//! - **Store**: Holds state, runs the reducer on dispatch, notifies listeners
//! - **Subscription**: Handle returned by `subscribe`, used to unsubscribe
//! - **`StoreConfig`**: Name used in logs and metric labels
//!
//! ## Example
//!
//! ```
//! use statecraft_core::from_fn;
//! use statecraft_runtime::Store;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = from_fn(|state: Option<&i64>, action: Option<&i64>| {
//!     state.copied().unwrap_or_default() + action.copied().unwrap_or_default()
//! });
//! let store = Store::new(counter);
//!
//! let renders = Rc::new(Cell::new(0));
//! let subscription = {
//!     let renders = Rc::clone(&renders);
//!     store.subscribe(move || renders.set(renders.get() + 1))
//! };
//!
//! store.dispatch(5);
//! assert_eq!(store.get_state(), 5);
//! assert_eq!(renders.get(), 1);
//!
//! subscription.unsubscribe();
//! store.dispatch(1);
//! assert_eq!(renders.get(), 1);
//! ```
//!
//! ## Threading
//!
//! A store is single-threaded (`!Send`). Dispatch, subscribe and unsubscribe
//! are ordinary synchronous calls; a listener may dispatch again, and that
//! inner dispatch (including its own notification pass) completes before the
//! outer pass resumes.

/// Store configuration
pub mod config;

/// Metrics for store activity
pub mod metrics;

pub use config::StoreConfig;
pub use store::{ListenerId, Store, Subscription, WeakStore};

/// The Store and its subscription handles
pub mod store {
    use crate::config::StoreConfig;
    use crate::metrics::StoreMetrics;
    use smallvec::SmallVec;
    use statecraft_core::reducer::Reducer;
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};
    use std::time::Instant;

    type Listener = Rc<dyn Fn()>;

    /// Identity of one listener registration
    ///
    /// Registering the same closure twice yields two ids; each
    /// [`Subscription`] removes only its own registration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ListenerId(u64);

    impl ListenerId {
        /// The raw registration number
        #[must_use]
        pub const fn get(self) -> u64 {
            self.0
        }
    }

    impl std::fmt::Display for ListenerId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "listener-{}", self.0)
        }
    }

    /// Ordered listener registrations; insertion order is notification order.
    #[derive(Default)]
    struct ListenerRegistry {
        next_id: u64,
        entries: Vec<(ListenerId, Listener)>,
    }

    impl ListenerRegistry {
        fn insert(&mut self, listener: Listener) -> ListenerId {
            let id = ListenerId(self.next_id);
            self.next_id += 1;
            self.entries.push((id, listener));
            id
        }

        fn remove(&mut self, id: ListenerId) -> bool {
            let before = self.entries.len();
            self.entries.retain(|(entry, _)| *entry != id);
            self.entries.len() != before
        }

        /// Listeners registered right now. Changes made while the snapshot is
        /// being notified apply from the next pass on.
        fn snapshot(&self) -> SmallVec<[Listener; 4]> {
            self.entries
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        }
    }

    struct Shared<R>
    where
        R: Reducer,
    {
        config: StoreConfig,
        reducer: R,
        state: RefCell<R::State>,
        listeners: Rc<RefCell<ListenerRegistry>>,
        dispatches: Cell<u64>,
    }

    /// The Store - single owner of a reducer's state
    ///
    /// The Store manages:
    /// 1. State (replaced, never mutated, on each dispatch)
    /// 2. Reducer (fixed at construction)
    /// 3. Listeners (notified synchronously after every dispatch)
    ///
    /// Cloning a `Store` clones the handle; both handles share one state.
    ///
    /// # Type Parameters
    ///
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(todo_app());
    ///
    /// let view = store.downgrade();
    /// let subscription = store.subscribe(move || {
    ///     if let Some(store) = view.upgrade() {
    ///         render(&store.get_state());
    ///     }
    /// });
    ///
    /// store.dispatch(TodoAction::add_todo(&mut ids, "Learn Redux"));
    /// subscription.unsubscribe();
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        shared: Rc<Shared<R>>,
    }

    impl<R> Store<R>
    where
        R: Reducer,
    {
        /// Create a new store around `reducer`
        ///
        /// The initial state is the reducer's answer to "no state, no
        /// action", computed once here.
        #[must_use]
        pub fn new(reducer: R) -> Self {
            Self::with_config(reducer, StoreConfig::default())
        }

        /// Create a new store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let store = Store::with_config(todo_app(), StoreConfig::default().with_name("todos"));
        /// ```
        #[must_use]
        pub fn with_config(reducer: R, config: StoreConfig) -> Self {
            let initial = reducer.reduce(None, None);
            tracing::debug!(store = %config.name, "Store created");

            Self {
                shared: Rc::new(Shared {
                    config,
                    reducer,
                    state: RefCell::new(initial),
                    listeners: Rc::new(RefCell::new(ListenerRegistry::default())),
                    dispatches: Cell::new(0),
                }),
            }
        }

        /// Store name, as configured
        #[must_use]
        pub fn name(&self) -> &str {
            &self.shared.config.name
        }

        /// Current state, by value
        ///
        /// Cheap for state built from `Rc`/`Arc` parts, which is how state
        /// meant for sharing with views should be shaped.
        #[must_use]
        pub fn get_state(&self) -> R::State
        where
            R::State: Clone,
        {
            self.shared.state.borrow().clone()
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let done = store.state(|s| s.completed_count());
        /// ```
        ///
        /// `f` must not dispatch to this store.
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&R::State) -> T,
        {
            f(&self.shared.state.borrow())
        }

        /// Send an action through the reducer, then notify listeners
        ///
        /// 1. `next = reducer.reduce(Some(&state), Some(&action))`
        /// 2. `state = next`
        /// 3. every listener registered at this point is called, in
        ///    registration order, with no arguments
        ///
        /// Listeners subscribed or unsubscribed during step 3 do not change
        /// who is called in this pass.
        #[tracing::instrument(skip(self, action), fields(store = %self.shared.config.name), name = "store_dispatch")]
        pub fn dispatch(&self, action: R::Action) {
            tracing::debug!("Processing action");

            let start = Instant::now();
            let next = {
                let state = self.shared.state.borrow();
                self.shared.reducer.reduce(Some(&*state), Some(&action))
            };
            let reduce_time = start.elapsed();

            *self.shared.state.borrow_mut() = next;
            self.shared.dispatches.set(self.shared.dispatches.get() + 1);
            tracing::trace!(?reduce_time, "Reducer completed");

            let listeners = self.shared.listeners.borrow().snapshot();
            tracing::trace!(listeners = listeners.len(), "Notifying listeners");
            for listener in &listeners {
                listener();
            }

            StoreMetrics::record_dispatch(&self.shared.config.name, reduce_time, listeners.len());
        }

        /// Register a listener, called after every dispatch
        ///
        /// Returns a [`Subscription`] whose `unsubscribe` removes exactly this
        /// registration.
        pub fn subscribe<F>(&self, listener: F) -> Subscription
        where
            F: Fn() + 'static,
        {
            let id = self.shared.listeners.borrow_mut().insert(Rc::new(listener));
            tracing::trace!(store = %self.shared.config.name, %id, "Listener subscribed");

            Subscription {
                id,
                registry: Rc::downgrade(&self.shared.listeners),
            }
        }

        /// Number of registered listeners
        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.shared.listeners.borrow().entries.len()
        }

        /// Number of completed dispatches
        #[must_use]
        pub fn dispatch_count(&self) -> u64 {
            self.shared.dispatches.get()
        }

        /// A handle that does not keep the store alive
        ///
        /// Listeners that read state should capture this rather than a
        /// `Store` clone, which would form a reference cycle through the
        /// listener list.
        #[must_use]
        pub fn downgrade(&self) -> WeakStore<R> {
            WeakStore {
                shared: Rc::downgrade(&self.shared),
            }
        }
    }

    impl<R> Clone for Store<R>
    where
        R: Reducer,
    {
        fn clone(&self) -> Self {
            Self {
                shared: Rc::clone(&self.shared),
            }
        }
    }

    impl<R> std::fmt::Debug for Store<R>
    where
        R: Reducer,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("name", &self.shared.config.name)
                .field("listeners", &self.listener_count())
                .field("dispatches", &self.dispatch_count())
                .finish_non_exhaustive()
        }
    }

    /// Non-owning store handle, see [`Store::downgrade`]
    pub struct WeakStore<R>
    where
        R: Reducer,
    {
        shared: Weak<Shared<R>>,
    }

    impl<R> WeakStore<R>
    where
        R: Reducer,
    {
        /// The store, if it is still alive
        #[must_use]
        pub fn upgrade(&self) -> Option<Store<R>> {
            self.shared.upgrade().map(|shared| Store { shared })
        }
    }

    impl<R> Clone for WeakStore<R>
    where
        R: Reducer,
    {
        fn clone(&self) -> Self {
            Self {
                shared: Weak::clone(&self.shared),
            }
        }
    }

    impl<R> std::fmt::Debug for WeakStore<R>
    where
        R: Reducer,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("WeakStore")
                .field("alive", &(self.shared.strong_count() > 0))
                .finish()
        }
    }

    /// Handle for one listener registration
    ///
    /// Dropping a `Subscription` does not unsubscribe; call
    /// [`Subscription::unsubscribe`] on teardown.
    #[derive(Debug, Clone)]
    #[must_use = "keep the subscription to be able to unsubscribe"]
    pub struct Subscription {
        id: ListenerId,
        registry: Weak<RefCell<ListenerRegistry>>,
    }

    impl Subscription {
        /// The registration this handle controls
        #[must_use]
        pub const fn id(&self) -> ListenerId {
            self.id
        }

        /// Remove this registration
        ///
        /// Idempotent: later calls, and calls after the store is gone, do
        /// nothing. A notification pass already in progress still reaches
        /// this listener.
        ///
        /// # Returns
        ///
        /// `true` if this call removed the listener
        #[allow(clippy::must_use_candidate)]
        pub fn unsubscribe(&self) -> bool {
            let Some(registry) = self.registry.upgrade() else {
                return false;
            };
            let removed = registry.borrow_mut().remove(self.id);
            if removed {
                tracing::trace!(id = %self.id, "Listener unsubscribed");
            }
            removed
        }
    }

    impl std::fmt::Debug for ListenerRegistry {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ListenerRegistry")
                .field("listeners", &self.entries.len())
                .finish_non_exhaustive()
        }
    }
}
