//! # Statecraft Core
//!
//! Core traits for a small observable, reducer-driven state container.
//!
//! ## Core Concepts
//!
//! - **State**: The value a reducer owns. Never mutated in place; every
//!   transition produces the next value.
//! - **Action**: An immutable description of an intended transition.
//! - **Reducer**: Pure, total function `(Option<&State>, Option<&Action>) → State`
//! - **Composition**: Independent reducers merged into one whole-state reducer,
//!   one keyed slice each (see [`composition`]).
//!
//! The store that owns state and notifies listeners lives in
//! `statecraft-runtime`.
//!
//! ## Example
//!
//! ```
//! use statecraft_core::Reducer;
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct Counter;
//!
//! impl Reducer for Counter {
//!     type State = i64;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: Option<&i64>, action: Option<&CounterAction>) -> i64 {
//!         let count = state.copied().unwrap_or_default();
//!         match action {
//!             Some(CounterAction::Increment) => count + 1,
//!             Some(CounterAction::Decrement) => count - 1,
//!             None => count,
//!         }
//!     }
//! }
//!
//! // The seeding pass: no prior state, no action.
//! let initial = Counter.reduce(None, None);
//! assert_eq!(initial, 0);
//! assert_eq!(Counter.reduce(Some(&initial), Some(&CounterAction::Increment)), 1);
//! ```

pub mod composition;

pub use composition::{combine_reducers, scope_reducer, CombinedReducer, ScopedReducer, Slice};
pub use reducer::{from_fn, FnReducer, Reducer};

/// Reducer module - the core trait for state transitions
///
/// Reducers are pure functions: `(previous state, action) → next state`.
///
/// Two inputs can be absent:
///
/// - `state == None` means "no state yet". The reducer applies its own
///   default (an empty list, `0`, `SHOW_ALL`, ...). A store runs this exactly
///   once, at construction.
/// - `action == None` is the synthetic action with no kind. Every reducer must
///   return its input state unchanged for it, exactly as for actions it does
///   not recognise.
pub mod reducer {
    use std::marker::PhantomData;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer produces
    /// - `Action`: The action type this reducer interprets
    ///
    /// # Contract
    ///
    /// - Pure: the same inputs always produce the same output, and neither
    ///   input is modified.
    /// - Total: every input yields a state. Malformed actions are a caller bug,
    ///   not something the reducer reports.
    /// - Identity on unknown actions: return the input state. For shared
    ///   (`Arc`/`Rc`) state this means returning the same allocation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for VisibilityFilterReducer {
    ///     type State = VisibilityFilter;
    ///     type Action = TodoAction;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: Option<&VisibilityFilter>,
    ///         action: Option<&TodoAction>,
    ///     ) -> VisibilityFilter {
    ///         let state = state.copied().unwrap_or_default();
    ///         match action {
    ///             Some(TodoAction::SetVisibilityFilter { filter }) => *filter,
    ///             _ => state,
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer produces
        type State;

        /// The action type this reducer interprets
        type Action;

        /// Compute the next state
        ///
        /// # Arguments
        ///
        /// - `state`: Previous state, or `None` before any state exists
        /// - `action`: The action to apply, or `None` for the kind-less action
        ///
        /// # Returns
        ///
        /// The next state. Never a mutation of `state`.
        fn reduce(
            &self,
            state: Option<&Self::State>,
            action: Option<&Self::Action>,
        ) -> Self::State;

        /// The state this reducer produces when nothing has happened yet
        ///
        /// Equivalent to `reduce(None, None)`.
        fn initial_state(&self) -> Self::State {
            self.reduce(None, None)
        }
    }

    impl<R> Reducer for Box<R>
    where
        R: Reducer + ?Sized,
    {
        type State = R::State;
        type Action = R::Action;

        fn reduce(
            &self,
            state: Option<&Self::State>,
            action: Option<&Self::Action>,
        ) -> Self::State {
            (**self).reduce(state, action)
        }
    }

    impl<R> Reducer for &R
    where
        R: Reducer + ?Sized,
    {
        type State = R::State;
        type Action = R::Action;

        fn reduce(
            &self,
            state: Option<&Self::State>,
            action: Option<&Self::Action>,
        ) -> Self::State {
            (**self).reduce(state, action)
        }
    }

    /// Wrap a closure as a [`Reducer`].
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft_core::{from_fn, Reducer};
    ///
    /// let doubler = from_fn(|state: Option<&u32>, action: Option<&bool>| {
    ///     let state = state.copied().unwrap_or(1);
    ///     match action {
    ///         Some(true) => state * 2,
    ///         _ => state,
    ///     }
    /// });
    ///
    /// assert_eq!(doubler.reduce(Some(&4), Some(&true)), 8);
    /// assert_eq!(doubler.initial_state(), 1);
    /// ```
    pub fn from_fn<S, A, F>(f: F) -> FnReducer<S, A, F>
    where
        F: Fn(Option<&S>, Option<&A>) -> S,
    {
        FnReducer {
            f,
            _phantom: PhantomData,
        }
    }

    /// A reducer backed by a closure.
    ///
    /// Created by [`from_fn`].
    pub struct FnReducer<S, A, F> {
        f: F,
        _phantom: PhantomData<fn(Option<&S>, Option<&A>) -> S>,
    }

    impl<S, A, F> Reducer for FnReducer<S, A, F>
    where
        F: Fn(Option<&S>, Option<&A>) -> S,
    {
        type State = S;
        type Action = A;

        fn reduce(&self, state: Option<&S>, action: Option<&A>) -> S {
            (self.f)(state, action)
        }
    }

    impl<S, A, F> std::fmt::Debug for FnReducer<S, A, F> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("FnReducer").finish_non_exhaustive()
        }
    }
}
