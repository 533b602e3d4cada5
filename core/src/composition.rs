//! Reducer composition utilities
//!
//! This module provides two ways of building bigger reducers from small ones:
//! - **`scope_reducer`**: Focus a reducer on one keyed field of a larger state
//! - **`combine_reducers`**: Merge keyed slices into one whole-state reducer
//!
//! Every slice sees only its own field of the previous state, never another
//! slice's. Slices are evaluated in registration order.
//!
//! # Examples
//!
//! ```
//! use statecraft_core::{combine_reducers, from_fn, scope_reducer, Reducer};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! enum AppAction {
//!     Increment,
//!     Rename(String),
//! }
//!
//! let count = from_fn(|state: Option<&i32>, action: Option<&AppAction>| {
//!     let state = state.copied().unwrap_or_default();
//!     match action {
//!         Some(AppAction::Increment) => state + 1,
//!         _ => state,
//!     }
//! });
//!
//! let name = from_fn(|state: Option<&String>, action: Option<&AppAction>| match action {
//!     Some(AppAction::Rename(name)) => name.clone(),
//!     _ => state.cloned().unwrap_or_default(),
//! });
//!
//! let app = combine_reducers(vec![
//!     Box::new(scope_reducer("count", count, |s: &AppState| &s.count, |s, v| s.count = v)),
//!     Box::new(scope_reducer("name", name, |s: &AppState| &s.name, |s, v| s.name = v)),
//! ]);
//!
//! let state = app.initial_state();
//! let state = app.reduce(Some(&state), Some(&AppAction::Increment));
//! let state = app.reduce(Some(&state), Some(&AppAction::Rename("Ada".into())));
//! assert_eq!(state, AppState { count: 1, name: "Ada".into() });
//! ```

use crate::reducer::Reducer;

/// One keyed field of a combined state.
///
/// Implemented by [`ScopedReducer`]; used as a trait object by
/// [`CombinedReducer`] so that slices of different types can share a list.
pub trait Slice<S, A> {
    /// The key this slice occupies in the whole state
    fn key(&self) -> &'static str;

    /// Reduce this slice of `prev` and write the result into `next`
    fn reduce_into(&self, prev: Option<&S>, action: Option<&A>, next: &mut S);
}

/// Scopes a reducer to operate on one field of a larger state.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `R`: The child reducer, whose state is the field type
///
/// # Examples
///
/// ```
/// use statecraft_core::{from_fn, scope_reducer, Reducer};
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: i32,
///     other_data: String,
/// }
///
/// let counter = from_fn(|state: Option<&i32>, action: Option<&i32>| {
///     state.copied().unwrap_or_default() + action.copied().unwrap_or_default()
/// });
///
/// let scoped = scope_reducer(
///     "counter",
///     counter,
///     |app: &AppState| &app.counter,
///     |app: &mut AppState, counter| app.counter = counter,
/// );
///
/// let state = AppState { counter: 1, other_data: "kept".into() };
/// let next = scoped.reduce(Some(&state), Some(&4));
/// assert_eq!(next.counter, 5);
/// assert_eq!(next.other_data, "kept");
/// ```
pub fn scope_reducer<S, R>(
    key: &'static str,
    reducer: R,
    get_state: fn(&S) -> &R::State,
    set_state: fn(&mut S, R::State),
) -> ScopedReducer<S, R>
where
    R: Reducer,
{
    ScopedReducer {
        key,
        reducer,
        get_state,
        set_state,
    }
}

/// A reducer focused on one keyed field of a parent state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, R>
where
    R: Reducer,
{
    key: &'static str,
    reducer: R,
    get_state: fn(&S) -> &R::State,
    set_state: fn(&mut S, R::State),
}

impl<S, R> ScopedReducer<S, R>
where
    R: Reducer,
{
    fn reduce_field(&self, prev: Option<&S>, action: Option<&R::Action>) -> R::State {
        let field = prev.map(|parent| (self.get_state)(parent));
        self.reducer.reduce(field, action)
    }
}

impl<S, R> Slice<S, R::Action> for ScopedReducer<S, R>
where
    R: Reducer,
{
    fn key(&self) -> &'static str {
        self.key
    }

    fn reduce_into(&self, prev: Option<&S>, action: Option<&R::Action>, next: &mut S) {
        let field = self.reduce_field(prev, action);
        (self.set_state)(next, field);
    }
}

/// A scoped reducer used on its own leaves every other field of the parent
/// as it was (or at its default, on the seeding pass).
impl<S, R> Reducer for ScopedReducer<S, R>
where
    S: Clone + Default,
    R: Reducer,
{
    type State = S;
    type Action = R::Action;

    fn reduce(&self, state: Option<&S>, action: Option<&R::Action>) -> S {
        let mut next = state.cloned().unwrap_or_default();
        self.reduce_into(state, action, &mut next);
        next
    }
}

impl<S, R> std::fmt::Debug for ScopedReducer<S, R>
where
    R: Reducer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Combines keyed slices into one reducer over the whole state.
///
/// For every registered slice `k`, the output field `k` is
/// `child_k.reduce(prev.map(get_k), action)`. Output starts from
/// `S::default()`, so a field no slice owns stays at its default.
///
/// Registering the same key twice keeps the later slice, at the position of
/// the earlier one.
#[must_use]
pub fn combine_reducers<S, A>(slices: Vec<Box<dyn Slice<S, A>>>) -> CombinedReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    let mut combined = CombinedReducer {
        slices: Vec::with_capacity(slices.len()),
    };
    for slice in slices {
        combined.insert(slice);
    }
    combined
}

/// A reducer built from independent keyed slices.
///
/// Created by [`combine_reducers`] or [`CombinedReducer::new`] with
/// [`CombinedReducer::with_slice`].
pub struct CombinedReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    slices: Vec<Box<dyn Slice<S, A>>>,
}

impl<S, A> CombinedReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    /// An empty combination
    #[must_use]
    pub const fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Register another slice
    #[must_use]
    pub fn with_slice<T>(mut self, slice: T) -> Self
    where
        T: Slice<S, A> + 'static,
    {
        self.insert(Box::new(slice));
        self
    }

    /// Slice keys, in evaluation order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.iter().map(|slice| slice.key())
    }

    /// Number of slices
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    fn insert(&mut self, slice: Box<dyn Slice<S, A>>) {
        let key = slice.key();
        if let Some(existing) = self.slices.iter_mut().find(|s| s.key() == key) {
            tracing::debug!(key, "Replacing previously registered slice");
            *existing = slice;
        } else {
            self.slices.push(slice);
        }
    }
}

impl<S, A> Default for CombinedReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: Default + 'static,
    A: 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: Option<&S>, action: Option<&A>) -> S {
        let mut next = S::default();

        for slice in &self.slices {
            tracing::trace!(key = slice.key(), "Reducing slice");
            slice.reduce_into(state, action, &mut next);
        }

        next
    }
}

impl<S, A> std::fmt::Debug for CombinedReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
