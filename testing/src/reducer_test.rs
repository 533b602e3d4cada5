//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use statecraft_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for transition assertion functions (previous, next)
type TransitionAssertion<S> = Box<dyn FnOnce(Option<&S>, &S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Leaving out `given_state` runs the reducer with no prior state; leaving out
/// `when_action` runs it with the kind-less action.
///
/// # Example
///
/// ```ignore
/// use statecraft_testing::ReducerTest;
///
/// ReducerTest::new(CounterReducer)
///     .given_state(0)
///     .when_action(CounterAction::Increment)
///     .then_state(|count| {
///         assert_eq!(*count, 1);
///     })
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    initial_state: Option<R::State>,
    action: Option<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
    transition_assertions: Vec<TransitionAssertion<R::State>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            transition_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion over the previous and resulting state (Then)
    #[must_use]
    pub fn then_transition<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(Option<&R::State>, &R::State) + 'static,
    {
        self.transition_assertions.push(Box::new(assertion));
        self
    }

    /// Assert the resulting state equals the given state (Then)
    #[must_use]
    pub fn then_unchanged(self) -> Self
    where
        R::State: PartialEq + std::fmt::Debug + 'static,
    {
        self.then_transition(assertions::assert_unchanged::<R::State>)
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if any assertion fails.
    pub fn run(self) {
        let next = self
            .reducer
            .reduce(self.initial_state.as_ref(), self.action.as_ref());

        for assertion in self.state_assertions {
            assertion(&next);
        }

        for assertion in self.transition_assertions {
            assertion(self.initial_state.as_ref(), &next);
        }
    }
}

/// Helper assertions for transitions and shared state
pub mod assertions {
    use std::fmt::Debug;
    use std::sync::Arc;

    /// Assert that a transition left the state as it was
    ///
    /// # Panics
    ///
    /// Panics if there was no previous state or the states differ.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unchanged<S>(previous: Option<&S>, next: &S)
    where
        S: PartialEq + Debug,
    {
        let Some(previous) = previous else {
            panic!("Expected an identity transition, but there was no previous state");
        };
        assert_eq!(previous, next, "Expected an identity transition");
    }

    /// Assert that two handles share one allocation
    ///
    /// # Panics
    ///
    /// Panics if `left` and `right` point to different allocations.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_same_allocation<T: ?Sized>(left: &Arc<T>, right: &Arc<T>) {
        assert!(
            Arc::ptr_eq(left, right),
            "Expected the same allocation, found two different ones"
        );
    }

    /// Assert that two handles point to different allocations
    ///
    /// # Panics
    ///
    /// Panics if `left` and `right` share one allocation.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_new_allocation<T: ?Sized>(left: &Arc<T>, right: &Arc<T>) {
        assert!(
            !Arc::ptr_eq(left, right),
            "Expected a fresh allocation, but both handles share one"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: i32,
        tags: Arc<Vec<&'static str>>,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Tag(&'static str),
        Ignored,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: Option<&TestState>, action: Option<&TestAction>) -> TestState {
            let state = state.cloned().unwrap_or(TestState {
                count: 0,
                tags: Arc::default(),
            });
            match action {
                Some(TestAction::Increment) => TestState {
                    count: state.count + 1,
                    ..state
                },
                Some(TestAction::Tag(tag)) => {
                    let mut tags = (*state.tags).clone();
                    tags.push(tag);
                    TestState {
                        tags: Arc::new(tags),
                        ..state
                    }
                },
                Some(TestAction::Ignored) | None => state,
            }
        }
    }

    fn state(count: i32) -> TestState {
        TestState {
            count,
            tags: Arc::new(vec!["seed"]),
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .given_state(state(0))
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_without_state_uses_default() {
        ReducerTest::new(TestReducer)
            .then_state(|state| {
                assert_eq!(state.count, 0);
                assert!(state.tags.is_empty());
            })
            .run();
    }

    #[test]
    fn test_unknown_action_is_unchanged() {
        ReducerTest::new(TestReducer)
            .given_state(state(3))
            .when_action(TestAction::Ignored)
            .then_unchanged()
            .then_transition(|previous, next| {
                if let Some(previous) = previous {
                    assertions::assert_same_allocation(&previous.tags, &next.tags);
                }
            })
            .run();
    }

    #[test]
    fn test_tag_allocates_new_list() {
        ReducerTest::new(TestReducer)
            .given_state(state(0))
            .when_action(TestAction::Tag("new"))
            .then_transition(|previous, next| {
                if let Some(previous) = previous {
                    assertions::assert_new_allocation(&previous.tags, &next.tags);
                    assert_eq!(*previous.tags, vec!["seed"]);
                }
                assert_eq!(*next.tags, vec!["seed", "new"]);
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "identity transition")]
    fn test_then_unchanged_fails_on_change() {
        ReducerTest::new(TestReducer)
            .given_state(state(0))
            .when_action(TestAction::Increment)
            .then_unchanged()
            .run();
    }
}
