//! Ergonomic testing utilities for reducers
//!
//! Provides a fluent API for testing reducers with readable Given-When-Then
//! syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use samyak_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent API for testing reducers with Given-When-Then syntax.
///
/// # Example
///
/// ```ignore
/// ReducerTest::new(RegistrationReducer)
///     .with_env(test_environment())
///     .given_state(state_with_catalog())
///     .when_action(RegistrationAction::NotificationDismissed)
///     .then_state(|state| assert!(state.notification.is_none()))
///     .then_effects(assertions::assert_no_effects)
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the returned effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions.
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set, or if any
    /// assertion fails.
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        let effects = self.reducer.reduce(&mut state, action, &env);

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use samyak_core::effect::Effect;

    /// Assert that there are no effects.
    ///
    /// # Panics
    ///
    /// Panics if effects is not empty (a lone `Effect::None` counts as
    /// empty).
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.is_empty() || matches!(effects, [Effect::None]),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects.
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects contain at least one Future effect.
    ///
    /// # Panics
    ///
    /// Panics if no Future effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Future(_))),
            "Expected at least one Future effect, but none found"
        );
    }

    /// Assert that exactly one Future effect was returned.
    ///
    /// Used for the mutation flows where "exactly one reload" matters.
    ///
    /// # Panics
    ///
    /// Panics if zero or more than one Future effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_single_future_effect<A>(effects: &[Effect<A>]) {
        let count = effects
            .iter()
            .filter(|e| matches!(e, Effect::Future(_)))
            .count();
        assert_eq!(count, 1, "Expected exactly one Future effect, found {count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samyak_core::effect::Effects;
    use samyak_core::smallvec;

    #[derive(Clone, Debug)]
    struct TallyState {
        total: u32,
    }

    #[derive(Clone, Debug)]
    enum TallyAction {
        Add(u32),
    }

    struct TallyReducer;

    impl Reducer for TallyReducer {
        type State = TallyState;
        type Action = TallyAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut TallyState,
            action: TallyAction,
            (): &(),
        ) -> Effects<TallyAction> {
            let TallyAction::Add(n) = action;
            state.total += n;
            smallvec![Effect::None]
        }
    }

    #[test]
    fn given_when_then_runs_assertions() {
        ReducerTest::new(TallyReducer)
            .with_env(())
            .given_state(TallyState { total: 1 })
            .when_action(TallyAction::Add(2))
            .then_state(|state| assert_eq!(state.total, 3))
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
