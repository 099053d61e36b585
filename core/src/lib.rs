//! # Samyak Core
//!
//! Core traits and types for the Samyak registration client.
//!
//! The client is built on a small unidirectional-data-flow architecture:
//!
//! - **State**: owned domain state for a feature
//! - **Action**: every possible input (user interactions, network results)
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: a *description* of a side effect, executed by the runtime
//! - **Environment**: injected dependencies behind traits
//!
//! Reducers never perform I/O. A network call is an [`effect::Effect::Future`]
//! returned from the reducer; the runtime awaits it and feeds the resulting
//! action back in. This keeps every state transition deterministic and
//! testable without a server.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

/// The core trait for business logic.
///
/// Reducers are pure: they validate the action against current state, update
/// state in place, and return effect descriptions for the runtime to execute.
pub mod reducer {
    use super::effect::{Effect, Effects};

    /// Pure transition function for a feature.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for RegistrationReducer {
    ///     type State = RegistrationState;
    ///     type Action = RegistrationAction;
    ///     type Environment = RegistrationEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut RegistrationState,
    ///         action: RegistrationAction,
    ///         env: &RegistrationEnvironment,
    ///     ) -> Effects<RegistrationAction> {
    ///         match action {
    ///             RegistrationAction::LoadCatalog => { /* ... */ }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects.
        ///
        /// The runtime calls this while holding the state lock; the
        /// implementation must not block or perform I/O directly.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Effects<Self::Action>;

        /// Convenience for the effect vector returned by [`Reducer::reduce`].
        #[must_use]
        fn no_effects() -> Effects<Self::Action> {
            Effects::new()
        }
    }
}

/// Side effect descriptions returned by reducers.
pub mod effect {
    use smallvec::SmallVec;
    use std::future::Future;
    use std::pin::Pin;

    /// Effect vector type returned by reducers.
    ///
    /// Most actions produce zero or one effect; `SmallVec<[_; 4]>` keeps the
    /// common cases off the heap.
    pub type Effects<Action> = SmallVec<[Effect<Action>; 4]>;

    /// A description of a side effect to be executed by the runtime.
    ///
    /// Effects are values, not execution. The reducer returns them and the
    /// `Store` interprets them, feeding any produced actions back into the
    /// reducer.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation.
        ///
        /// Returns `Option<Action>`; if `Some`, the action is fed back into
        /// the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    impl<Action> Effect<Action> {
        /// Wrap an async computation as an effect.
        pub fn future<F>(fut: F) -> Self
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }
}

/// Dependency injection traits shared across features.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Abstracts time so tests are deterministic.
    ///
    /// Production uses [`SystemClock`]; tests use a fixed clock.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
