//! # Samyak Testing
//!
//! Testing utilities for the registration client:
//!
//! - [`ReducerTest`]: fluent Given/When/Then builder for reducer tests
//! - [`assertions`]: helpers for asserting on returned effects
//! - [`mocks`]: deterministic environment implementations
//!
//! ## Example
//!
//! ```ignore
//! use samyak_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(RegistrationReducer)
//!     .with_env(test_environment())
//!     .given_state(RegistrationState::default())
//!     .when_action(RegistrationAction::QueryChanged("hack".into()))
//!     .then_state(|state| assert_eq!(state.query, "hack"))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Deterministic mock implementations of environment traits.
pub mod mocks {
    use chrono::{DateTime, Utc};
    use samyak_core::environment::Clock;

    /// Fixed clock for deterministic tests.
    ///
    /// Always returns the same instant, making timestamps reproducible.
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }

        /// Create a fixed clock at the Unix epoch
        #[must_use]
        pub fn epoch() -> Self {
            Self {
                time: DateTime::<Utc>::UNIX_EPOCH,
            }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }
}
