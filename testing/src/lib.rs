//! # Todolist Testing
//!
//! Testing utilities and helpers for the todolist architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - Test helpers and builders
//! - Assertion helpers for reducers
//!
//! ## Example
//!
//! ```ignore
//! use todolist_testing::{ReducerTest, assertions};
//!
//! #[test]
//! fn test_add_todo() {
//!     ReducerTest::new(TodoReducer)
//!         .with_env(test_environment())
//!         .given_state(TodoState::default())
//!         .when_action(TodoAction::Add {
//!             title: "Buy milk".to_string(),
//!             content: "2 liters".to_string(),
//!         })
//!         .then_state(|state| {
//!             assert_eq!(state.todos.len(), 1);
//!         })
//!         .then_effects(|effects| {
//!             assertions::assert_no_effects(effects);
//!         })
//!         .run();
//! }
//! ```

use chrono::{DateTime, Utc};
use todolist_core::environment::{Clock, IdGenerator};

/// Ergonomic reducer testing with Given-When-Then syntax
pub mod reducer_test;

/// Mock implementations of Environment traits
///
/// This module contains:
/// - `FixedClock`: Deterministic time
/// - `SequentialIdGenerator`: Predictable IDs
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todolist_testing::mocks::FixedClock;
    /// use todolist_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
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
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Sequential id generator for predictable test ids
    ///
    /// Returns 1, 2, 3, ... in order, making assertions on generated ids
    /// straightforward.
    ///
    /// # Example
    ///
    /// ```
    /// use todolist_testing::mocks::SequentialIdGenerator;
    /// use todolist_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), 1);
    /// assert_eq!(ids.next_id(), 2);
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator starting at 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Create a generator starting at the given value
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::SeqCst)
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Initialize tracing for tests
    ///
    /// Installs a fmt subscriber writing to the test writer, honoring
    /// `RUST_LOG` and falling back to `info`. Safe to call from multiple
    /// tests; only the first call installs the subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIdGenerator, test_clock};
pub use reducer_test::{ReducerTest, assertions};
