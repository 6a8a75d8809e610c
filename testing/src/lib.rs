//! # Reflux Testing
//!
//! Testing utilities and helpers for the Reflux state engine.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for a single reducer
//! - [`SubscriberProbe`]: A subscriber that counts and records notifications
//! - [`init_test_tracing`]: Log capture for tests
//!
//! ## Example
//!
//! ```ignore
//! use reflux_testing::SubscriberProbe;
//! use reflux_runtime::Store;
//!
//! #[test]
//! fn test_add_notifies() {
//!     let probe = SubscriberProbe::new();
//!     let mut store = Store::new(AppState::default(), todo_reducers());
//!     store.set_subscriber(probe.recorder(|s: &AppState| s.items.len()));
//!
//!     store.dispatch(TodoAction::add("Hello")).unwrap();
//!
//!     assert_eq!(probe.count(), 1);
//!     assert_eq!(probe.last(), Some(1));
//! }
//! ```

/// Subscriber probes for counting and recording notifications
pub mod probe;


pub use probe::SubscriberProbe;
pub use reducer_test::{ReducerTest, assertions};

/// Install a `tracing` subscriber that writes through the test harness
///
/// Output is captured per test and shown only for failing tests. The filter
/// comes from `RUST_LOG` and defaults to `debug`. Safe to call from every
/// test: only the first call installs anything.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_init_is_repeatable() {
        init_test_tracing();
        init_test_tracing();
    }
}
