//! Metric names recorded by the Store.
//!
//! The Store records through the `metrics` facade only. Nothing is exported
//! unless the host installs a recorder; without one the macros are no-ops.
//!
//! Every metric carries a `store` label with [`StoreConfig::name`].
//!
//! [`StoreConfig::name`]: crate::StoreConfig::name
//!
//! # Example
//!
//! ```
//! use reflux_runtime::metrics::{describe_store_metrics, DISPATCH_TOTAL};
//!
//! // Call once after installing a recorder
//! describe_store_metrics();
//! assert_eq!(DISPATCH_TOTAL, "reflux_store_dispatch_total");
//! ```

use metrics::{Unit, describe_counter, describe_histogram};

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Dispatches attempted, successful or not
pub const DISPATCH_TOTAL: &str = "reflux_store_dispatch_total";

/// Dispatches stopped by a failing reducer
pub const DISPATCH_FAILED_TOTAL: &str = "reflux_store_dispatch_failed_total";

/// Time spent running the reducer chain for one dispatch
pub const REDUCE_DURATION_SECONDS: &str = "reflux_store_reduce_duration_seconds";

/// Subscriber notifications
pub const SUBSCRIBER_NOTIFIED_TOTAL: &str = "reflux_store_subscriber_notified_total";

/// Register descriptions for all Store metrics with the installed recorder.
pub fn describe_store_metrics() {
    describe_counter!(
        DISPATCH_TOTAL,
        Unit::Count,
        "Total number of actions dispatched to the store"
    );
    describe_counter!(
        DISPATCH_FAILED_TOTAL,
        Unit::Count,
        "Total number of dispatches stopped by a reducer error"
    );
    describe_histogram!(
        REDUCE_DURATION_SECONDS,
        Unit::Seconds,
        "Time taken to run the reducer chain"
    );
    describe_counter!(
        SUBSCRIBER_NOTIFIED_TOTAL,
        Unit::Count,
        "Total number of subscriber notifications"
    );
}
