//! Store metrics.
//!
//! Recorded through the `metrics` facade. Nothing is exported by this crate:
//! recording is a no-op until the host application installs a recorder.
//!
//! | Name | Kind | Meaning |
//! |------|------|---------|
//! | `store.dispatch.total` | counter | Completed dispatches |
//! | `store.reducer.duration_seconds` | histogram | Time spent in the reducer per dispatch |
//! | `store.listeners.notified` | histogram | Listeners called per dispatch |
//!
//! Every metric carries a `store` label with the store name.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Completed dispatches
pub const DISPATCH_TOTAL: &str = "store.dispatch.total";
/// Reducer time per dispatch
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";
/// Listeners notified per dispatch
pub const LISTENERS_NOTIFIED: &str = "store.listeners.notified";

/// Register descriptions for all store metrics.
///
/// Call once after installing a recorder.
pub fn describe_store_metrics() {
    describe_counter!(DISPATCH_TOTAL, "Total number of actions dispatched to a store");
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        metrics::Unit::Seconds,
        "Time taken by the reducer for one dispatch"
    );
    describe_histogram!(
        LISTENERS_NOTIFIED,
        metrics::Unit::Count,
        "Number of listeners called after one dispatch"
    );
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record one completed dispatch.
    #[allow(clippy::cast_precision_loss)]
    pub fn record_dispatch(store: &str, reduce_time: Duration, listeners: usize) {
        let label = store.to_string();
        counter!(DISPATCH_TOTAL, "store" => label.clone()).increment(1);
        histogram!(REDUCER_DURATION_SECONDS, "store" => label.clone())
            .record(reduce_time.as_secs_f64());
        histogram!(LISTENERS_NOTIFIED, "store" => label).record(listeners as f64);
    }
}
