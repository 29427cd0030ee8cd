//! Wall-clock access for timestamp stamping

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

/// Clock shared between use-cases and repositories.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Returns a clock backed by the system time.
pub fn system_clock() -> SharedClock {
    Arc::new(DefaultClock)
}

/// Current time as epoch milliseconds.
pub fn now_millis(clock: &(dyn Clock + Send + Sync)) -> i64 {
    clock.utc().timestamp_millis()
}
