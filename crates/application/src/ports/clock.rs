//! Clock port

use chrono::{DateTime, Utc};

/// Source of the wall-clock time a run is stamped with.
///
/// Elapsed durations are measured with `Instant`; only the run's
/// `started_at` comes from here, so tests can pin it.
pub trait Clock: Send + Sync {
    /// Current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}
