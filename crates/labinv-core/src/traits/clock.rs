//! Time source used for identities and last-modified stamps.

use chrono::{DateTime, Utc};

/// Supplies the current time.
///
/// Services take an `Arc<dyn Clock>` so tests can pin time and make
/// timestamp-derived storage ids deterministic.
pub trait Clock: Send + Sync + std::fmt::Debug + 'static {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
