//! Clock port.

use snutz_domain::time::{self, Timestamp};

/// Source of the current time used for relative labels and liveness.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
