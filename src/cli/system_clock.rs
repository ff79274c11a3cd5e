use chrono::{DateTime, Utc};

use cardcycle_core::Clock;

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
