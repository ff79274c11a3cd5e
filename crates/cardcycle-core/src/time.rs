use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Clock abstracts access to the current timestamp so callers remain deterministic in tests.
///
/// The calculator itself never consults a clock; boundary code resolves "today"
/// once and passes the date in explicitly.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock pinned to a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.date.and_time(NaiveTime::MIN), Utc)
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}
