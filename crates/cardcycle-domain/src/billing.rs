//! Value objects produced by the billing cycle calculator.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date range between two consecutive closing dates.
///
/// `start` is the day after the previous closing, `end` the next closing
/// date at or after the reference date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub reference_label: String,
    pub days_remaining: i64,
}

impl BillingPeriod {
    /// Returns `true` when `date` lies within `start..=end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered by the period, both ends included.
    pub fn length_in_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Read-only aggregate of everything a card screen shows at once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillingSummary {
    pub period: BillingPeriod,
    pub next_closing_date: NaiveDate,
    pub next_due_date: NaiveDate,
    pub days_until_closing: i64,
    pub days_until_due: i64,
    pub best_purchase_day: u32,
}

/// Describes when, and on which statement, a purchase will appear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaunchPreview {
    pub purchase_date: NaiveDate,
    pub launch_date: NaiveDate,
    pub launch_label: String,
    pub period: BillingPeriod,
    pub days_until_due: i64,
    pub is_deferred: bool,
}

impl LaunchPreview {
    /// A launch is deferred when it lands in another calendar month than the purchase.
    pub fn is_deferred_between(purchase: NaiveDate, launch: NaiveDate) -> bool {
        (purchase.year(), purchase.month()) != (launch.year(), launch.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_contains_both_boundaries() {
        let period = BillingPeriod {
            start: date(2025, 1, 16),
            end: date(2025, 2, 15),
            reference_label: "February 2025".into(),
            days_remaining: 5,
        };
        assert!(period.contains(date(2025, 1, 16)));
        assert!(period.contains(date(2025, 2, 15)));
        assert!(!period.contains(date(2025, 2, 16)));
        assert_eq!(period.length_in_days(), 31);
    }

    #[test]
    fn deferral_compares_year_and_month() {
        assert!(!LaunchPreview::is_deferred_between(
            date(2025, 3, 1),
            date(2025, 3, 31)
        ));
        assert!(LaunchPreview::is_deferred_between(
            date(2025, 3, 1),
            date(2026, 3, 1)
        ));
        assert!(LaunchPreview::is_deferred_between(
            date(2025, 12, 20),
            date(2026, 1, 5)
        ));
    }
}
