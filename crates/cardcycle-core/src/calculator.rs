//! Billing cycle calculations for a single card configuration.
//!
//! Every public operation is a pure function of `(configuration, date)` and
//! never fails: invalid configurations and calendar edge cases degrade through
//! a [`FallbackChain`]. The `resolve_*` variants expose which tier produced
//! the answer; the plain variants return the value alone.

use chrono::{Datelike, NaiveDate};

use cardcycle_domain::{
    BillingPeriod, BillingSummary, CardConfiguration, LaunchPreview, LegacyDefaults, Precision,
    Resolved, ValidationReport, MAX_DAY_OF_MONTH, MIN_DAY_OF_MONTH,
};

use crate::anchored_day::{
    add_months, build_date, days_between, next_day, next_occurrence_of_day, period_label,
    previous_day, previous_occurrence_of_day, saturating_add_days,
};
use crate::validation::{ensure_valid, validate_configuration};
use crate::{CoreError, FallbackChain};

/// Length of the window returned when no period can be computed.
pub const DEFAULT_PERIOD_DAYS: u64 = 30;
/// Offset applied to a purchase when no launch date can be computed.
pub const DEFAULT_LAUNCH_OFFSET_DAYS: u64 = 45;
/// Months added to a purchase by the simplified launch rule.
const FALLBACK_LAUNCH_MONTHS: i32 = 2;

/// Stateless entry point for billing cycle questions.
#[derive(Debug, Default, Clone, Copy)]
pub struct BillingCalculator;

impl BillingCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_configuration(&self, config: &CardConfiguration) -> ValidationReport {
        validate_configuration(config)
    }

    /// Due and purchase days for records saved before those fields existed.
    pub fn resolve_legacy_defaults(&self, config: &CardConfiguration) -> LegacyDefaults {
        config.legacy_defaults()
    }

    /// Billing period containing `reference`.
    pub fn billing_period(&self, config: &CardConfiguration, reference: NaiveDate) -> BillingPeriod {
        self.resolve_billing_period(config, reference).into_value()
    }

    pub fn resolve_billing_period(
        &self,
        config: &CardConfiguration,
        reference: NaiveDate,
    ) -> Resolved<BillingPeriod> {
        FallbackChain::new("billing_period")
            .then(Precision::Exact, "anchored_closing", || {
                anchored_period(config, reference)
            })
            .then(Precision::Fallback, "month_boundary", || {
                month_boundary_period(config, reference)
            })
            .resolve(|| default_period(reference))
    }

    /// Date on which a purchase made on `purchase` falls due.
    pub fn launch_date(&self, purchase: NaiveDate, config: &CardConfiguration) -> NaiveDate {
        self.resolve_launch_date(purchase, config).into_value()
    }

    pub fn resolve_launch_date(
        &self,
        purchase: NaiveDate,
        config: &CardConfiguration,
    ) -> Resolved<NaiveDate> {
        FallbackChain::new("launch_date")
            .then(Precision::Exact, "closing_then_due", || {
                closing_then_due(purchase, config)
            })
            .then(Precision::Fallback, "two_months_ahead", || {
                two_months_ahead(purchase, config)
            })
            .resolve(|| saturating_add_days(purchase, DEFAULT_LAUNCH_OFFSET_DAYS))
    }

    pub fn is_in_current_period(&self, date: NaiveDate, config: &CardConfiguration) -> bool {
        self.billing_period(config, date).contains(date)
    }

    pub fn next_closing_date(&self, config: &CardConfiguration, reference: NaiveDate) -> NaiveDate {
        self.resolve_next_closing_date(config, reference).into_value()
    }

    pub fn resolve_next_closing_date(
        &self,
        config: &CardConfiguration,
        reference: NaiveDate,
    ) -> Resolved<NaiveDate> {
        next_anchor("next_closing_date", config, reference, config.closing_day)
    }

    pub fn next_due_date(&self, config: &CardConfiguration, reference: NaiveDate) -> NaiveDate {
        self.resolve_next_due_date(config, reference).into_value()
    }

    pub fn resolve_next_due_date(
        &self,
        config: &CardConfiguration,
        reference: NaiveDate,
    ) -> Resolved<NaiveDate> {
        next_anchor(
            "next_due_date",
            config,
            reference,
            config.effective_due_day(),
        )
    }

    /// Preferred purchase day when configured, otherwise the day after closing.
    pub fn best_purchase_day(&self, config: &CardConfiguration) -> u32 {
        config.legacy_defaults().preferred_purchase_day
    }

    pub fn comprehensive_summary(
        &self,
        config: &CardConfiguration,
        reference: NaiveDate,
    ) -> BillingSummary {
        self.resolve_comprehensive_summary(config, reference)
            .into_value()
    }

    /// Summary tagged with the least precise tier used by any component.
    pub fn resolve_comprehensive_summary(
        &self,
        config: &CardConfiguration,
        reference: NaiveDate,
    ) -> Resolved<BillingSummary> {
        let period = self.resolve_billing_period(config, reference);
        let closing = self.resolve_next_closing_date(config, reference);
        let due = self.resolve_next_due_date(config, reference);
        let precision = period.precision.max(closing.precision).max(due.precision);

        let summary = BillingSummary {
            days_until_closing: days_between(reference, closing.value),
            days_until_due: days_between(reference, due.value),
            next_closing_date: closing.value,
            next_due_date: due.value,
            best_purchase_day: self.best_purchase_day(config),
            period: period.value,
        };
        Resolved::new(summary, precision)
    }

    pub fn launch_preview(&self, purchase: NaiveDate, config: &CardConfiguration) -> LaunchPreview {
        self.resolve_launch_preview(purchase, config).into_value()
    }

    pub fn resolve_launch_preview(
        &self,
        purchase: NaiveDate,
        config: &CardConfiguration,
    ) -> Resolved<LaunchPreview> {
        let launch = self.resolve_launch_date(purchase, config);
        let period = self.resolve_billing_period(config, purchase);
        let precision = launch.precision.max(period.precision);
        let launch_date = launch.value;

        let preview = LaunchPreview {
            purchase_date: purchase,
            launch_date,
            launch_label: period_label(launch_date),
            period: period.value,
            days_until_due: days_between(purchase, launch_date),
            is_deferred: LaunchPreview::is_deferred_between(purchase, launch_date),
        };
        Resolved::new(preview, precision)
    }
}

fn build_period(start: NaiveDate, end: NaiveDate, reference: NaiveDate) -> BillingPeriod {
    BillingPeriod {
        start,
        end,
        reference_label: period_label(end),
        days_remaining: days_between(reference, end).max(0),
    }
}

// The previous closing is searched from the day before the reference, so a
// reference that is itself a closing date stays inside the period it closes.
fn anchored_period(
    config: &CardConfiguration,
    reference: NaiveDate,
) -> Result<BillingPeriod, CoreError> {
    ensure_valid(config)?;
    let previous_closing = previous_occurrence_of_day(previous_day(reference)?, config.closing_day)?;
    let start = next_day(previous_closing)?;
    let end = next_occurrence_of_day(start, config.closing_day)?;
    Ok(build_period(start, end, reference))
}

fn month_boundary_period(
    config: &CardConfiguration,
    reference: NaiveDate,
) -> Result<BillingPeriod, CoreError> {
    let closing_day = config.closing_day;
    if closing_day < MIN_DAY_OF_MONTH {
        return Err(CoreError::InvalidConfiguration(format!(
            "closing day {} cannot anchor a month",
            closing_day
        )));
    }
    let (year, month) = (reference.year(), reference.month());
    let closing_this_month = build_date(year, month, closing_day)?;

    let (start, end) = if reference > closing_this_month {
        let (next_year, next_month) = add_months(year, month, 1)?;
        (
            next_day(closing_this_month)?,
            build_date(next_year, next_month, closing_day)?,
        )
    } else {
        let (prev_year, prev_month) = add_months(year, month, -1)?;
        (
            next_day(build_date(prev_year, prev_month, closing_day)?)?,
            closing_this_month,
        )
    };
    Ok(build_period(start, end, reference))
}

fn default_period(reference: NaiveDate) -> BillingPeriod {
    let end = saturating_add_days(reference, DEFAULT_PERIOD_DAYS);
    build_period(reference, end, reference)
}

// Purchases are billed on the closing at or after the purchase and fall due
// in the calendar month following that closing.
fn closing_then_due(
    purchase: NaiveDate,
    config: &CardConfiguration,
) -> Result<NaiveDate, CoreError> {
    ensure_valid(config)?;
    let closing = next_occurrence_of_day(purchase, config.closing_day)?;
    let (year, month) = add_months(closing.year(), closing.month(), 1)?;
    build_date(year, month, config.effective_due_day())
}

fn two_months_ahead(
    purchase: NaiveDate,
    config: &CardConfiguration,
) -> Result<NaiveDate, CoreError> {
    let due_day = config.effective_due_day();
    if due_day < MIN_DAY_OF_MONTH {
        return Err(CoreError::InvalidConfiguration(format!(
            "due day {} cannot anchor a month",
            due_day
        )));
    }
    let (year, month) = add_months(purchase.year(), purchase.month(), FALLBACK_LAUNCH_MONTHS)?;
    build_date(year, month, due_day)
}

fn next_anchor(
    operation: &'static str,
    config: &CardConfiguration,
    reference: NaiveDate,
    day: u32,
) -> Resolved<NaiveDate> {
    FallbackChain::new(operation)
        .then(Precision::Exact, "anchored_day", || {
            ensure_valid(config)?;
            next_occurrence_of_day(reference, day)
        })
        .then(Precision::Fallback, "clamped_day", || {
            next_occurrence_of_day(reference, day.clamp(MIN_DAY_OF_MONTH, MAX_DAY_OF_MONTH))
        })
        .resolve(|| reference)
}
