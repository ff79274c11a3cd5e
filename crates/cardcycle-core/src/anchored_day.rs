//! Calendar arithmetic anchored to a day of month.
//!
//! Months are one-based throughout (1 = January). A requested day that does
//! not exist in the target month is clamped to that month's last day, never
//! rolled over into the following month. Everything operates on
//! [`NaiveDate`], so no time-of-day or timezone offset can shift a result.

use chrono::{Datelike, Days, NaiveDate};

use crate::CoreError;

pub use cardcycle_domain::wrap_day_of_month;

/// Number of days in `month` of `year`.
pub fn last_day_of_month(year: i32, month: u32) -> Result<u32, CoreError> {
    let (next_year, next_month) = add_months(year, month, 1)?;
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(
        CoreError::InvalidDate {
            year: next_year,
            month: next_month,
            day: 1,
        },
    )?;
    let last_current = first_next
        .pred_opt()
        .ok_or_else(|| CoreError::DateOutOfRange(format!("day before {}", first_next)))?;
    Ok(last_current.day())
}

/// Shifts a (year, month) pair by `delta` months, rolling the year as needed.
pub fn add_months(year: i32, month: u32, delta: i32) -> Result<(i32, u32), CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::InvalidMonth(month));
    }
    let index = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(delta);
    let shifted_year = i32::try_from(index.div_euclid(12)).map_err(|_| {
        CoreError::DateOutOfRange(format!("{}-{:02} shifted by {} months", year, month, delta))
    })?;
    let shifted_month = index.rem_euclid(12) as u32 + 1;
    Ok((shifted_year, shifted_month))
}

/// Returns `min(day, last day of the month)`.
pub fn adjust_day_for_month(day: u32, year: i32, month: u32) -> Result<u32, CoreError> {
    Ok(day.min(last_day_of_month(year, month)?))
}

/// Builds a date from calendar components with the day clamped to the month.
///
/// `build_date(2025, 4, 31)` is 2025-04-30, not 2025-05-01.
pub fn build_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CoreError> {
    let day = adjust_day_for_month(day, year, month)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CoreError::InvalidDate { year, month, day })
}

/// First date on or after `reference` that falls on `day` (clamped per month).
///
/// Reflexive: a reference already on the anchored day is returned unchanged.
pub fn next_occurrence_of_day(reference: NaiveDate, day: u32) -> Result<NaiveDate, CoreError> {
    let candidate = build_date(reference.year(), reference.month(), day)?;
    if candidate >= reference {
        return Ok(candidate);
    }
    let (year, month) = add_months(reference.year(), reference.month(), 1)?;
    build_date(year, month, day)
}

/// Last date on or before `reference` that falls on `day` (clamped per month).
///
/// Reflexive, like [`next_occurrence_of_day`].
pub fn previous_occurrence_of_day(
    reference: NaiveDate,
    day: u32,
) -> Result<NaiveDate, CoreError> {
    let candidate = build_date(reference.year(), reference.month(), day)?;
    if candidate <= reference {
        return Ok(candidate);
    }
    let (year, month) = add_months(reference.year(), reference.month(), -1)?;
    build_date(year, month, day)
}

/// Whole days from `a` to `b`; negative when `b` precedes `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// English month name, e.g. "February".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Month name and year, e.g. "February 2025".
pub fn period_label(date: NaiveDate) -> String {
    format!("{} {}", month_label(date), date.year())
}

pub fn next_day(date: NaiveDate) -> Result<NaiveDate, CoreError> {
    date.succ_opt()
        .ok_or_else(|| CoreError::DateOutOfRange(format!("day after {}", date)))
}

pub fn previous_day(date: NaiveDate) -> Result<NaiveDate, CoreError> {
    date.pred_opt()
        .ok_or_else(|| CoreError::DateOutOfRange(format!("day before {}", date)))
}

/// `date + days`, pinned to the last representable date instead of overflowing.
pub fn saturating_add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}
