use cardcycle::{init, BillingCalculator, CardConfiguration, Precision};
use cardcycle_core::anchored_day::{build_date, days_between, next_occurrence_of_day};
use chrono::{Datelike, Duration, NaiveDate};
use insta::assert_snapshot;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sweep() -> impl Iterator<Item = NaiveDate> {
    let start = date(2023, 11, 1);
    (0..800).map(move |offset| start + Duration::days(offset))
}

#[test]
fn periods_tile_the_calendar_without_gaps() {
    init();
    let calc = BillingCalculator::new();
    for closing_day in [1, 15, 28, 29, 30, 31] {
        let config = CardConfiguration::new(closing_day);
        let mut previous = calc.billing_period(&config, date(2023, 11, 1));
        for day in sweep().skip(1) {
            let period = calc.billing_period(&config, day);
            if period != previous {
                assert_eq!(
                    period.start,
                    previous.end + Duration::days(1),
                    "closing day {closing_day}: gap before {day}"
                );
                previous = period;
            }
        }
    }
}

#[test]
fn period_end_is_always_a_clamped_closing_day() {
    let calc = BillingCalculator::new();
    for closing_day in 1..=31 {
        let config = CardConfiguration::new(closing_day);
        for day in sweep().step_by(7) {
            let resolved = calc.resolve_billing_period(&config, day);
            assert_eq!(resolved.precision, Precision::Exact);
            let end = resolved.value.end;
            assert_eq!(
                end,
                build_date(end.year(), end.month(), closing_day).unwrap(),
                "closing day {closing_day} on {day}"
            );
            assert_eq!(
                resolved.value.days_remaining,
                days_between(day, end).max(0)
            );
        }
    }
}

#[test]
fn purchases_in_one_period_share_a_launch_date() {
    let calc = BillingCalculator::new();
    let config = CardConfiguration::new(10).with_due_day(17);
    let period = calc.billing_period(&config, date(2025, 5, 20));
    let expected = calc.launch_date(period.start, &config);

    let mut day = period.start;
    while day <= period.end {
        assert_eq!(calc.launch_date(day, &config), expected, "purchase on {day}");
        day += Duration::days(1);
    }
    assert_eq!(expected, date(2025, 7, 17));
}

#[test]
fn launch_is_never_before_purchase() {
    let calc = BillingCalculator::new();
    for closing_day in 1..=31 {
        let config = CardConfiguration::new(closing_day);
        for day in sweep().step_by(3) {
            let preview = calc.launch_preview(day, &config);
            assert!(preview.launch_date > day);
            assert_eq!(preview.days_until_due, days_between(day, preview.launch_date));
        }
    }
}

#[test]
fn reflexivity_holds_for_every_day_of_a_leap_year() {
    for day in (0..366).map(|offset| date(2024, 1, 1) + Duration::days(offset)) {
        assert_eq!(next_occurrence_of_day(day, day.day()).unwrap(), day);
    }
}

#[test]
fn period_label_snapshot() {
    let calc = BillingCalculator::new();
    let period = calc.billing_period(&CardConfiguration::new(15), date(2025, 2, 10));
    assert_snapshot!(period.reference_label, @"February 2025");
}

#[test]
fn validation_message_snapshot() {
    let calc = BillingCalculator::new();
    let report = calc.validate_configuration(&CardConfiguration::new(15).with_due_day(15));
    assert_snapshot!(report.joined(), @"due day must differ from closing day (both are 15)");
}
