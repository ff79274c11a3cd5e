//! Procedural validation of card configurations.

use cardcycle_domain::{is_day_of_month, CardConfiguration, ConfigIssue, ValidationReport};

use crate::CoreError;

/// Checks every field of `config` without modifying it.
pub fn validate_configuration(config: &CardConfiguration) -> ValidationReport {
    let mut issues = Vec::new();

    if !is_day_of_month(config.closing_day) {
        issues.push(ConfigIssue::ClosingDayOutOfRange {
            value: config.closing_day,
        });
    }

    if let Some(due) = config.due_day {
        if !is_day_of_month(due) {
            issues.push(ConfigIssue::DueDayOutOfRange { value: due });
        } else if due == config.closing_day {
            issues.push(ConfigIssue::DueDayEqualsClosingDay { day: due });
        }
    }

    if let Some(day) = config.preferred_purchase_day {
        if !is_day_of_month(day) {
            issues.push(ConfigIssue::PreferredPurchaseDayOutOfRange { value: day });
        }
    }

    ValidationReport::from_issues(issues)
}

pub(crate) fn ensure_valid(config: &CardConfiguration) -> Result<(), CoreError> {
    let report = validate_configuration(config);
    if report.is_valid() {
        Ok(())
    } else {
        Err(CoreError::InvalidConfiguration(report.joined()))
    }
}
