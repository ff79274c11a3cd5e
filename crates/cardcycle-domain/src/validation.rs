//! Configuration validation outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single problem found in a card configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigIssue {
    ClosingDayOutOfRange { value: u32 },
    DueDayOutOfRange { value: u32 },
    DueDayEqualsClosingDay { day: u32 },
    PreferredPurchaseDayOutOfRange { value: u32 },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::ClosingDayOutOfRange { value } => {
                write!(f, "closing day must be between 1 and 31 (got {})", value)
            }
            ConfigIssue::DueDayOutOfRange { value } => {
                write!(f, "due day must be between 1 and 31 (got {})", value)
            }
            ConfigIssue::DueDayEqualsClosingDay { day } => write!(
                f,
                "due day must differ from closing day (both are {})",
                day
            ),
            ConfigIssue::PreferredPurchaseDayOutOfRange { value } => write!(
                f,
                "preferred purchase day must be between 1 and 31 (got {})",
                value
            ),
        }
    }
}

/// Result of validating a card configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub issues: Vec<ConfigIssue>,
}

impl ValidationReport {
    pub fn from_issues(issues: Vec<ConfigIssue>) -> Self {
        Self {
            valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
            issues,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// All messages joined into one line, for logs and error values.
    pub fn joined(&self) -> String {
        self.errors.join("; ")
    }
}
