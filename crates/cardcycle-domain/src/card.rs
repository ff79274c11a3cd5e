//! Credit-card billing configuration and saved card profiles.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Days added to the closing day when a card has no explicit due day.
pub const DEFAULT_DUE_DAY_OFFSET: u32 = 10;

/// Billing anchors for a single card.
///
/// Values are stored raw so that out-of-range records loaded from older
/// data can still be represented; validity is checked procedurally before
/// any calculation. Older records used camelCase field names, which are
/// accepted on input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardConfiguration {
    #[serde(alias = "closingDay")]
    pub closing_day: u32,
    #[serde(default, alias = "dueDay", skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
    #[serde(
        default,
        alias = "preferredPurchaseDay",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_purchase_day: Option<u32>,
}

impl CardConfiguration {
    pub fn new(closing_day: u32) -> Self {
        Self {
            closing_day,
            due_day: None,
            preferred_purchase_day: None,
        }
    }

    pub fn with_due_day(mut self, due_day: u32) -> Self {
        self.due_day = Some(due_day);
        self
    }

    pub fn with_preferred_purchase_day(mut self, day: u32) -> Self {
        self.preferred_purchase_day = Some(day);
        self
    }

    /// Due day derived from the closing day (`closing + 10`, wrapped).
    pub fn default_due_day(&self) -> u32 {
        wrap_day_of_month(self.closing_day.saturating_add(DEFAULT_DUE_DAY_OFFSET))
    }

    /// Purchase day derived from the closing day (`closing + 1`, wrapped).
    pub fn default_purchase_day(&self) -> u32 {
        wrap_day_of_month(self.closing_day.saturating_add(1))
    }

    /// Explicit due day when configured, otherwise the derived default.
    pub fn effective_due_day(&self) -> u32 {
        self.due_day.unwrap_or_else(|| self.default_due_day())
    }

    /// Preferred purchase day when it is a valid day of month, otherwise the
    /// derived default.
    pub fn effective_purchase_day(&self) -> u32 {
        self.preferred_purchase_day
            .filter(|day| is_day_of_month(*day))
            .unwrap_or_else(|| self.default_purchase_day())
    }

    /// Defaults applied to records predating the optional fields.
    pub fn legacy_defaults(&self) -> LegacyDefaults {
        LegacyDefaults {
            due_day: self.effective_due_day(),
            preferred_purchase_day: self.effective_purchase_day(),
        }
    }

    /// Returns a copy with both optional fields materialized.
    pub fn with_legacy_defaults(&self) -> Self {
        let defaults = self.legacy_defaults();
        Self {
            closing_day: self.closing_day,
            due_day: Some(defaults.due_day),
            preferred_purchase_day: Some(defaults.preferred_purchase_day),
        }
    }
}

impl fmt::Display for CardConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "closes on {}", self.closing_day)?;
        match self.due_day {
            Some(due) => write!(f, ", due on {}", due)?,
            None => write!(f, ", due on {} (derived)", self.default_due_day())?,
        }
        if let Some(day) = self.preferred_purchase_day {
            write!(f, ", buy on {}", day)?;
        }
        Ok(())
    }
}

/// Due and preferred purchase days resolved for a configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegacyDefaults {
    pub due_day: u32,
    pub preferred_purchase_day: u32,
}

/// A named card saved in the user's configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardProfile {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub configuration: CardConfiguration,
}

impl CardProfile {
    pub fn new(name: impl Into<String>, configuration: CardConfiguration) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            configuration,
        }
    }

    /// Case-insensitive name comparison used for lookups.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

impl Displayable for CardProfile {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_defaults_wrap_past_month_end() {
        let config = CardConfiguration::new(25);
        assert_eq!(config.default_due_day(), 4);
        assert_eq!(config.default_purchase_day(), 26);

        let late = CardConfiguration::new(31);
        assert_eq!(late.default_purchase_day(), 1);
        assert_eq!(late.default_due_day(), 10);
    }

    #[test]
    fn explicit_fields_win_over_derived_defaults() {
        let config = CardConfiguration::new(5)
            .with_due_day(20)
            .with_preferred_purchase_day(7);
        let defaults = config.legacy_defaults();
        assert_eq!(defaults.due_day, 20);
        assert_eq!(defaults.preferred_purchase_day, 7);
    }

    #[test]
    fn out_of_range_purchase_day_falls_back_to_day_after_closing() {
        let config = CardConfiguration::new(15).with_preferred_purchase_day(50);
        assert_eq!(config.effective_purchase_day(), 16);
        assert_eq!(config.legacy_defaults().preferred_purchase_day, 16);
        assert_eq!(config.with_legacy_defaults().preferred_purchase_day, Some(16));
    }

    #[test]
    fn legacy_camel_case_record_deserializes() {
        let json = r#"{"closingDay": 12, "dueDay": null}"#;
        let config: CardConfiguration = serde_json::from_str(json).expect("legacy record");
        assert_eq!(config, CardConfiguration::new(12));

        let filled = config.with_legacy_defaults();
        assert_eq!(filled.due_day, Some(22));
        assert_eq!(filled.preferred_purchase_day, Some(13));
    }

    #[test]
    fn profile_serializes_configuration_inline() {
        let profile = CardProfile::new("Travel", CardConfiguration::new(3).with_due_day(13));
        let value = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(value["closing_day"], 3);
        assert_eq!(value["due_day"], 13);
        assert!(value.get("preferred_purchase_day").is_none());
        assert!(profile.matches_name("  travel "));
    }
}
