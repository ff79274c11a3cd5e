use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use cardcycle_domain::{CardConfiguration, CardProfile};

use crate::ConfigError;

const DEFAULT_DIR_NAME: &str = ".cardcycle";
const HOME_ENV: &str = "CARDCYCLE_HOME";

/// Stores user preferences and the cards the user has saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_card: Option<String>,
    #[serde(default)]
    pub cards: Vec<CardProfile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_card: None,
            cards: Vec::new(),
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Data directory: `$CARDCYCLE_HOME`, otherwise `~/.cardcycle`.
    pub fn resolve_home_dir() -> PathBuf {
        if let Some(custom) = std::env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn card(&self, name: &str) -> Option<&CardProfile> {
        self.cards.iter().find(|card| card.matches_name(name))
    }

    /// Card named by `default_card`, if it still exists.
    pub fn default_card(&self) -> Option<&CardProfile> {
        self.default_card
            .as_deref()
            .and_then(|name| self.card(name))
    }

    /// Inserts `profile`, replacing any card with the same name.
    ///
    /// Returns the replaced card. A replacement keeps the original id.
    pub fn upsert_card(&mut self, mut profile: CardProfile) -> Option<CardProfile> {
        match self
            .cards
            .iter_mut()
            .find(|card| card.matches_name(&profile.name))
        {
            Some(existing) => {
                profile.id = existing.id;
                Some(std::mem::replace(existing, profile))
            }
            None => {
                self.cards.push(profile);
                None
            }
        }
    }

    pub fn remove_card(&mut self, name: &str) -> Result<CardProfile, ConfigError> {
        let index = self
            .cards
            .iter()
            .position(|card| card.matches_name(name))
            .ok_or_else(|| ConfigError::CardNotFound(name.to_string()))?;
        let removed = self.cards.remove(index);
        if self
            .default_card
            .as_deref()
            .is_some_and(|default| removed.matches_name(default))
        {
            self.default_card = None;
        }
        Ok(removed)
    }

    pub fn set_default_card(&mut self, name: &str) -> Result<(), ConfigError> {
        let card = self
            .card(name)
            .ok_or_else(|| ConfigError::CardNotFound(name.to_string()))?;
        self.default_card = Some(card.name.clone());
        Ok(())
    }

    /// Fills in due and purchase days on cards saved before those fields
    /// existed. Returns how many cards changed.
    pub fn migrate_legacy_cards(&mut self) -> usize {
        let mut migrated = 0;
        for card in &mut self.cards {
            let filled: CardConfiguration = card.configuration.with_legacy_defaults();
            if filled != card.configuration {
                card.configuration = filled;
                migrated += 1;
            }
        }
        migrated
    }
}
