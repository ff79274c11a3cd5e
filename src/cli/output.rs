use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use serde::Serialize;

use crate::errors::CliError;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    if !prefs.color_enabled {
        colored::control::set_override(false);
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> Option<&'static str> {
    match kind {
        MessageKind::Success => Some("OK"),
        MessageKind::Warning => Some("WARNING"),
        MessageKind::Error => Some("ERROR"),
        MessageKind::Info | MessageKind::Section => None,
    }
}

pub(crate) fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let base = match (kind, label(kind)) {
        (MessageKind::Section, _) => format!("=== {} ===", text.trim()),
        (_, Some(label)) => format!("{label}: {text}"),
        (_, None) => text,
    };

    if !prefs.color_enabled {
        return base;
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

/// Warnings and errors go to stderr so `--json` output stays parseable.
pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = format_message(kind, message, &preferences());
    match kind {
        MessageKind::Warning | MessageKind::Error => eprintln!("{}", formatted),
        MessageKind::Section => println!("\n{}", formatted),
        MessageKind::Info | MessageKind::Success => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints `value` as pretty JSON on stdout.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints an aligned `label : value` row.
pub fn field(label: &str, value: impl fmt::Display) {
    info(format!("  {:<16}: {}", label, value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_carry_labels_without_color() {
        let prefs = OutputPreferences {
            color_enabled: false,
        };
        assert_eq!(
            format_message(MessageKind::Warning, "careful", &prefs),
            "WARNING: careful"
        );
        assert_eq!(
            format_message(MessageKind::Section, " Period ", &prefs),
            "=== Period ==="
        );
        assert_eq!(format_message(MessageKind::Info, "plain", &prefs), "plain");
    }
}
