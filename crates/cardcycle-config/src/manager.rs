use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Config, ConfigError};

pub const CONFIG_BACKUP_SCHEMA_VERSION: u32 = 1;
const BACKUP_EXTENSION: &str = "json";
const BACKUP_PREFIX: &str = "config";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";

/// On-disk layout of a configuration backup.
#[derive(Debug, Serialize, Deserialize)]
struct BackupEnvelope {
    schema_version: u32,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    config: Config,
}

/// Handles persistence and backup management for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    backups_dir: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf, backups_dir: PathBuf) -> Self {
        Self {
            config_path,
            backups_dir,
        }
    }

    /// Lays out `<base>/config/config.json` and `<base>/config/backups/`.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        let backups_dir = config_dir.join("backups");
        fs::create_dir_all(&backups_dir)?;
        Ok(Self::new(config_dir.join("config.json"), backups_dir))
    }

    /// Manager rooted at [`Config::resolve_home_dir`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_base_dir(Config::resolve_home_dir())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Loads the saved configuration, or the default when none exists yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        tracing::debug!(
            path = %self.config_path.display(),
            cards = config.cards.len(),
            "config saved"
        );
        Ok(())
    }

    /// Writes a timestamped backup and returns its file name.
    pub fn backup(&self, config: &Config, note: Option<&str>) -> Result<String, ConfigError> {
        fs::create_dir_all(&self.backups_dir)?;
        let created_at = Utc::now();
        let label = sanitize_note(note);
        let mut name = format!(
            "{}_{}",
            BACKUP_PREFIX,
            created_at.format(BACKUP_TIMESTAMP_FORMAT)
        );
        if let Some(label) = &label {
            name.push('_');
            name.push_str(label);
        }
        name.push('.');
        name.push_str(BACKUP_EXTENSION);

        let envelope = BackupEnvelope {
            schema_version: CONFIG_BACKUP_SCHEMA_VERSION,
            created_at,
            note: label,
            config: config.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        write_file(&self.backups_dir.join(&name), &json)?;
        tracing::info!(backup = %name, "configuration backup written");
        Ok(name)
    }

    /// Reads a backup. Plain config documents without an envelope are accepted.
    pub fn restore(&self, backup_name: &str) -> Result<Config, ConfigError> {
        let path = self.backups_dir.join(backup_name);
        if !path.is_file() {
            return Err(ConfigError::BackupNotFound(backup_name.to_string()));
        }
        let data = fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(&data)?;
        if value.get("schema_version").is_some() {
            let envelope: BackupEnvelope = serde_json::from_value(value)?;
            Ok(envelope.config)
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    /// Backup file names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>, ConfigError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(name.to_string());
            }
        }
        entries.sort_by_key(|name| Reverse(parse_timestamp(name)));
        Ok(entries)
    }
}

fn sanitize_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || matches!(ch, '-' | '.' | '_'))
            && !sanitized.is_empty()
            && !last_dash
        {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// Names look like `config_20250210_093000[_note].json`.
fn parse_timestamp(name: &str) -> Option<NaiveDateTime> {
    let stem = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let rest = stem.strip_prefix(&format!("{}_", BACKUP_PREFIX))?;
    let stamp = rest.get(..15)?;
    NaiveDateTime::parse_from_str(stamp, BACKUP_TIMESTAMP_FORMAT).ok()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
