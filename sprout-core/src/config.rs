//! Configuration management
//!
//! Settings live in `<sprout_dir>/settings.json`:
//! ```json
//! {
//!   "ai": { "model": "gemini-2.5-flash", "offline": false },
//!   "focus": { "durationMinutes": 25 },
//!   "sunlight": { "threshold": 100, "sampleIntervalMs": 500 }
//! }
//! ```
//! Keys the app does not know about are kept when saving, at every level.
//! Environment overrides apply to the loaded `Config` only and are never
//! written back.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapters::gemini::DEFAULT_MODEL;
use crate::services::focus::DEFAULT_FOCUS_MINUTES;
use crate::services::sunlight::{CheckInSettings, DEFAULT_SAMPLE_INTERVAL, DEFAULT_THRESHOLD};

/// API key variables, first one set wins
pub const API_KEY_VARS: [&str; 3] = ["SPROUT_API_KEY", "GEMINI_API_KEY", "API_KEY"];

pub const OFFLINE_VAR: &str = "SPROUT_OFFLINE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    ai: AiSettings,
    #[serde(default)]
    focus: FocusSettings,
    #[serde(default)]
    sunlight: SunlightSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AiSettings {
    model: String,
    offline: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            offline: false,
            other: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FocusSettings {
    duration_minutes: u32,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_FOCUS_MINUTES,
            other: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SunlightSettings {
    threshold: u8,
    sample_interval_ms: u64,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for SunlightSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL.as_millis() as u64,
            other: HashMap::new(),
        }
    }
}

/// Sprout configuration (flattened view of settings.json plus env)
#[derive(Debug, Clone)]
pub struct Config {
    pub ai_model: String,
    /// Value stored in settings.json; see `is_offline` for the effective one
    pub offline: bool,
    pub focus_minutes: u32,
    pub sunlight_threshold: u8,
    pub sample_interval_ms: u64,
    api_key: Option<String>,
    offline_override: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_settings(SettingsFile::default())
    }
}

impl Config {
    fn from_settings(raw: SettingsFile) -> Self {
        Self {
            ai_model: raw.ai.model,
            offline: raw.ai.offline,
            focus_minutes: raw.focus.duration_minutes,
            sunlight_threshold: raw.sunlight.threshold,
            sample_interval_ms: raw.sunlight.sample_interval_ms,
            api_key: None,
            offline_override: None,
        }
    }

    /// Load settings.json and apply environment overrides
    pub fn load(sprout_dir: &Path) -> Result<Self> {
        Self::load_with_env(sprout_dir, |name| std::env::var(name).ok())
    }

    /// Like `load`, reading variables through `env`
    pub fn load_with_env<F>(sprout_dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = match read_settings_file(sprout_dir)? {
            Some(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed settings.json: {}", e);
                SettingsFile::default()
            }),
            None => SettingsFile::default(),
        };
        let mut config = Self::from_settings(settings);

        config.offline_override = match env(OFFLINE_VAR).as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
            Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
            _ => None,
        };

        config.api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| env(name))
            .find(|value| !value.trim().is_empty());

        Ok(config)
    }

    /// Save managed fields, keeping everything else in the file.
    ///
    /// Fails without touching the file if the existing content is not
    /// valid settings JSON.
    pub fn save(&self, sprout_dir: &Path) -> Result<()> {
        let settings_path = sprout_dir.join("settings.json");
        let mut settings: SettingsFile = match read_settings_file(sprout_dir)? {
            Some(content) => serde_json::from_str(&content).with_context(|| {
                format!("Refusing to overwrite malformed {:?}", settings_path)
            })?,
            None => SettingsFile::default(),
        };

        settings.ai.model = self.ai_model.clone();
        settings.ai.offline = self.offline;
        settings.focus.duration_minutes = self.focus_minutes;
        settings.sunlight.threshold = self.sunlight_threshold;
        settings.sunlight.sample_interval_ms = self.sample_interval_ms;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {:?}", settings_path))?;
        Ok(())
    }

    /// API key from the environment; never stored in settings.json
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Offline mode after the `SPROUT_OFFLINE` override
    pub fn is_offline(&self) -> bool {
        self.offline_override.unwrap_or(self.offline)
    }

    /// Set by the environment for this run only
    pub fn offline_override(&self) -> Option<bool> {
        self.offline_override
    }

    /// Whether generation calls should reach the model
    pub fn uses_model(&self) -> bool {
        !self.is_offline() && self.api_key.is_some()
    }

    pub fn check_in_settings(&self) -> CheckInSettings {
        CheckInSettings {
            threshold: self.sunlight_threshold,
            sample_interval: Duration::from_millis(self.sample_interval_ms.max(1)),
            ..CheckInSettings::default()
        }
    }
}

/// Raw settings.json content, `None` if the file does not exist
fn read_settings_file(sprout_dir: &Path) -> Result<Option<String>> {
    let settings_path = sprout_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_with_env(dir.path(), no_env).unwrap();

        assert_eq!(config.ai_model, "gemini-2.5-flash");
        assert!(!config.offline);
        assert_eq!(config.focus_minutes, 25);
        assert_eq!(config.sunlight_threshold, 100);
        assert_eq!(config.sample_interval_ms, 500);
        assert!(config.api_key().is_none());
        assert!(!config.uses_model());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"focus":{"durationMinutes":50}}"#,
        )
        .unwrap();

        let config = Config::load_with_env(dir.path(), no_env).unwrap();
        assert_eq!(config.focus_minutes, 50);
        assert_eq!(config.sunlight_threshold, 100);
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"theme":"forest","ai":{"model":"x","temperature":0.2}}"#,
        )
        .unwrap();

        let mut config = Config::load_with_env(dir.path(), no_env).unwrap();
        config.offline = true;
        config.save(dir.path()).unwrap();

        let saved: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("settings.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(saved["theme"], "forest");
        assert_eq!(saved["ai"]["temperature"], 0.2);
        assert_eq!(saved["ai"]["offline"], true);
        assert_eq!(saved["ai"]["model"], "x");
    }

    #[test]
    fn test_env_overrides() {
        let dir = tempdir().unwrap();
        let config = Config::load_with_env(dir.path(), |name| match name {
            "SPROUT_OFFLINE" => Some("1".to_string()),
            "GEMINI_API_KEY" => Some("g".to_string()),
            "API_KEY" => Some("a".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(config.is_offline());
        assert!(!config.offline);
        assert_eq!(config.offline_override(), Some(true));
        assert_eq!(config.api_key(), Some("g"));
        assert!(!config.uses_model());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        let config = Config::load_with_env(dir.path(), no_env).unwrap();
        assert_eq!(config.focus_minutes, 25);
    }

    #[test]
    fn test_save_keeps_nested_unknown_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"sunlight":{"threshold":90,"camera":"front"},"focus":{"durationMinutes":25,"breakMinutes":5}}"#,
        )
        .unwrap();

        let mut config = Config::load_with_env(dir.path(), no_env).unwrap();
        assert_eq!(config.sunlight_threshold, 90);
        config.focus_minutes = 45;
        config.save(dir.path()).unwrap();

        let saved: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("settings.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(saved["sunlight"]["camera"], "front");
        assert_eq!(saved["sunlight"]["threshold"], 90);
        assert_eq!(saved["focus"]["breakMinutes"], 5);
        assert_eq!(saved["focus"]["durationMinutes"], 45);
    }

    #[test]
    fn test_env_offline_not_saved() {
        let dir = tempdir().unwrap();
        let mut config = Config::load_with_env(dir.path(), |name| match name {
            "SPROUT_OFFLINE" => Some("1".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(config.is_offline());

        config.focus_minutes = 30;
        config.save(dir.path()).unwrap();

        let reloaded = Config::load_with_env(dir.path(), no_env).unwrap();
        assert_eq!(reloaded.focus_minutes, 30);
        assert!(!reloaded.offline);
        assert!(!reloaded.is_offline());
    }

    #[test]
    fn test_save_refuses_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let broken = r#"{"focus":{"durationMinutes":50},}"#;
        std::fs::write(&path, broken).unwrap();

        let mut config = Config::load_with_env(dir.path(), no_env).unwrap();
        assert_eq!(config.focus_minutes, 25);
        config.focus_minutes = 40;

        assert!(config.save(dir.path()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }
}
