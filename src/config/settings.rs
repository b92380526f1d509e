//! User settings for FinTrack
//!
//! Persisted preferences: display currency, theme, language, date format,
//! and notification preferences.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::{CurrencyCode, NotificationPreferences};

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Interface language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }
}

/// User settings for FinTrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency amounts are displayed in
    #[serde(default)]
    pub currency: CurrencyCode,

    /// Color theme for the dashboard
    #[serde(default)]
    pub theme: Theme,

    /// Interface language
    #[serde(default)]
    pub language: Language,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Notification delivery preferences
    #[serde(default)]
    pub notifications: NotificationPreferences,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: CurrencyCode::default(),
            theme: Theme::default(),
            language: Language::default(),
            date_format: default_date_format(),
            notifications: NotificationPreferences::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FintrackError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FintrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FintrackError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply a `config set <key> <value>` pair
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), FintrackError> {
        match key {
            "currency" => {
                self.currency = CurrencyCode::parse(value).ok_or_else(|| {
                    FintrackError::Validation(format!(
                        "Unknown currency '{}'. Supported: USD, EUR, GBP, JPY, CAD, AUD",
                        value
                    ))
                })?;
            }
            "theme" => {
                self.theme = Theme::parse(value).ok_or_else(|| {
                    FintrackError::Validation(format!(
                        "Unknown theme '{}'. Supported: dark, light",
                        value
                    ))
                })?;
            }
            "language" => {
                self.language = Language::parse(value).ok_or_else(|| {
                    FintrackError::Validation(format!(
                        "Unknown language '{}'. Supported: en, es, fr, de",
                        value
                    ))
                })?;
            }
            "date-format" => {
                if value.trim().is_empty() {
                    return Err(FintrackError::Validation(
                        "Date format cannot be empty".into(),
                    ));
                }
                self.date_format = value.to_string();
            }
            _ => {
                return Err(FintrackError::Validation(format!(
                    "Unknown setting '{}'. Supported: currency, theme, language, date-format",
                    key
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, CurrencyCode::USD);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency = CurrencyCode::EUR;
        settings.theme = Theme::Light;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, CurrencyCode::EUR);
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_set_known_keys() {
        let mut settings = Settings::default();

        settings.set("currency", "gbp").unwrap();
        assert_eq!(settings.currency, CurrencyCode::GBP);

        settings.set("theme", "light").unwrap();
        assert_eq!(settings.theme, Theme::Light);

        settings.set("language", "es").unwrap();
        assert_eq!(settings.language, Language::Es);

        settings.set("date-format", "%d/%m/%Y").unwrap();
        assert_eq!(settings.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut settings = Settings::default();
        assert!(settings.set("currency", "BTC").is_err());
        assert!(settings.set("theme", "solarized").is_err());
        assert!(settings.set("volume", "11").is_err());
    }
}
