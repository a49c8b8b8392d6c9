use crate::domain::{AccentColor, AppTheme};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Display preferences stored in settings.json. Loaded once at startup
/// into an explicit config object; updated through setters that save.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app_theme: AppTheme,
    #[serde(default)]
    pub accent_color: AccentColor,
}

/// Load settings, returning defaults when the file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.app_theme, AppTheme::System);
        assert_eq!(settings.accent_color, AccentColor::Green);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings {
            app_theme: AppTheme::Dark,
            accent_color: AccentColor::Teal,
        };
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.app_theme, AppTheme::Dark);
        assert_eq!(loaded.accent_color, AccentColor::Teal);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{}").unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.app_theme, AppTheme::System);
        assert_eq!(loaded.accent_color, AccentColor::Green);
    }
}
