//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ClipsheetError, ClipsheetResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Preview surface defaults.
    pub preview: PreviewDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default target surface used when normalizing geometry for preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewDefaults {
    /// Surface width in target units.
    pub width: f64,

    /// Surface height in target units.
    pub height: f64,

    /// Text inset from the crop-adjusted edges, in canonical 1920x1080 pixels.
    /// Scaled to the surface the same way crop margins are.
    pub text_inset: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "clipsheet=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for PreviewDefaults {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 180.0,
            text_inset: 60.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    ///
    /// Runs before logging is set up, so a fallback is returned alongside the
    /// defaults for the caller to log once a subscriber exists.
    pub fn load() -> (Self, Option<ClipsheetError>) {
        Self::load_or_default(&config_file_path())
    }

    fn load_or_default(path: &Path) -> (Self, Option<ClipsheetError>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(ClipsheetError::config(format!(
                    "failed to load {}: {e}",
                    path.display()
                ))),
            ),
        }
    }

    /// Load config from an explicit path. Missing keys take their defaults.
    pub fn load_from(path: impl AsRef<Path>) -> ClipsheetResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ClipsheetError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> ClipsheetResult<()> {
        let p = &self.preview;
        if !(p.width.is_finite() && p.width > 0.0 && p.height.is_finite() && p.height > 0.0) {
            return Err(ClipsheetError::config(format!(
                "preview surface must be positive, got {}x{}",
                p.width, p.height
            )));
        }
        if !p.text_inset.is_finite() || p.text_inset < 0.0 {
            return Err(ClipsheetError::config(format!(
                "preview text_inset must be non-negative, got {}",
                p.text_inset
            )));
        }
        Ok(())
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("clipsheet").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preview_surface() {
        let config = AppConfig::default();
        assert_eq!(config.preview.width, 320.0);
        assert_eq!(config.preview.height, 180.0);
        assert_eq!(config.preview.text_inset, 60.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"preview": {"width": 640}}"#).unwrap();
        assert_eq!(config.preview.width, 640.0);
        assert_eq!(config.preview.height, 180.0);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_from_rejects_bad_surface() {
        let dir = std::env::temp_dir().join("clipsheet_test_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"preview": {"width": 0, "height": 180}}"#).unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ClipsheetError::Config { .. }));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_fallback_returns_defaults_and_error() {
        let dir = std::env::temp_dir().join("clipsheet_test_config_fallback");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"preview": {"width": "bad"}}"#).unwrap();

        let (config, err) = AppConfig::load_or_default(&path);
        assert_eq!(config.preview.width, 320.0);
        let err = err.unwrap();
        assert!(matches!(err, ClipsheetError::Config { .. }));
        assert!(err.to_string().contains("config.json"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_absent_config_is_not_an_error() {
        let (config, err) = AppConfig::load_or_default(Path::new("/nonexistent/clipsheet.json"));
        assert!(err.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = AppConfig::load_from("/nonexistent/clipsheet/config.json").unwrap_err();
        assert!(matches!(err, ClipsheetError::FileNotFound { .. }));
    }
}
