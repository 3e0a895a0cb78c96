use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::{UiError, UiResult};
use crate::core::search::{DEBOUNCE_MS, PAGE_SIZE};

const APP_DIR_NAME: &str = "FoliaLauncher";
const UI_CONFIG_FILE: &str = "ui_config.json";

/// Settings the host persists. Keys are exactly `java_path`, `ram`, `language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub java_path: String,
    /// Maximum heap in megabytes.
    pub ram: u32,
    pub language: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            java_path: "java".into(),
            ram: 2048,
            language: "en".into(),
        }
    }
}

impl UserSettings {
    /// Failures carry the translation key of the message to show.
    pub fn validate(&self) -> UiResult<()> {
        if self.java_path.trim().is_empty() {
            return Err(UiError::Validation("invalid_java_path".into()));
        }
        if self.ram == 0 {
            return Err(UiError::Validation("invalid_ram".into()));
        }
        Ok(())
    }
}

/// Front-end tuning knobs, read from `ui_config.json` in the config dir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_language: String,
    pub debounce_ms: u64,
    pub page_size: usize,
    /// Extra locale files merged over the built-in English bundle.
    pub locales_dir: Option<PathBuf>,
    pub app_version_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: "en".into(),
            debounce_ms: DEBOUNCE_MS,
            page_size: PAGE_SIZE,
            locales_dir: None,
            app_version_label: "beta 2".into(),
        }
    }
}

impl UiConfig {
    /// Load from the platform config dir; defaults when missing or broken.
    pub fn load() -> Self {
        Self::load_from(&default_config_dir().join(UI_CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                info!("No UI config at {:?}, using defaults", path);
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(error) => {
                warn!("Ignoring malformed UI config {:?}: {}", path, error);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> UiResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| UiError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| UiError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
