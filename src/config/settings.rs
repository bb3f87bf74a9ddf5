//! Editor settings
//!
//! The editor's own JSON settings file: where the host's presets and the
//! user's configuration live, plus the last window size. This is separate
//! from the host files the editor rewrites.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::common::constants::config::*;
use crate::common::constants::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Host directory holding the six vendor presets
    #[serde(default)]
    pub presets_dir: Option<PathBuf>,

    /// Host user configuration root (contains `Keyboard/` and `Scripts/`)
    #[serde(default)]
    pub user_config_dir: Option<PathBuf>,

    #[serde(default = "default_window_width")]
    pub window_width: u16,
    #[serde(default = "default_window_height")]
    pub window_height: u16,
}

fn default_window_width() -> u16 {
    defaults::window::WIDTH
}

fn default_window_height() -> u16 {
    defaults::window::HEIGHT
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            presets_dir: None,
            user_config_dir: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl EditorSettings {
    /// Application directory, overridable through `HOTKEY_EDITOR_CONFIG_DIR`
    pub fn app_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DIR_ENV) {
            return PathBuf::from(dir);
        }
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path
    }

    pub fn path() -> PathBuf {
        Self::app_dir().join(FILENAME)
    }

    /// Load settings from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Settings file not found, creating defaults");
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;

        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        info!(path = %path.display(), "Loaded editor settings");
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, json).with_context(|| format!("Failed to write settings to {:?}", path))?;

        info!(path = %path.display(), "Saved editor settings");
        Ok(())
    }
}
