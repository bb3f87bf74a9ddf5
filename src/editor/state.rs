//! Editing session owned by the desktop shell

use anyhow::{Context, Result};
use eframe::egui;
use tracing::info;

use crate::common::constants::gui::*;
use crate::config::fs::{FileSystem, StdFileSystem};
use crate::config::{ConfigStore, HotkeyConfig, Preset};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub color: egui::Color32,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: COLOR_SUCCESS,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: COLOR_WARNING,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: COLOR_ERROR,
        }
    }
}

/// The single active configuration being edited
///
/// Rows live here between loads; every action that touches the disk ends
/// with an explicit reload so the rows always mirror what was written.
pub struct EditorSession<F: FileSystem = StdFileSystem> {
    store: ConfigStore<F>,
    pub config: HotkeyConfig,
    pub settings_changed: bool,
    pub status_message: Option<StatusMessage>,
}

impl<F: FileSystem> EditorSession<F> {
    /// Seed missing files, then load them
    pub fn open(store: ConfigStore<F>) -> Result<Self> {
        store
            .seed_defaults()
            .context("Failed to create default configuration files")?;
        let config = store
            .load()
            .context("Failed to load hotkey configuration")?;

        info!(
            path = %store.paths().hotkey_file().display(),
            entries = config.entries.len(),
            "Opened editing session"
        );

        Ok(Self {
            store,
            config,
            settings_changed: false,
            status_message: None,
        })
    }

    pub fn store(&self) -> &ConfigStore<F> {
        &self.store
    }

    /// Record that a row was edited in the UI
    pub fn mark_changed(&mut self) {
        self.settings_changed = true;
        self.status_message = Some(StatusMessage::warning("Unsaved changes"));
    }

    /// Write the rows to disk and reload them
    pub fn save_changes(&mut self) -> Result<()> {
        self.store
            .save(&self.config)
            .context("Failed to save hotkeys")?;
        self.refresh()?;

        self.status_message = Some(StatusMessage::success("Hotkeys saved successfully"));
        info!("Hotkey changes saved");
        Ok(())
    }

    /// Replace the active hotkey file with `preset`, dropping unsaved edits
    pub fn reset_to_preset(&mut self, preset: Preset) -> Result<()> {
        self.store
            .resetter()
            .apply(preset)
            .with_context(|| format!("Failed to reset hotkeys to {preset}"))?;
        self.refresh()?;

        self.status_message = Some(StatusMessage::success(format!(
            "Hotkeys reset to {preset}"
        )));
        Ok(())
    }

    /// Throw away unsaved edits by reloading from disk
    pub fn discard_changes(&mut self) -> Result<()> {
        self.refresh()?;
        self.status_message = Some(StatusMessage::error("Changes discarded"));
        info!("Hotkey changes discarded");
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.config = self
            .store
            .reload()
            .context("Failed to reload hotkey configuration")?;
        self.settings_changed = false;
        Ok(())
    }
}
