//! Vendor presets and the reset operation
//!
//! The host ships six read-only hotkey templates. Resetting copies one of
//! them byte-for-byte over the active hotkey file; the previous file is
//! gone afterwards and the caller is expected to reload.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{error, info};

use crate::config::error::{ConfigFileError, Result};
use crate::config::fs::{FileSystem, StdFileSystem};

/// Fixed set of vendor hotkey presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Preset {
    #[value(name = "motionbuilder")]
    MotionBuilder,
    #[value(name = "motionbuilder-classic")]
    MotionBuilderClassic,
    #[value(name = "3ds-max")]
    Max,
    #[value(name = "lightwave")]
    Lightwave,
    #[value(name = "maya")]
    Maya,
    #[value(name = "softimage")]
    Softimage,
}

impl Preset {
    /// All presets in menu order
    pub const ALL: [Preset; 6] = [
        Preset::MotionBuilder,
        Preset::MotionBuilderClassic,
        Preset::Lightwave,
        Preset::Max,
        Preset::Maya,
        Preset::Softimage,
    ];

    /// Preset seeded into a missing active hotkey file
    pub const DEFAULT: Preset = Preset::MotionBuilder;

    /// File name inside the host's preset directory
    pub fn file_name(self) -> &'static str {
        match self {
            Preset::MotionBuilder => "MotionBuilder.txt",
            Preset::MotionBuilderClassic => "MotionBuilder Classic.txt",
            Preset::Max => "3ds Max.txt",
            Preset::Lightwave => "Lightwave.txt",
            Preset::Maya => "Maya.txt",
            Preset::Softimage => "Softimage.txt",
        }
    }

    /// Canonical name of the preset
    pub fn label(self) -> &'static str {
        match self {
            Preset::MotionBuilder => "MotionBuilder",
            Preset::MotionBuilderClassic => "MotionBuilder Classic",
            Preset::Max => "3ds Max",
            Preset::Lightwave => "Lightwave",
            Preset::Maya => "Maya",
            Preset::Softimage => "Softimage",
        }
    }

    /// Text used in the "Reset Hotkeys" menu
    pub fn menu_label(self) -> &'static str {
        match self {
            Preset::MotionBuilder => "MotionBuilder (default)",
            Preset::Max => "3DS Max",
            Preset::Softimage => "SoftImage",
            other => other.label(),
        }
    }

    pub fn path_in(self, presets_dir: &Path) -> PathBuf {
        presets_dir.join(self.file_name())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Replaces the active hotkey file with a vendor preset
pub struct PresetResetter<F: FileSystem = StdFileSystem> {
    fs: F,
    presets_dir: PathBuf,
    active_file: PathBuf,
}

impl<F: FileSystem> PresetResetter<F> {
    pub fn with_fs(fs: F, presets_dir: impl Into<PathBuf>, active_file: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            presets_dir: presets_dir.into(),
            active_file: active_file.into(),
        }
    }

    /// Overwrite the active hotkey file with `preset`
    ///
    /// Unsaved edits held by the caller are not consulted; they must be
    /// discarded and the store reloaded afterwards. When the copy fails the
    /// active file keeps its previous contents.
    pub fn apply(&self, preset: Preset) -> Result<()> {
        let source = preset.path_in(&self.presets_dir);

        self.fs
            .copy(&source, &self.active_file)
            .map_err(|source_err| {
                error!(
                    preset = %preset,
                    source = %source.display(),
                    error = %source_err,
                    "Failed to copy preset"
                );
                ConfigFileError::PresetCopyFailure {
                    preset,
                    source: source_err,
                }
            })?;

        info!(
            preset = %preset,
            target = %self.active_file.display(),
            "Replaced active hotkeys with preset"
        );
        Ok(())
    }

    /// Whether the preset's template file is present
    pub fn is_available(&self, preset: Preset) -> bool {
        self.fs.exists(&preset.path_in(&self.presets_dir))
    }
}
