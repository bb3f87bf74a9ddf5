//! Location of the host configuration files

use std::path::{Path, PathBuf};

use crate::common::constants::{config, hotkeys, scripts};
use crate::config::preset::Preset;
use crate::config::settings::EditorSettings;

/// Directory overrides given on the command line
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub presets_dir: Option<PathBuf>,
    pub keyboard_dir: Option<PathBuf>,
    pub scripts_dir: Option<PathBuf>,
}

/// The three directories the editor works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Read-only vendor presets shipped with the host
    pub presets_dir: PathBuf,
    /// Holds the active hotkey file
    pub keyboard_dir: PathBuf,
    /// Holds the script-path file
    pub scripts_dir: PathBuf,
}

impl ConfigPaths {
    pub fn new(
        presets_dir: impl Into<PathBuf>,
        keyboard_dir: impl Into<PathBuf>,
        scripts_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            presets_dir: presets_dir.into(),
            keyboard_dir: keyboard_dir.into(),
            scripts_dir: scripts_dir.into(),
        }
    }

    /// Resolve directories: command line first, then settings, then `app_dir`
    pub fn resolve(app_dir: &Path, settings: &EditorSettings, overrides: PathOverrides) -> Self {
        let user_root = settings
            .user_config_dir
            .clone()
            .unwrap_or_else(|| app_dir.join(config::USER_SUBDIR));

        Self::new(
            overrides
                .presets_dir
                .or_else(|| settings.presets_dir.clone())
                .unwrap_or_else(|| app_dir.join(config::PRESETS_SUBDIR)),
            overrides
                .keyboard_dir
                .unwrap_or_else(|| user_root.join(config::KEYBOARD_SUBDIR)),
            overrides
                .scripts_dir
                .unwrap_or_else(|| user_root.join(config::SCRIPTS_SUBDIR)),
        )
    }

    /// Active user hotkey file
    pub fn hotkey_file(&self) -> PathBuf {
        self.keyboard_dir.join(hotkeys::CUSTOM_FILENAME)
    }

    /// User script-path file
    pub fn script_file(&self) -> PathBuf {
        self.scripts_dir.join(scripts::FILENAME)
    }

    /// Preset copied into a missing hotkey file
    pub fn default_preset_file(&self) -> PathBuf {
        Preset::DEFAULT.path_in(&self.presets_dir)
    }

    /// Hotkey file path the way the host displays it
    pub fn display_hotkey_file(&self) -> String {
        self.hotkey_file().to_string_lossy().replace('/', "\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_under_app_dir() {
        let app = Path::new("/home/anim/.config/hotkey-editor");
        let paths = ConfigPaths::resolve(app, &EditorSettings::default(), PathOverrides::default());

        assert_eq!(paths.presets_dir, app.join("Keyboard"));
        assert_eq!(paths.keyboard_dir, app.join("user").join("Keyboard"));
        assert_eq!(paths.scripts_dir, app.join("user").join("Scripts"));
    }

    #[test]
    fn test_resolve_settings_then_overrides() {
        let app = Path::new("/app");
        let settings = EditorSettings {
            presets_dir: Some(PathBuf::from("/host/config/Keyboard")),
            user_config_dir: Some(PathBuf::from("/home/anim/mobu/config")),
            ..EditorSettings::default()
        };
        let overrides = PathOverrides {
            scripts_dir: Some(PathBuf::from("/tmp/scripts")),
            ..PathOverrides::default()
        };

        let paths = ConfigPaths::resolve(app, &settings, overrides);

        assert_eq!(paths.presets_dir, PathBuf::from("/host/config/Keyboard"));
        assert_eq!(
            paths.keyboard_dir,
            PathBuf::from("/home/anim/mobu/config/Keyboard")
        );
        assert_eq!(paths.scripts_dir, PathBuf::from("/tmp/scripts"));
    }

    #[test]
    fn test_file_paths() {
        let paths = ConfigPaths::new("/p", "/k", "/s");

        assert_eq!(paths.hotkey_file(), PathBuf::from("/k/customHotkeys.txt"));
        assert_eq!(paths.script_file(), PathBuf::from("/s/ActionScript.txt"));
        assert_eq!(paths.default_preset_file(), PathBuf::from("/p/MotionBuilder.txt"));
        assert_eq!(paths.display_hotkey_file(), "\\k\\customHotkeys.txt");
    }
}
