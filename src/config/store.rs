//! Hotkey and script-path persistence
//!
//! Maps the two host text files to ordered in-memory rows and back. Every
//! save rewrites both files completely.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::encoding::TextEncoding;
use crate::config::error::{ConfigFileError, Result};
use crate::config::fs::{FileSystem, StdFileSystem};
use crate::config::hotkey_file::{self, HotkeyEntry};
use crate::config::paths::ConfigPaths;
use crate::config::preset::{Preset, PresetResetter};
use crate::config::script_file::{self, ScriptBinding};

/// Rows loaded from the hotkey and script-path files
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct HotkeyConfig {
    /// Every hotkey file line, in file order
    pub entries: Vec<HotkeyEntry>,
    /// One binding per script action, in the order those actions appear
    pub bindings: Vec<ScriptBinding>,
    /// Encodings the two files were read with
    #[serde(skip)]
    pub hotkey_encoding: TextEncoding,
    #[serde(skip)]
    pub script_encoding: TextEncoding,
}

impl HotkeyConfig {
    /// Assign `chord` to the first entry named `action`
    ///
    /// Returns false when no entry carries that action.
    pub fn set_key(&mut self, action: &str, chord: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.action == action) {
            Some(entry) => {
                entry.key_combination = chord.to_string();
                true
            }
            None => false,
        }
    }

    /// Set the script path of every binding for `slot`
    ///
    /// Returns false when no script action references that slot.
    pub fn set_script_path(&mut self, slot: u8, path: &str) -> bool {
        let mut found = false;
        for binding in self.bindings.iter_mut().filter(|b| b.slot() == Some(slot)) {
            binding.path = Some(path.to_string());
            found = true;
        }
        found
    }
}

/// Loads, parses and rewrites the active hotkey and script-path files
pub struct ConfigStore<F: FileSystem = StdFileSystem> {
    fs: F,
    paths: ConfigPaths,
}

impl ConfigStore<StdFileSystem> {
    pub fn new(paths: ConfigPaths) -> Self {
        Self::with_fs(StdFileSystem, paths)
    }
}

impl<F: FileSystem> ConfigStore<F> {
    pub fn with_fs(fs: F, paths: ConfigPaths) -> Self {
        Self { fs, paths }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Resetter bound to this store's preset directory and hotkey file
    pub fn resetter(&self) -> PresetResetter<&F> {
        PresetResetter::with_fs(&self.fs, &self.paths.presets_dir, self.paths.hotkey_file())
    }

    /// Create whichever of the two files is missing
    ///
    /// The hotkey file is copied from the default preset; the script file is
    /// written with all twelve slots empty. Existing files are left alone.
    pub fn seed_defaults(&self) -> Result<()> {
        let hotkey_file = self.paths.hotkey_file();
        let script_file = self.paths.script_file();

        if !self.fs.exists(&hotkey_file) {
            let preset_file = self.paths.default_preset_file();
            if !self.fs.exists(&preset_file) {
                return Err(ConfigFileError::MissingSourceFile { path: preset_file });
            }
            self.fs
                .create_dir_all(&self.paths.keyboard_dir)
                .map_err(|e| ConfigFileError::io(&self.paths.keyboard_dir, e))?;
            self.fs
                .copy(&preset_file, &hotkey_file)
                .map_err(|source| ConfigFileError::PresetCopyFailure {
                    preset: Preset::DEFAULT,
                    source,
                })?;
            info!(path = %hotkey_file.display(), "Seeded hotkey file from default preset");
        }

        if !self.fs.exists(&script_file) {
            self.fs
                .create_dir_all(&self.paths.scripts_dir)
                .map_err(|e| ConfigFileError::io(&self.paths.scripts_dir, e))?;
            self.fs
                .write(&script_file, script_file::default_contents().as_bytes())
                .map_err(|source| ConfigFileError::PartialWriteFailure {
                    path: script_file.clone(),
                    source,
                })?;
            info!(path = %script_file.display(), "Seeded empty script file");
        }

        Ok(())
    }

    /// Parse both files into rows
    ///
    /// Never creates files: a missing hotkey or script file is an error, so
    /// an absent configuration is never mistaken for an empty one.
    pub fn load(&self) -> Result<HotkeyConfig> {
        let (hotkey_text, hotkey_encoding) = self.read_required(&self.paths.hotkey_file())?;
        let (script_text, script_encoding) = self.read_required(&self.paths.script_file())?;

        let entries = hotkey_file::parse(&hotkey_text);
        let bindings: Vec<ScriptBinding> = entries
            .iter()
            .filter_map(HotkeyEntry::script_suffix)
            .map(|suffix| {
                let mut binding = ScriptBinding::for_suffix(suffix, None);
                binding.path = script_file::lookup_path(&script_text, &binding.name);
                if binding.path.is_none() {
                    debug!(slot = %binding.name, "No script path recorded for slot");
                }
                binding
            })
            .collect();

        debug!(
            entries = entries.len(),
            bindings = bindings.len(),
            "Loaded hotkey configuration"
        );
        Ok(HotkeyConfig {
            entries,
            bindings,
            hotkey_encoding,
            script_encoding,
        })
    }

    /// Re-read both files, discarding nothing but the caller's copy
    pub fn reload(&self) -> Result<HotkeyConfig> {
        info!("Reloading hotkey configuration from disk");
        self.load()
    }

    /// Rewrite both files from the given rows
    ///
    /// Each file is written in the encoding it was read with. Both are
    /// encoded before either is written, so an unencodable edit touches
    /// neither file.
    pub fn save(&self, config: &HotkeyConfig) -> Result<()> {
        let hotkey_file = self.paths.hotkey_file();
        let script_file = self.paths.script_file();

        let hotkey_bytes = encode(
            &hotkey_file,
            config.hotkey_encoding,
            &hotkey_file::serialize(&config.entries),
        )?;
        let script_bytes = encode(
            &script_file,
            config.script_encoding,
            &script_file::serialize(&config.bindings),
        )?;

        self.fs
            .write(&hotkey_file, &hotkey_bytes)
            .map_err(|source| ConfigFileError::PartialWriteFailure {
                path: hotkey_file.clone(),
                source,
            })?;

        self.fs
            .write(&script_file, &script_bytes)
            .map_err(|source| ConfigFileError::PartialWriteFailure {
                path: script_file.clone(),
                source,
            })?;

        info!(
            entries = config.entries.len(),
            bindings = config.bindings.len(),
            "Saved hotkey configuration"
        );
        Ok(())
    }

    fn read_required(&self, path: &Path) -> Result<(String, TextEncoding)> {
        if !self.fs.exists(path) {
            return Err(ConfigFileError::MissingSourceFile {
                path: path.to_path_buf(),
            });
        }
        let bytes = self
            .fs
            .read(path)
            .map_err(|e| ConfigFileError::io(path, e))?;

        let (text, encoding) = TextEncoding::decode(&bytes);
        if encoding != TextEncoding::Utf8 {
            warn!(path = %path.display(), "File is not UTF-8, keeping its bytes as Latin-1");
        }
        Ok((text, encoding))
    }
}

fn encode(path: &Path, encoding: TextEncoding, text: &str) -> Result<Vec<u8>> {
    encoding
        .encode(text)
        .ok_or_else(|| ConfigFileError::UnencodableText {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fs::memory::MemoryFileSystem;
    use std::fs;

    const MOBU_PRESET: &str = "[Transport]\r\n\
        action.global.play = Space\r\n\
        action.global.stop =\r\n\
        \r\n\
        [Scripts]\r\n\
        action.global.script3 = Ctrl+S\r\n\
        action.global.script1 = Ctrl+1\r\n";

    const MAYA_PRESET: &str = "[Maya]\r\naction.global.play = Alt+V\r\n";

    fn setup() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let presets = root.join("presets");
        fs::create_dir_all(&presets).unwrap();
        fs::write(presets.join("MotionBuilder.txt"), MOBU_PRESET).unwrap();
        fs::write(presets.join("Maya.txt"), MAYA_PRESET).unwrap();

        let paths = ConfigPaths::new(presets, root.join("Keyboard"), root.join("Scripts"));
        (dir, ConfigStore::new(paths))
    }

    fn memory_paths() -> ConfigPaths {
        ConfigPaths::new("/presets", "/user/Keyboard", "/user/Scripts")
    }

    #[test]
    fn test_seed_defaults_creates_both_files() {
        let (_dir, store) = setup();
        store.seed_defaults().unwrap();

        let hotkeys = fs::read(store.paths().hotkey_file()).unwrap();
        assert_eq!(hotkeys, MOBU_PRESET.as_bytes());

        let scripts = fs::read_to_string(store.paths().script_file()).unwrap();
        assert_eq!(scripts, script_file::default_contents());
    }

    #[test]
    fn test_seed_defaults_keeps_existing_files() {
        let (_dir, store) = setup();
        fs::create_dir_all(&store.paths().keyboard_dir).unwrap();
        fs::write(store.paths().hotkey_file(), "[Mine]\r\n").unwrap();

        store.seed_defaults().unwrap();

        assert_eq!(
            fs::read_to_string(store.paths().hotkey_file()).unwrap(),
            "[Mine]\r\n"
        );
        // Script file is seeded independently of existing hotkey data
        let scripts = fs::read_to_string(store.paths().script_file()).unwrap();
        assert_eq!(scripts.lines().count(), 13);
    }

    #[test]
    fn test_seed_defaults_missing_preset_fails() {
        let fs = MemoryFileSystem::new();
        let store = ConfigStore::with_fs(&fs, memory_paths());

        let err = store.seed_defaults().unwrap_err();

        assert!(matches!(
            err,
            ConfigFileError::MissingSourceFile { ref path } if path == Path::new("/presets/MotionBuilder.txt")
        ));
        assert!(fs.contents("/user/Keyboard/customHotkeys.txt").is_none());
    }

    #[test]
    fn test_load_without_seed_fails() {
        let (_dir, store) = setup();
        let err = store.load().unwrap_err();
        assert!(matches!(err, ConfigFileError::MissingSourceFile { .. }));
        assert!(!store.paths().hotkey_file().exists());
    }

    #[test]
    fn test_load_without_script_file_fails() {
        let fs = MemoryFileSystem::new();
        fs.insert(
            "/user/Keyboard/customHotkeys.txt",
            "action.global.script1 = F1\r\n",
        );
        let store = ConfigStore::with_fs(&fs, memory_paths());

        let err = store.load().unwrap_err();

        assert!(matches!(
            err,
            ConfigFileError::MissingSourceFile { ref path } if *path == store.paths().script_file()
        ));
        assert!(fs.contents("/user/Scripts/ActionScript.txt").is_none());
    }

    #[test]
    fn test_load_extracts_script_bindings_in_entry_order() {
        let (_dir, store) = setup();
        store.seed_defaults().unwrap();
        fs::write(
            store.paths().script_file(),
            "[ScriptFiles]\r\nScript1 = \r\nScript3 = C:\\foo.py \r\n",
        )
        .unwrap();

        let config = store.load().unwrap();

        assert_eq!(config.entries.len(), 7);
        assert_eq!(
            config.entries[5],
            HotkeyEntry::new("action.global.script3", "Ctrl+S")
        );
        assert_eq!(
            config.bindings,
            vec![
                ScriptBinding {
                    name: "Script3".to_string(),
                    path: Some("C:\\foo.py ".to_string()),
                },
                ScriptBinding {
                    name: "Script1".to_string(),
                    path: Some(String::new()),
                },
            ]
        );
    }

    #[test]
    fn test_load_reports_missing_slot_as_none() {
        let fs = MemoryFileSystem::new();
        fs.insert(
            "/user/Keyboard/customHotkeys.txt",
            "action.global.script9 = F9\r\n",
        );
        fs.insert("/user/Scripts/ActionScript.txt", "[ScriptFiles]\r\n");
        let store = ConfigStore::with_fs(&fs, memory_paths());

        let config = store.load().unwrap();
        assert_eq!(config.bindings[0].path, None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, store) = setup();
        store.seed_defaults().unwrap();
        let mut config = store.load().unwrap();

        config.set_key("action.global.stop", "Shift+Space");
        config.set_script_path(3, "/opt/tools/retime.py");
        store.save(&config).unwrap();

        let reloaded = store.reload().unwrap();
        assert_eq!(reloaded.entries, config.entries);
        assert_eq!(
            reloaded.bindings[0].path.as_deref(),
            Some("/opt/tools/retime.py ")
        );
    }

    #[test]
    fn test_save_is_idempotent() {
        let (_dir, store) = setup();
        store.seed_defaults().unwrap();
        let config = store.load().unwrap();

        store.save(&config).unwrap();
        let first_hotkeys = fs::read(store.paths().hotkey_file()).unwrap();
        let first_scripts = fs::read(store.paths().script_file()).unwrap();

        store.save(&config).unwrap();
        assert_eq!(fs::read(store.paths().hotkey_file()).unwrap(), first_hotkeys);
        assert_eq!(fs::read(store.paths().script_file()).unwrap(), first_scripts);
    }

    #[test]
    fn test_save_writes_host_format() {
        let (_dir, store) = setup();
        store.seed_defaults().unwrap();
        let config = store.load().unwrap();

        store.save(&config).unwrap();

        assert_eq!(
            fs::read_to_string(store.paths().hotkey_file()).unwrap(),
            "[Transport]\r\n\
             action.global.play = Space\r\n\
             action.global.stop = \r\n\
             \r\n\
             [Scripts]\r\n\
             action.global.script3 = Ctrl+S\r\n\
             action.global.script1 = Ctrl+1\r\n"
        );
        assert_eq!(
            fs::read_to_string(store.paths().script_file()).unwrap(),
            "[ScriptFiles]\r\nScript3 =  \r\nScript1 =  \r\n"
        );
    }

    #[test]
    fn test_failed_save_keeps_previous_files() {
        let fs = MemoryFileSystem::new();
        fs.insert("/user/Keyboard/customHotkeys.txt", "a = 1\r\n");
        fs.insert("/user/Scripts/ActionScript.txt", "[ScriptFiles]\r\n");
        let store = ConfigStore::with_fs(&fs, memory_paths());

        fs.fail_writes(true);
        let config = HotkeyConfig {
            entries: vec![HotkeyEntry::new("a", "2")],
            ..HotkeyConfig::default()
        };
        let err = store.save(&config).unwrap_err();

        assert!(matches!(err, ConfigFileError::PartialWriteFailure { .. }));
        assert_eq!(
            fs.contents("/user/Keyboard/customHotkeys.txt").unwrap(),
            b"a = 1\r\n"
        );
    }

    #[test]
    fn test_save_keeps_non_utf8_bytes() {
        let (_dir, store) = setup();
        let hotkeys: &[u8] = b"[Caf\xE9]\r\naction.global.script2 = Ctrl+\xE9\r\n";
        let scripts: &[u8] = b"[ScriptFiles]\r\nScript2 = C:\\Scripts\\r\xE9tro.py \r\n";
        fs::create_dir_all(&store.paths().keyboard_dir).unwrap();
        fs::create_dir_all(&store.paths().scripts_dir).unwrap();
        fs::write(store.paths().hotkey_file(), hotkeys).unwrap();
        fs::write(store.paths().script_file(), scripts).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.entries[0].action, "[Caf\u{e9}]");
        store.save(&config).unwrap();

        assert_eq!(fs::read(store.paths().hotkey_file()).unwrap(), hotkeys);
        assert_eq!(fs::read(store.paths().script_file()).unwrap(), scripts);
    }

    #[test]
    fn test_unencodable_edit_writes_nothing() {
        let fs = MemoryFileSystem::new();
        let hotkeys: &[u8] = b"[Caf\xE9]\r\naction.global.play = P\r\n";
        fs.insert("/user/Keyboard/customHotkeys.txt", hotkeys);
        fs.insert("/user/Scripts/ActionScript.txt", "[ScriptFiles]\r\n");
        let store = ConfigStore::with_fs(&fs, memory_paths());

        let mut config = store.load().unwrap();
        assert_eq!(config.hotkey_encoding, TextEncoding::Latin1);
        config.set_key("action.global.play", "\u{20ac}");

        let err = store.save(&config).unwrap_err();

        assert!(matches!(
            err,
            ConfigFileError::UnencodableText { ref path } if *path == store.paths().hotkey_file()
        ));
        assert_eq!(
            fs.contents("/user/Keyboard/customHotkeys.txt").unwrap(),
            hotkeys
        );
    }

    #[test]
    fn test_preset_reset_then_reload_matches_preset() {
        let (_dir, store) = setup();
        store.seed_defaults().unwrap();
        let mut config = store.load().unwrap();
        config.set_key("action.global.play", "Ctrl+P");
        store.save(&config).unwrap();

        store.resetter().apply(Preset::Maya).unwrap();

        assert_eq!(
            fs::read(store.paths().hotkey_file()).unwrap(),
            MAYA_PRESET.as_bytes()
        );
        let reloaded = store.reload().unwrap();
        assert_eq!(reloaded.entries, hotkey_file::parse(MAYA_PRESET));
        assert!(reloaded.bindings.is_empty());
    }

    #[test]
    fn test_set_key_unknown_action() {
        let mut config = HotkeyConfig::default();
        assert!(!config.set_key("action.global.missing", "F1"));
        assert!(!config.set_script_path(1, "x.py"));
    }
}
