//! Configuration management
//!
//! Reads and rewrites the host's hotkey file and script-path file, resets
//! the hotkey file from vendor presets, and keeps the editor's own settings.

pub mod encoding;
pub mod error;
pub mod fs;
pub mod hotkey_file;
pub mod paths;
pub mod preset;
pub mod script_file;
pub mod settings;
pub mod store;

pub use hotkey_file::HotkeyEntry;
pub use paths::{ConfigPaths, PathOverrides};
pub use preset::Preset;
pub use script_file::ScriptBinding;
pub use settings::EditorSettings;
pub use store::{ConfigStore, HotkeyConfig};
