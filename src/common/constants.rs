//! Application-wide constants
//!
//! File names, format markers and GUI values used throughout the editor,
//! kept in one place so the on-disk format has a single source of truth.

/// Hotkey file format markers
pub mod hotkeys {
    /// Active user hotkey file inside the user keyboard directory
    pub const CUSTOM_FILENAME: &str = "customHotkeys.txt";

    /// Substring identifying an action that runs a user script
    pub const SCRIPT_ACTION_MARKER: &str = "action.global.script";

    /// Separator between action and key chord
    pub const ASSIGNMENT: char = '=';

    /// Opening character of a section header line
    pub const SECTION_OPEN: char = '[';

    /// Line terminator expected by the host application
    pub const LINE_ENDING: &str = "\r\n";
}

/// Script-path file format markers
pub mod scripts {
    /// Active script-path file inside the user scripts directory
    pub const FILENAME: &str = "ActionScript.txt";

    /// Single header line of the script-path file
    pub const HEADER: &str = "[ScriptFiles]";

    /// Prefix of every slot key (`Script1` .. `Script12`)
    pub const SLOT_PREFIX: &str = "Script";

    /// Separator between slot key and path, spaces included
    pub const SEPARATOR: &str = " = ";

    /// Number of slots seeded into a fresh script-path file
    pub const SLOT_COUNT: u8 = 12;
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "hotkey-editor";

    /// Editor settings filename
    pub const FILENAME: &str = "settings.json";

    /// Environment variable overriding the application directory
    pub const DIR_ENV: &str = "HOTKEY_EDITOR_CONFIG_DIR";

    /// Default preset directory name inside the application directory
    pub const PRESETS_SUBDIR: &str = "Keyboard";

    /// User configuration root inside the application directory
    pub const USER_SUBDIR: &str = "user";

    /// User keyboard directory name (holds the active hotkey file)
    pub const KEYBOARD_SUBDIR: &str = "Keyboard";

    /// User scripts directory name (holds the script-path file)
    pub const SCRIPTS_SUBDIR: &str = "Scripts";
}

/// External links
pub mod links {
    pub const DOCUMENTATION: &str = "http://alexwidener.github.io/MotionBuilderHotkeyEditor/";
}

/// GUI-specific constants (egui editor window)
pub mod gui {
    use egui;

    pub const WINDOW_TITLE: &str = "Hotkey Editor";

    /// Layout spacing
    pub const SECTION_SPACING: f32 = 10.0;
    pub const ITEM_SPACING: f32 = 6.0;

    /// Minimum width of the action column text fields
    pub const ACTION_COLUMN_WIDTH: f32 = 320.0;

    /// Minimum width of the key / path column text fields
    pub const VALUE_COLUMN_WIDTH: f32 = 200.0;

    /// Alert level colors
    pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(100, 200, 100); // Green - saved
    pub const COLOR_WARNING: egui::Color32 = egui::Color32::from_rgb(255, 200, 0); // Yellow - unsaved
    pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 100, 100); // Red - errors
}

/// Default configuration values
pub mod defaults {
    /// Editor window settings
    pub mod window {
        /// Default editor window width in pixels
        pub const WIDTH: u16 = 1280;

        /// Default editor window height in pixels
        pub const HEIGHT: u16 = 720;
    }
}
