//! Script-path file format
//!
//! A `[ScriptFiles]` header followed by one `Script<N> = <path> ` line per
//! slot. The trailing space after each path is part of what the host writes
//! and reads, so it is preserved on both sides.

use serde::{Deserialize, Serialize};

use crate::common::constants::hotkeys::{ASSIGNMENT, LINE_ENDING};
use crate::common::constants::scripts::*;

/// A script slot linked to a hotkey action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBinding {
    /// Synthesized slot name, `Script<N>`
    pub name: String,
    /// `None` when the script file has no line for this slot
    pub path: Option<String>,
}

impl ScriptBinding {
    /// Build the binding for the suffix of an `action.global.script<N>` action
    pub fn for_suffix(suffix: &str, path: Option<String>) -> Self {
        Self {
            name: slot_name(suffix),
            path,
        }
    }

    /// Numeric slot, when the name carries one
    pub fn slot(&self) -> Option<u8> {
        self.name.strip_prefix(SLOT_PREFIX)?.parse().ok()
    }

    /// Path as shown in an editable cell
    ///
    /// Missing and empty look the same, and the trailing space the host
    /// appends on save is hidden.
    pub fn path_text(&self) -> &str {
        self.path.as_deref().unwrap_or_default().trim_end_matches(' ')
    }

    /// Render this binding as a line, without terminator
    pub fn to_line(&self) -> String {
        format!(
            "{}{}{} ",
            self.name.trim(),
            SEPARATOR,
            self.path_text().trim_end()
        )
    }
}

pub fn slot_name(suffix: impl std::fmt::Display) -> String {
    format!("{SLOT_PREFIX}{suffix}")
}

/// Find the path stored for `name` in the script file contents
///
/// Returns `None` when no line carries that slot key, and `Some("")` for a
/// line whose path is empty. Only the line terminator is removed from the
/// path; trailing spaces are kept as written.
pub fn lookup_path(contents: &str, name: &str) -> Option<String> {
    contents
        .lines()
        .filter(|line| line.starts_with(name))
        .find(|line| {
            line.split_once(ASSIGNMENT)
                .map_or(line.trim() == name, |(key, _)| key.trim() == name)
        })
        .map(|line| {
            line.split_once(SEPARATOR)
                .map(|(_, path)| path.to_string())
                .unwrap_or_default()
        })
}

/// Contents of a freshly seeded script file: header plus every slot, empty
pub fn default_contents() -> String {
    let mut out = String::from(HEADER);
    out.push_str(LINE_ENDING);
    for slot in 1..=SLOT_COUNT {
        out.push_str(&slot_name(slot));
        out.push_str(SEPARATOR);
        out.push_str(LINE_ENDING);
    }
    out
}

/// Serialize bindings in the order supplied, under the fixed header
pub fn serialize(bindings: &[ScriptBinding]) -> String {
    let mut out = String::from(HEADER);
    out.push_str(LINE_ENDING);
    for binding in bindings {
        out.push_str(&binding.to_line());
        out.push_str(LINE_ENDING);
    }
    out
}
