//! Hotkey file format
//!
//! Line-oriented `action = chord` text with `[Section]` headers and blank
//! lines, CRLF terminated. Parsing is permissive: every line yields an entry,
//! splitting on the first `=` only, because the file is hand-edited by users
//! and rewritten by the host.

use serde::{Deserialize, Serialize};

use crate::common::constants::hotkeys::*;

/// One line of the hotkey file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HotkeyEntry {
    /// Dotted action identifier, `[Section]` header, or empty for a blank line
    pub action: String,
    /// `+`-joined key chord, possibly empty
    pub key_combination: String,
}

impl HotkeyEntry {
    pub fn new(action: impl Into<String>, key_combination: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            key_combination: key_combination.into(),
        }
    }

    /// Section header entry (`[Actions]`)
    pub fn section(header: impl Into<String>) -> Self {
        Self::new(header, "")
    }

    /// Parse one raw line
    ///
    /// Surrounding whitespace and every tab character are removed, then the
    /// line is split on its first `=`. A line without `=` becomes an entry
    /// with an empty key combination.
    pub fn parse_line(line: &str) -> Self {
        let cleaned = line.trim().replace('\t', "");
        match cleaned.split_once(ASSIGNMENT) {
            Some((action, key)) => Self::new(action.trim(), key.trim()),
            None => Self::section(cleaned),
        }
    }

    pub fn is_section_header(&self) -> bool {
        self.action.starts_with(SECTION_OPEN) && self.key_combination.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.action.is_empty() && self.key_combination.is_empty()
    }

    /// Suffix after `action.global.script`, if this entry runs a user script
    pub fn script_suffix(&self) -> Option<&str> {
        self.action
            .find(SCRIPT_ACTION_MARKER)
            .map(|idx| &self.action[idx + SCRIPT_ACTION_MARKER.len()..])
    }

    /// Render this entry as a line, without terminator
    pub fn to_line(&self) -> String {
        let action = self.action.trim();
        let key = self.key_combination.trim();

        if action.contains(SECTION_OPEN) && key.is_empty() {
            action.to_string()
        } else if !action.is_empty() && !key.is_empty() {
            format!("{action} = {key}")
        } else if !action.is_empty() {
            // Keep the key in the file so it can be assigned later
            format!("{action} = ")
        } else {
            String::new()
        }
    }
}

/// Parse a whole hotkey file, one entry per line in file order
pub fn parse(contents: &str) -> Vec<HotkeyEntry> {
    contents.lines().map(HotkeyEntry::parse_line).collect()
}

/// Serialize entries back into the host's CRLF text format
pub fn serialize(entries: &[HotkeyEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_line());
        out.push_str(LINE_ENDING);
    }
    out
}
