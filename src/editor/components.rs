//! Editable tables for hotkey entries and script bindings

use eframe::egui;

use crate::common::constants::gui::*;
use crate::config::{HotkeyEntry, ScriptBinding};

/// Action / key combination table. Returns true if any cell was edited.
pub fn hotkey_table(ui: &mut egui::Ui, entries: &mut [HotkeyEntry]) -> bool {
    let mut changed = false;

    egui::ScrollArea::vertical()
        .id_salt("hotkey_table")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("hotkey_grid")
                .num_columns(2)
                .striped(true)
                .spacing([ITEM_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.strong("Action");
                    ui.strong("Key Combination");
                    ui.end_row();

                    for entry in entries.iter_mut() {
                        let is_header = entry.is_section_header();
                        let mut action = egui::TextEdit::singleline(&mut entry.action)
                            .desired_width(ACTION_COLUMN_WIDTH);
                        if is_header {
                            action = action.font(egui::TextStyle::Heading);
                        }
                        changed |= ui.add(action).changed();
                        changed |= ui
                            .add(
                                egui::TextEdit::singleline(&mut entry.key_combination)
                                    .desired_width(VALUE_COLUMN_WIDTH),
                            )
                            .changed();
                        ui.end_row();
                    }
                });
        });

    changed
}

/// Script / path table. Slot names are fixed; only paths are editable.
pub fn script_table(ui: &mut egui::Ui, bindings: &mut [ScriptBinding]) -> bool {
    let mut changed = false;

    egui::ScrollArea::vertical()
        .id_salt("script_table")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("script_grid")
                .num_columns(2)
                .striped(true)
                .spacing([ITEM_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.strong("Script");
                    ui.strong("Path to Script");
                    ui.end_row();

                    for binding in bindings.iter_mut() {
                        ui.label(&binding.name);

                        // Missing and empty paths share one cell; a missing path only
                        // becomes Some once the user types into it
                        let mut path = binding.path_text().to_string();
                        if ui
                            .add(egui::TextEdit::singleline(&mut path).desired_width(VALUE_COLUMN_WIDTH))
                            .changed()
                        {
                            binding.path = Some(path);
                            changed = true;
                        }
                        ui.end_row();
                    }
                });
        });

    changed
}
