//! Desktop editor implemented with egui/eframe

use anyhow::{Result, anyhow};
use eframe::{NativeOptions, egui};
use tracing::{error, info};

use super::components;
use super::state::{EditorSession, StatusMessage};
use crate::common::constants::gui::*;
use crate::config::{EditorSettings, Preset};

/// User request collected while drawing a frame, handled after drawing
enum EditorAction {
    None,
    Save,
    Reset(Preset),
    Discard,
    OpenDocumentation,
}

struct EditorApp {
    session: EditorSession,
    settings: EditorSettings,
}

impl EditorApp {
    fn new(session: EditorSession, settings: EditorSettings) -> Self {
        info!("Initializing egui editor");
        Self { session, settings }
    }

    fn handle_action(&mut self, action: EditorAction) {
        let result = match action {
            EditorAction::None => return,
            EditorAction::Save => self.session.save_changes(),
            EditorAction::Reset(preset) => self.session.reset_to_preset(preset),
            EditorAction::Discard => self.session.discard_changes(),
            EditorAction::OpenDocumentation => {
                super::open_documentation();
                return;
            }
        };

        if let Err(err) = result {
            error!(error = ?err, "Editor action failed");
            self.session.status_message = Some(StatusMessage::error(format!("{err:#}")));
        }
    }

    fn menu_bar(&self, ui: &mut egui::Ui) -> EditorAction {
        let mut action = EditorAction::None;

        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                ui.menu_button("Reset Hotkeys", |ui| {
                    for preset in Preset::ALL {
                        if ui.button(preset.menu_label()).clicked() {
                            action = EditorAction::Reset(preset);
                            ui.close();
                        }
                    }
                });

                if ui
                    .add_enabled(
                        self.session.settings_changed,
                        egui::Button::new("Discard Changes"),
                    )
                    .clicked()
                {
                    action = EditorAction::Discard;
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Documentation").clicked() {
                    action = EditorAction::OpenDocumentation;
                    ui.close();
                }
            });
        });

        action
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = EditorAction::None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            action = self.menu_bar(ui);
        });

        egui::TopBottomPanel::bottom("save_bar").show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            ui.horizontal(|ui| {
                if let Some(message) = &self.session.status_message {
                    ui.colored_label(message.color, &message.text);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save Changes").clicked() {
                        action = EditorAction::Save;
                    }
                });
            });
            ui.add_space(ITEM_SPACING);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut path_text = self.session.store().paths().display_hotkey_file();
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut path_text).desired_width(f32::INFINITY),
            );
            ui.add_space(SECTION_SPACING);

            let config = &mut self.session.config;
            let mut changed = false;
            ui.columns(2, |columns| {
                changed |= components::hotkey_table(&mut columns[0], &mut config.entries);
                changed |= components::script_table(&mut columns[1], &mut config.bindings);
            });
            if changed {
                self.session.mark_changed();
            }
        });

        self.handle_action(action);

        // Remember the window size for the next launch
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            let (width, height) = (rect.width() as u16, rect.height() as u16);
            if width > 0 && height > 0 {
                self.settings.window_width = width;
                self.settings.window_height = height;
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.session.settings_changed {
            info!("Editor closed with unsaved changes");
        }
        if let Err(err) = self.settings.save() {
            error!(error = ?err, "Failed to save window geometry on exit");
        }
        info!("Editor exiting");
    }
}

pub fn run_editor(session: EditorSession, settings: EditorSettings) -> Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([
            settings.window_width as f32,
            settings.window_height as f32,
        ])
        .with_title(WINDOW_TITLE);

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new(session, settings)))),
    )
    .map_err(|err| anyhow!("Failed to launch egui editor: {err}"))
}
