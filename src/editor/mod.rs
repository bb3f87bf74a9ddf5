//! Editor shells - egui desktop window and its editing session

mod app;
mod components;
pub mod state;

use tracing::{error, info};

use crate::common::constants::links;

pub use app::run_editor;
pub use state::EditorSession;

/// Open the online documentation in the default browser
///
/// Fire-and-forget: a failure is logged and otherwise ignored.
pub fn open_documentation() {
    info!(url = links::DOCUMENTATION, "Opening documentation");
    if let Err(e) = open::that(links::DOCUMENTATION) {
        error!(error = %e, url = links::DOCUMENTATION, "Failed to open documentation");
    }
}
