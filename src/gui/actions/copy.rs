// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.json_text.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    logf!("Copy: {} bytes", app.json_text.len());
    ui_ctx.copy_text(app.json_text.clone());
    app.status("JSON copied to clipboard");
}
