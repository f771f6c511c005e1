// src/gui/components/input_panel.rs

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label("Paste page source here (Ctrl+U in the browser, select all, copy):");

    egui::ScrollArea::vertical()
        .id_salt("input_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut app.input_text)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("<!DOCTYPE html> …"),
            );
        });
}
