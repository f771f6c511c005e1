// src/gui/components/result_panel.rs
//
// Right panel: thumbnail preview, metadata field grid, pretty JSON.
// Purely a view over App; the engine already did all the work.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::data::GameMetadata;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    super::thumb_panel::draw(ui, app);

    ui.separator();

    // owned copy so the grid doesn't hold App borrowed while ui runs
    if let Some(meta) = app.result.clone() {
        field_grid(ui, &meta);
        ui.separator();
    }

    ui.label("Result (JSON)");
    egui::ScrollArea::both()
        .id_salt("json_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut shown = app.json_text.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut shown)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}

fn field_grid(ui: &mut egui::Ui, meta: &GameMetadata) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(92.0))
        .column(Column::remainder().clip(true))
        .body(|mut body| {
            for (label, value) in meta.fields() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.strong(label);
                    });
                    row.col(|ui| {
                        ui.label(value);
                    });
                });
            }
        });
}
