// src/gui/components/toolbar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("GameDistribution Parser");
        ui.separator();

        if ui.button("Extract (Ctrl+E)").clicked() {
            let ctx = ui.ctx().clone();
            actions::extract(app, &ctx);
        }
        if ui.button("Copy JSON (Ctrl+C)").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }

        ui.label("Output:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.out_path_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(220.0),
            )
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
        if ui.button("Save JSON").clicked() {
            actions::save(app);
        }

        if ui.button("Clear (Ctrl+L)").clicked() {
            app.clear();
        }

        let status = app.status.lock().unwrap().clone();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("Status: {status}"));
        });
    });
}
