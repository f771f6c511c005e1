// src/gui/components/thumb_panel.rs

use eframe::egui;

use crate::config::consts::THUMB_PREVIEW_PX;
use crate::gui::{app::App, thumb::ThumbState};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label("Game Thumbnail");

    let side = THUMB_PREVIEW_PX;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());

    if let Some((_, tex)) = &app.thumb_tex {
        egui::Image::new(tex).paint_at(ui, rect);
    } else {
        let text = match &*app.thumb.lock().unwrap() {
            ThumbState::Loading(_) => s!("Loading…"),
            ThumbState::Failed { reason, .. } => join!("Error loading image\n", reason),
            _ => s!("No Image"),
        };
        placeholder(ui, rect, &text);
    }

    if let Some(meta) = &app.result {
        if !meta.thumb.is_empty() {
            ui.add(
                egui::Label::new(egui::RichText::new(&meta.thumb).small().monospace())
                    .truncate(),
            );
        }
    }
}

fn placeholder(ui: &egui::Ui, rect: egui::Rect, text: &str) {
    ui.painter().rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::TextStyle::Body.resolve(ui.style()),
        ui.visuals().weak_text_color(),
    );
}
