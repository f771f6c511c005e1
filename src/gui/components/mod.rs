// src/gui/components/mod.rs
pub mod input_panel;
pub mod result_panel;
pub mod thumb_panel;
pub mod toolbar;

use eframe::egui::{self, Key, Modifiers};

use crate::gui::{actions, app::App};

/// Global keyboard shortcuts. Ctrl+C only fires when no text edit has
/// focus, so selections inside the editors keep their normal copy.
pub fn shortcuts(app: &mut App, ctx: &egui::Context) {
    if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::E)) {
        actions::extract(app, ctx);
    }
    if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::L)) {
        app.clear();
    }

    let editing = ctx.memory(|m| m.focused().is_some());
    if !editing && ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::C)) {
        actions::copy(app, ctx);
    }
}
