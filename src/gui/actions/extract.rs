// src/gui/actions/extract.rs
use eframe::egui;

use crate::gui::{app::App, thumb};

pub fn extract(app: &mut App, ui_ctx: &egui::Context) {
    let html = app.input_text.trim();
    if html.is_empty() {
        app.status("Paste the page source first");
        logd!("Extract: Clicked with empty input");
        return;
    }

    logf!("Extract: Begin ({} bytes)", html.len());

    // → This is where the extraction happens ←
    match crate::extract::extract(html) {
        Ok(meta) => {
            app.json_text = match meta.to_pretty_json() {
                Ok(json) => json,
                Err(e) => {
                    loge!("Extract: Serialize failed: {}", e);
                    app.status(format!("Serialize error: {e}"));
                    return;
                }
            };

            logf!("Extract: OK id={:?} title={:?}", meta.id, meta.title);

            // default save stem follows the extracted game
            if !app.out_path_dirty {
                app.state.options.save.set_stem(&meta.suggested_stem());
                app.out_path_text = app
                    .state
                    .options
                    .save
                    .out_path()
                    .to_string_lossy()
                    .into_owned();
            }

            thumb::request(app, ui_ctx, &meta.thumb);
            app.result = Some(meta);
            app.status("Extraction complete");
        }
        Err(e) => {
            loge!("Extract: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
