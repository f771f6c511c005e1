// src/gui/actions/save.rs
use crate::{file, gui::app::App};

pub fn save(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.save.set_path(&app.out_path_text);
        logf!(
            "Save: Out path set → {}",
            app.state.options.save.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let Some(meta) = app.result.as_ref() else {
        app.status("Nothing to save");
        logd!("Save: Clicked, but there's no extracted record");
        return;
    };

    let path = app.state.options.save.out_path();
    match file::write_json(&path, meta) {
        Ok(p) => {
            logf!("Save: OK → {}", p.display());
            app.status(format!("Saved {}", p.display()));
        }
        Err(e) => {
            loge!("Save: Error: {}", e);
            app.status(format!("Save error: {e}"));
        }
    }
}
