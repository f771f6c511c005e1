// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::config::state::AppState;
use crate::data::GameMetadata;

use super::thumb::ThumbState;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "GameDistribution Parser",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // paste buffer (central panel)
    pub input_text: String,

    // last successful extraction + its rendered JSON
    pub result: Option<GameMetadata>,
    pub json_text: String,

    // output text field UX (we map this <-> SaveOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (thumbnail worker writes here too)
    pub status: Arc<Mutex<String>>,

    // thumbnail preview: worker fills the cell, update() uploads
    pub thumb: Arc<Mutex<ThumbState>>,
    pub thumb_tex: Option<(String, egui::TextureHandle)>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.save.out_path().to_string_lossy().into();

        logf!("Init: window={}x{}", state.gui.window_w, state.gui.window_h);

        Self {
            state,
            input_text: s!(),
            result: None,
            json_text: s!(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Ready"))),
            thumb: Arc::new(Mutex::new(ThumbState::Idle)),
            thumb_tex: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    pub fn clear(&mut self) {
        self.input_text.clear();
        self.json_text.clear();
        self.result = None;
        self.thumb_tex = None;
        *self.thumb.lock().unwrap() = ThumbState::Idle;
        self.status("Ready");
        logd!("UI: Cleared input and output");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::thumb::poll(self, ctx);
        super::components::shortcuts(self, ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            super::components::toolbar::draw(ui, self);
        });

        egui::SidePanel::right("result")
            .resizable(true)
            .min_width(360.0)
            .show(ctx, |ui| {
                super::components::result_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::input_panel::draw(ui, self);
        });
    }
}
