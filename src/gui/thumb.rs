// src/gui/thumb.rs
//
// Thumbnail preview worker. The engine only derives the URL; fetching
// and decoding happen here, off the UI thread, reporting back through
// a shared cell that update() polls each frame.

use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;

use crate::core::net;
use crate::gui::app::App;

pub enum ThumbState {
    Idle,
    Loading(String),
    Ready { url: String, size: [usize; 2], rgba: Vec<u8> },
    Failed { url: String, reason: String },
}

/// Kick a background fetch for `url`. Empty URL resets the placeholder.
pub fn request(app: &mut App, ctx: &egui::Context, url: &str) {
    app.thumb_tex = None;
    if url.is_empty() {
        *app.thumb.lock().unwrap() = ThumbState::Idle;
        return;
    }

    *app.thumb.lock().unwrap() = ThumbState::Loading(s!(url));
    logd!("Thumb: Fetch {}", url);

    let cell = Arc::clone(&app.thumb);
    let repaint = ctx.clone();
    let url = s!(url);
    thread::spawn(move || {
        let outcome = fetch(&url);

        let mut slot = cell.lock().unwrap();
        // a newer request may have replaced this one; don't clobber it
        if matches!(&*slot, ThumbState::Loading(u) if *u == url) {
            *slot = match outcome {
                Ok((size, rgba)) => {
                    logd!("Thumb: OK {} ({}x{})", url, size[0], size[1]);
                    ThumbState::Ready { url, size, rgba }
                }
                Err(e) => {
                    loge!("Thumb: Error {}: {}", url, e);
                    ThumbState::Failed { url, reason: e.to_string() }
                }
            };
        }
        drop(slot);
        repaint.request_repaint();
    });
}

fn fetch(url: &str) -> Result<([usize; 2], Vec<u8>), Box<dyn std::error::Error>> {
    let bytes = net::http_get_bytes(url)?;
    let img = image::load_from_memory(&bytes)?.to_rgba8();
    let (w, h) = img.dimensions();
    Ok(([w as usize, h as usize], img.into_raw()))
}

/// Upload a finished fetch into a texture. Runs every frame; a no-op
/// unless the cell holds a result that isn't on screen yet.
pub fn poll(app: &mut App, ctx: &egui::Context) {
    let uploaded = {
        let slot = app.thumb.lock().unwrap();
        match &*slot {
            ThumbState::Ready { url, size, rgba }
                if app.thumb_tex.as_ref().map(|(u, _)| u) != Some(url) =>
            {
                let img = egui::ColorImage::from_rgba_unmultiplied(*size, rgba);
                let tex = ctx.load_texture("thumb", img, egui::TextureOptions::LINEAR);
                Some((s!(url), tex))
            }
            _ => None,
        }
    };
    if uploaded.is_some() {
        app.thumb_tex = uploaded;
    }
}
