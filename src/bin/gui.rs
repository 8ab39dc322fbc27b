// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{ IconData, ViewportBuilder };
use pl_scrape::{ config::state::GuiState, gui };

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/pl_scrape.png"
    )))
    .ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let g = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([g.window_w as f32, g.window_h as f32])
        .with_title(gui::app::APP_TITLE);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
