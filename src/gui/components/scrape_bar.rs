// src/gui/components/scrape_bar.rs
//
// Top strip: Scrape button, spinner while the worker runs, status line.

use eframe::egui::{ self, widgets::Spinner };

use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.is_running();

    ui.horizontal(|ui| {
        let scrape_btn = ui
            .add_enabled(!running, egui::Button::new("Scrape"))
            .on_hover_text("Fetch every state into the local database (skipped if it already exists)");
        if scrape_btn.clicked() {
            let ctx = ui.ctx().clone();
            actions::scrape(app, &ctx);
        }

        if running {
            ui.add(Spinner::new());
        }

        ui.separator();
        ui.label(app.status_text());
    });
}
