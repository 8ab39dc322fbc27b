// src/gui/components/state_picker.rs
use eframe::egui::{ self, RichText };

use crate::gui::{ actions, app::App };

const PLACEHOLDER: &str = "Select";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Choose a State");
    ui.add_space(8.0);

    if app.state_names.is_empty() {
        ui.label(RichText::new("No data yet. Press Scrape to build the library database.").italics());
        return;
    }

    let before = app.state.gui.selected_state.clone();
    let shown = before.as_deref().unwrap_or(PLACEHOLDER).to_owned();

    egui::ComboBox::from_id_salt("state_picker")
        .selected_text(shown)
        .width(240.0)
        .height(400.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut app.state.gui.selected_state, None, PLACEHOLDER);
            for name in &app.state_names {
                ui.selectable_value(
                    &mut app.state.gui.selected_state,
                    Some(name.clone()),
                    name.as_str(),
                );
            }
        });

    if app.state.gui.selected_state != before {
        tracing::debug!(selected = ?app.state.gui.selected_state, "state picked");
    }

    ui.add_space(8.0);
    if app.state.gui.can_view() && ui.button("View Libraries").clicked() {
        actions::view_libraries(app);
    }
}
