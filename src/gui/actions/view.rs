// src/gui/actions/view.rs
use crate::{ config::state::View, gui::app::App, store::{ self, Store } };

/// Refill the dropdown from the store. A missing store just means "nothing yet".
pub fn reload_states(app: &mut App) {
    let db = &app.state.options.db_path;
    if !store::exists(db) {
        app.state_names.clear();
        return;
    }
    match Store::open_read_only(db).and_then(|s| s.state_names()) {
        Ok(names) => {
            tracing::debug!(states = names.len(), "state list loaded");
            // Drop a selection the store no longer knows about.
            if let Some(sel) = &app.state.gui.selected_state {
                if !names.contains(sel) {
                    app.state.gui.selected_state = None;
                }
            }
            app.state_names = names;
        }
        Err(e) => {
            tracing::error!("loading state list failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

/// "View Libraries": switch to the detail table and load its rows.
pub fn view_libraries(app: &mut App) {
    if !app.state.gui.view_details() {
        return;
    }
    let View::ViewingDetails(state) = &app.state.gui.view else { return };
    let state = state.clone();

    let loaded = Store::open_read_only(&app.state.options.db_path).and_then(|s| s.libraries_for(&state));
    match loaded {
        Ok(libs) => {
            tracing::info!(state = %state, libraries = libs.len(), "viewing libraries");
            app.libraries = libs;
        }
        Err(e) => {
            tracing::error!(state = %state, "loading libraries failed: {e}");
            app.libraries.clear();
            app.status(format!("Error: {e}"));
        }
    }
}

/// "Back to State Selection".
pub fn back(app: &mut App) {
    app.state.gui.back();
    app.libraries.clear();
}
