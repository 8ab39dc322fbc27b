// src/gui/actions/copy.rs
use eframe::egui;

use crate::{ csv, data::library_headers, gui::app::App };

/// Copy the visible library table to the clipboard as TSV (pastes into spreadsheets).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.libraries.is_empty() {
        app.status("Nothing to copy");
        tracing::debug!("copy clicked with an empty table");
        return;
    }

    let headers = library_headers();
    let rows: Vec<Vec<String>> = app.libraries.iter().map(|l| l.to_row()).collect();
    let txt = csv::rows_to_string(Some(headers.as_slice()), &rows, '\t');

    tracing::info!(rows = rows.len(), "copied libraries to clipboard");
    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} libraries to clipboard", rows.len()));
}
