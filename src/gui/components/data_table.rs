// src/gui/components/data_table.rs
//
// Detail view for one state: heading, table, copy/back buttons.
// Purely a view; row data is loaded by actions::view_libraries.

use eframe::egui::{ self, Align, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };

use crate::{ config::consts::LIBRARY_HEADERS, data::Library, gui::{ actions, app::App } };

// City, Library, Address, Zip, Phone
const COLUMN_WIDTHS: [f32; 5] = [140.0, 280.0, 320.0, 70.0, 130.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App, state: &str) {
    ui.heading(format!("Libraries in {state}"));
    ui.add_space(6.0);

    let mut go_back = false;
    let mut copy = false;
    ui.horizontal(|ui| {
        go_back = ui.button("Back to State Selection").clicked();
        if !app.libraries.is_empty() {
            copy = ui.button("Copy").on_hover_text("Copy as TSV").clicked();
            ui.label(format!("{} libraries", app.libraries.len()));
        }
    });
    ui.separator();

    match empty_message(state, &app.libraries) {
        Some(msg) => {
            ui.label(RichText::new(msg).italics());
        }
        None => table(ui, app),
    }

    if copy {
        let ctx = ui.ctx().clone();
        actions::copy(app, &ctx);
    }
    if go_back {
        actions::back(app);
    }
}

/// Message shown in place of the table when a state has no rows.
pub fn empty_message(state: &str, libraries: &[Library]) -> Option<String> {
    libraries.is_empty().then(|| format!("No libraries found for {state}."))
}

fn table(ui: &mut egui::Ui, app: &App) {
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("library_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for w in COLUMN_WIDTHS {
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
            }

            builder
                .header(24.0, |mut header| {
                    for h in LIBRARY_HEADERS {
                        header.col(|ui| {
                            ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.libraries.len(), |mut row| {
                        let Some(lib) = app.libraries.get(row.index()) else { return };
                        for cell in lib.cells() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(cell);
                                });
                            });
                        }
                    });
                });
        });
}
