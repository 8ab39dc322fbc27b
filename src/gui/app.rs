// src/gui/app.rs
use std::{
    error::Error,
    sync::{ Arc, Mutex },
    thread::JoinHandle,
};

use eframe::egui;

use crate::{
    config::state::{ AppState, View },
    data::Library,
    scrape::ScrapeOutcome,
    store::{ self, StoreStatus },
};

use super::{ actions, components };

pub const APP_TITLE: &str = "📚Libraries Near You";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    crate::log::init_file(&state.options.store_dir());
    tracing::info!(db = %state.options.db_path.display(), "gui start");

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // dropdown contents, straight from the store
    pub state_names: Vec<String>,

    // rows for the detail view currently shown
    pub libraries: Vec<Library>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub worker: Option<JoinHandle<ScrapeOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let status = match store::status(&state.options.db_path) {
            Ok(StoreStatus::Complete) => s!("Loaded local data"),
            Ok(StoreStatus::Incomplete) => s!("Previous scrape was interrupted; Scrape resumes it"),
            Ok(StoreStatus::Missing) => s!("Idle"),
            Err(e) => {
                tracing::error!("store check failed: {e}");
                format!("Error: {e}")
            }
        };

        let mut app = Self {
            state,
            state_names: Vec::new(),
            libraries: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            worker: None,
        };
        actions::reload_states(&mut app);
        tracing::info!(states = app.state_names.len(), "init");
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn is_running(&self) -> bool { self.worker.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_scrape(self);

        egui::TopBottomPanel::top("scrape_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            components::scrape_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.gui.view.clone() {
                View::SelectingState => components::state_picker::draw(ui, self),
                View::ViewingDetails(state) => components::data_table::draw(ui, self, &state),
            }
        });
    }
}
