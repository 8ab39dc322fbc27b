// src/gui/actions/scrape.rs
use std::thread;

use eframe::egui;

use crate::{
    gui::{ actions, app::App, progress::GuiProgress },
    scrape::{ self, ScrapeOutcome },
    source::BrowserSession,
};

/// Start the pipeline on a worker thread. The frame loop keeps drawing and
/// picks up the result in `poll_scrape`.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.worker.is_some() {
        tracing::debug!("scrape clicked while a run is in progress");
        return;
    }

    let opts = app.state.options.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();

    tracing::info!(db = %opts.db_path.display(), index = %opts.target.index_url, "scrape requested");
    app.status("⏳ Scraping data, please wait...");

    let spawned = thread::Builder::new()
        .name(s!("scrape"))
        .spawn(move || {
            let mut prog = GuiProgress::new(status, Some(ctx.clone()));
            let outcome = scrape::run(&opts, BrowserSession::launch, Some(&mut prog));
            ctx.request_repaint();
            outcome
        });

    match spawned {
        Ok(handle) => app.worker = Some(handle),
        Err(e) => {
            tracing::error!("could not start scrape thread: {e}");
            app.status(format!("❌ Scraping failed: {e}"));
        }
    }
}

/// Collect a finished run, if any. Called every frame.
pub fn poll_scrape(app: &mut App) {
    let finished = app.worker.as_ref().is_some_and(|h| h.is_finished());
    if !finished {
        return;
    }
    let Some(handle) = app.worker.take() else { return };

    match handle.join() {
        // The pipeline already put its final line into the status.
        Ok(ScrapeOutcome::Completed(summary)) => {
            tracing::info!(states = summary.states, libraries = summary.libraries, "scrape finished");
        }
        Ok(ScrapeOutcome::Skipped) => {}
        Ok(ScrapeOutcome::Failed(e)) => {
            tracing::warn!("scrape ended with error: {e}");
        }
        Err(_) => {
            tracing::error!("scrape thread panicked");
            app.status("❌ Scraping failed: worker panicked");
        }
    }

    // Partial runs still committed whole states; show whatever is there.
    actions::reload_states(app);
}
