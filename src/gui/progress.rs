// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Forwards pipeline progress into the status line. Runs on the worker thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: Option<egui::Context>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: Option<egui::Context>) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        // Wake the UI so the new line shows without mouse movement.
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, state: &str, libraries: usize) {
        self.done += 1;
        self.set_status(format!(
            "Saved {state}: {libraries} libraries ({}/{})",
            self.done, self.total
        ));
    }
    fn item_skipped(&mut self, state: &str) {
        self.done += 1;
        self.set_status(format!("{state} already saved ({}/{})", self.done, self.total));
    }
    // finish() is left to the pipeline's final log line (done, skipped or failed).
}
