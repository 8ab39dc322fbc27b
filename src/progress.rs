// src/progress.rs
/// Progress reporting for the scrape pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the number of state pages is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One state page committed to the store.
    fn item_done(&mut self, _state: &str, _libraries: usize) {}

    /// State page visited on a resumed run; its rows were already in the store.
    fn item_skipped(&mut self, _state: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Keeps every status line; handy for tests and for the CLI summary.
#[derive(Debug, Default)]
pub struct LogProgress {
    pub lines: Vec<String>,
    pub done: usize,
    pub skipped: usize,
    pub total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn item_done(&mut self, _state: &str, _libraries: usize) {
        self.done += 1;
    }
    fn item_skipped(&mut self, _state: &str) {
        self.skipped += 1;
    }
}
