// src/config/options.rs
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;

/// Everything the pipeline needs to know about where to read and where to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub target: TargetOptions,
    pub browser: BrowserOptions,
    /// SQLite file backing the store.
    pub db_path: PathBuf,
    /// Fixed pause after each state page.
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            target: TargetOptions::default(),
            browser: BrowserOptions::default(),
            db_path: PathBuf::from(DB_FILE),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    pub fn with_db_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.db_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Directory holding the debug log (next to the database by default).
    pub fn store_dir(&self) -> PathBuf {
        match self.db_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.join(STORE_DIR),
            _ => PathBuf::from(STORE_DIR),
        }
    }
}

/// Where the listings live and how to find them in the markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetOptions {
    pub index_url: String,
    pub state_link_selector: String,
    pub heading_selector: String,
    pub heading_suffix: String,
    pub row_selector: String,
    pub cell_selector: String,
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self {
            index_url: s!(INDEX_URL),
            state_link_selector: s!(STATE_LINK_SELECTOR),
            heading_selector: s!(HEADING_SELECTOR),
            heading_suffix: s!(HEADING_SUFFIX),
            row_selector: s!(LIBRARY_ROW_SELECTOR),
            cell_selector: s!(LIBRARY_CELL_SELECTOR),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub headless: bool,
    pub window: (u32, u32),
    pub nav_timeout: Duration,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window: (WINDOW_W, WINDOW_H),
            nav_timeout: Duration::from_secs(NAV_TIMEOUT_SECS),
        }
    }
}
