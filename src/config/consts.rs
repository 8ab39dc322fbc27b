// src/config/consts.rs

// Scrape target
pub const INDEX_URL: &str = "https://publiclibraries.com/state/";
pub const STATE_LINK_SELECTOR: &str = "a[href*='/state/']";
pub const HEADING_SELECTOR: &str = "h1";
pub const HEADING_SUFFIX: &str = " Public Libraries";
pub const LIBRARY_ROW_SELECTOR: &str = "#libraries tbody tr";
pub const LIBRARY_CELL_SELECTOR: &str = "td";
pub const LIBRARY_COLUMNS: usize = 5;

// Placeholder for empty cells
pub const NOT_AVAILABLE: &str = "Not Available";

// Local store
pub const STORE_DIR: &str = ".store";
pub const DB_FILE: &str = "libraries_data.db";
pub const DEBUG_LOG_FILE: &str = "debug.log";

// Browser
pub const WINDOW_W: u32 = 1920;
pub const WINDOW_H: u32 = 1080;
pub const NAV_TIMEOUT_SECS: u64 = 30;

// Politeness
pub const REQUEST_PAUSE_MS: u64 = 2_000;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "pl_scrape=info";

// Display
pub const LIBRARY_HEADERS: [&str; LIBRARY_COLUMNS] = ["City", "Library", "Address", "Zip", "Phone"];
