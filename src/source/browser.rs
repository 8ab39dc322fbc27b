// src/source/browser.rs
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{ Browser, LaunchOptions, Tab };

use crate::config::options::BrowserOptions;
use crate::error::{ Error, Result };
use super::PageSource;

/// Chrome kills itself after this long without DevTools traffic.
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// One Chrome process with one tab. Dropping it shuts Chrome down.
pub struct BrowserSession {
    // Keeps the process alive for as long as the tab is in use.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {
    pub fn launch(opts: &BrowserOptions) -> Result<Self> {
        let args: Vec<&OsStr> = vec![
            OsStr::new("--start-maximized"),
            OsStr::new("--disable-gpu"),
        ];

        let launch = LaunchOptions::default_builder()
            .headless(opts.headless)
            .window_size(Some(opts.window))
            .idle_browser_timeout(IDLE_TIMEOUT)
            .args(args)
            .build()
            .map_err(Error::browser)?;

        let browser = Browser::new(launch).map_err(Error::browser)?;
        let tab = browser.new_tab().map_err(Error::browser)?;
        tab.set_default_timeout(opts.nav_timeout);

        tracing::info!(
            headless = opts.headless,
            w = opts.window.0,
            h = opts.window.1,
            "browser session started"
        );

        Ok(Self { _browser: browser, tab })
    }
}

impl PageSource for BrowserSession {
    fn open(&mut self, url: &str) -> Result<String> {
        tracing::debug!(url, "navigate");
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(Error::browser)?;
        self.tab.get_content().map_err(Error::browser)
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        tracing::info!("browser session closed");
    }
}
