// src/scrape.rs
//! The scrape-and-persist pipeline.
//!
//! ```text
//! store::status ──Complete──▶ Skipped (no browser, no writes)
//!      │
//!      └─Missing/Incomplete─▶ launch browser ─▶ index page ─▶ state links
//!                                  for each link: open ─▶ parse ─▶ save (1 tx) ─▶ pause
//!                             ─▶ close browser ─▶ mark completed ─▶ Completed
//! ```
//!
//! Strictly sequential. The first error aborts the run; states committed
//! before it stay on disk and the store is left `Incomplete`, so the next
//! run resumes instead of duplicating rows.

use std::thread;

use crate::{
    config::options::{ BrowserOptions, ScrapeOptions },
    error::{ Error, Result },
    progress::{ NullProgress, Progress },
    source::PageSource,
    specs,
    store::{ self, Store, StoreStatus },
};

pub const MSG_SKIPPING: &str = "✅ Data already exists. Skipping scraping.";
pub const MSG_STARTING: &str = "⏳ Scraping data, please wait...";
pub const MSG_DONE: &str = "✅ Scraping completed successfully!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// State pages visited.
    pub states: usize,
    /// Libraries written during this run.
    pub libraries: usize,
    /// States left alone because an earlier, interrupted run already saved them.
    pub already_saved: usize,
    /// This run picked up an interrupted store.
    pub resumed: bool,
}

#[derive(Debug)]
pub enum ScrapeOutcome {
    /// The store was already populated; nothing was fetched or written.
    Skipped,
    Completed(ScrapeSummary),
    Failed(Error),
}

impl ScrapeOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ScrapeOutcome::Failed(_))
    }
}

/// Run the pipeline against `opts.db_path`.
///
/// `launch` opens the page source; it is only called once the existence
/// guard has decided there is work to do.
pub fn run<S, F>(
    opts: &ScrapeOptions,
    launch: F,
    progress: Option<&mut dyn Progress>,
) -> ScrapeOutcome
where
    S: PageSource,
    F: FnOnce(&BrowserOptions) -> Result<S>,
{
    let mut null = NullProgress;
    let p: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let outcome = match try_run(opts, launch, &mut *p) {
        Ok(None) => ScrapeOutcome::Skipped,
        Ok(Some(summary)) => ScrapeOutcome::Completed(summary),
        Err(e) => {
            tracing::error!("scrape failed: {e}");
            p.log(&format!("❌ Scraping failed: {e}"));
            ScrapeOutcome::Failed(e)
        }
    };
    p.finish();
    outcome
}

fn try_run<S, F>(
    opts: &ScrapeOptions,
    launch: F,
    p: &mut dyn Progress,
) -> Result<Option<ScrapeSummary>>
where
    S: PageSource,
    F: FnOnce(&BrowserOptions) -> Result<S>,
{
    let status = store::status(&opts.db_path)?;
    tracing::info!(db = %opts.db_path.display(), ?status, "existence guard");

    if status == StoreStatus::Complete {
        p.log(MSG_SKIPPING);
        return Ok(None);
    }

    p.log(MSG_STARTING);
    let resumed = status == StoreStatus::Incomplete;
    if resumed {
        tracing::warn!("store was left incomplete by an earlier run; resuming");
    }

    let mut store = Store::open(&opts.db_path)?;
    store.mark_started()?;

    let mut source = launch(&opts.browser)?;

    let index = source.open(&opts.target.index_url)?;
    let links = specs::index::state_links(&index, &opts.target)?;
    if links.is_empty() {
        // An outage page or changed markup; completing here would lock the store empty.
        return Err(Error::MissingElement {
            selector: opts.target.state_link_selector.clone(),
            url: opts.target.index_url.clone(),
        });
    }
    tracing::info!(states = links.len(), "index loaded");
    p.begin(links.len());

    let mut summary = ScrapeSummary { resumed, ..ScrapeSummary::default() };

    for link in &links {
        let doc = source.open(link)?;
        let page = specs::state_page::parse(&doc, link, &opts.target)?;
        p.log(&format!("Scraping data for {}...", page.name));

        if resumed && store.state_id(&page.name)?.is_some() {
            tracing::info!(state = %page.name, "already saved, skipping");
            summary.already_saved += 1;
            p.item_skipped(&page.name);
        } else {
            let state_id = store.save_state_page(&page)?;
            tracing::info!(state = %page.name, state_id, libraries = page.libraries.len(), "committed");
            summary.libraries += page.libraries.len();
            p.item_done(&page.name, page.libraries.len());
        }

        summary.states += 1;

        if !opts.pause.is_zero() {
            thread::sleep(opts.pause);
        }
    }

    drop(source);
    store.mark_completed()?;

    tracing::info!(?summary, "scrape complete");
    p.log(MSG_DONE);
    Ok(Some(summary))
}
