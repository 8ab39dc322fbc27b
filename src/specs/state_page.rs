// src/specs/state_page.rs
//! State detail page.
//!
//! - State name: first heading, minus the fixed " Public Libraries" suffix.
//!   A page without a heading is an error; the run cannot attribute rows.
//! - Libraries: every row under `#libraries tbody`. A row counts only with
//!   exactly five cells (City, Library, Address, Zip, Phone). Empty cells
//!   become "Not Available".

use scraper::Html;

use crate::config::consts::LIBRARY_COLUMNS;
use crate::config::options::TargetOptions;
use crate::core::html::{ selector, text_of };
use crate::core::sanitize::{ cell_or_placeholder, strip_heading_suffix };
use crate::data::{ Library, StatePage };
use crate::error::{ Error, Result };

pub fn parse(doc: &str, url: &str, target: &TargetOptions) -> Result<StatePage> {
    let heading = selector(&target.heading_selector)?;
    let rows = selector(&target.row_selector)?;
    let cells = selector(&target.cell_selector)?;

    let html = Html::parse_document(doc);

    let h = html.select(&heading).next().ok_or_else(|| Error::MissingElement {
        selector: target.heading_selector.clone(),
        url: s!(url),
    })?;
    let name = strip_heading_suffix(&text_of(h), &target.heading_suffix);

    let mut libraries = Vec::new();
    let mut skipped = 0usize;
    for tr in html.select(&rows) {
        let texts: Vec<String> = tr.select(&cells).map(|td| cell_or_placeholder(&text_of(td))).collect();
        match <[String; LIBRARY_COLUMNS]>::try_from(texts) {
            Ok(five) => libraries.push(Library::from_cells(five)),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(state = %name, skipped, "rows without five cells ignored");
    }

    Ok(StatePage { name, libraries })
}
