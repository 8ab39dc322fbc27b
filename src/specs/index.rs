// src/specs/index.rs
//! State index page.
//!
//! Collects every anchor matching the state-link selector, resolves its href
//! against the index URL, and keeps first occurrences in page order. The
//! index page links to itself from the site menu; that link is dropped.

use url::Url;

use crate::config::options::TargetOptions;
use crate::core::html::selector;
use crate::error::{ Error, Result };

pub fn state_links(doc: &str, target: &TargetOptions) -> Result<Vec<String>> {
    let base = parse_url(&target.index_url)?;
    let links = selector(&target.state_link_selector)?;
    let html = scraper::Html::parse_document(doc);

    let mut out: Vec<String> = Vec::new();
    for a in html.select(&links) {
        let Some(href) = a.value().attr("href") else { continue };
        let abs = match base.join(href.trim()) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!(href, "skipping unresolvable link: {e}");
                continue;
            }
        };
        if same_page(&abs, &base) {
            continue;
        }
        let abs = s!(abs.as_str());
        if !out.contains(&abs) {
            out.push(abs);
        }
    }

    tracing::debug!(count = out.len(), "state links");
    Ok(out)
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| Error::Url { url: s!(raw), source })
}

fn same_page(a: &Url, b: &Url) -> bool {
    a.host_str() == b.host_str() && a.path().trim_end_matches('/') == b.path().trim_end_matches('/')
}
