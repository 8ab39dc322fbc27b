// src/core/html.rs
//
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ ElementRef, Selector };

use crate::error::{ Error, Result };

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// Rendered text of an element: all descendant text nodes, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    super::sanitize::normalize_ws(&raw)
}
