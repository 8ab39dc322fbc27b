// src/source/fixture.rs
use std::collections::HashMap;

use crate::error::{ Error, Result };
use super::PageSource;

/// In-memory pages keyed by absolute URL. Records every URL it is asked for.
#[derive(Clone, Debug, Default)]
pub struct FixturePages {
    pages: HashMap<String, String>,
    fetched: Vec<String>,
}

impl FixturePages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert(url, html);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }

    /// Number of `open` calls so far, successful or not.
    pub fn fetches(&self) -> usize {
        self.fetched.len()
    }

    pub fn fetched(&self) -> &[String] {
        &self.fetched
    }
}

impl PageSource for FixturePages {
    fn open(&mut self, url: &str) -> Result<String> {
        self.fetched.push(s!(url));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::MissingPage(s!(url)))
    }
}
