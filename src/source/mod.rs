// src/source/mod.rs
//! Where page HTML comes from.
//!
//! The pipeline only ever asks for "the rendered document at this URL".
//! Live runs drive a headless Chrome tab ([`BrowserSession`]); tests and
//! benches hand it canned documents ([`FixturePages`]).

mod browser;
mod fixture;

pub use browser::BrowserSession;
pub use fixture::FixturePages;

use crate::error::Result;

pub trait PageSource {
    /// Navigate to `url` and return the document HTML once loaded.
    fn open(&mut self, url: &str) -> Result<String>;
}

impl<T: PageSource + ?Sized> PageSource for &mut T {
    fn open(&mut self, url: &str) -> Result<String> {
        (**self).open(url)
    }
}
