// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Launching, navigating or reading the headless browser failed.
    #[error("browser: {0}")]
    Browser(String),

    #[error("store: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad url {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid selector `{0}`")]
    Selector(String),

    /// The page loaded but the expected element is not there.
    #[error("no `{selector}` on {url}")]
    MissingElement { selector: String, url: String },

    /// Offline page source has nothing for this URL.
    #[error("no page for {0}")]
    MissingPage(String),
}

impl Error {
    pub fn browser(e: impl std::fmt::Display) -> Self {
        Error::Browser(e.to_string())
    }
}
