//! Error types for the roster scraper

use persistence::PersistenceError;
use thiserror::Error;

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while scraping rosters
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// A URL could not be parsed or resolved
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A configured CSS selector does not parse
    #[error("Invalid selector {css:?}: {reason}")]
    Selector { css: String, reason: String },

    /// The directory page no longer has the expected structure
    #[error("Directory page {url} no longer matches selector {selector:?}")]
    DirectoryLayoutChanged { url: String, selector: String },

    /// Writing scraped rows failed
    #[error("Storage error: {0}")]
    Storage(#[from] PersistenceError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScrapeError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this is a transport fault (network error or bad status)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}
