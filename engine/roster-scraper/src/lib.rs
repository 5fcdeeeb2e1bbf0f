//! NBA roster scraper
//!
//! Fetches the team directory page, follows every team link, pulls the
//! player names off each roster page and writes `(team, player)` pairs into
//! a [`persistence::RosterSink`].

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod orchestrator;
pub mod pacing;
pub mod types;

pub use config::{PacingConfig, PacingStrategy, ScraperConfig, SelectorConfig};
pub use error::{Result, ScrapeError};
pub use extract::{extract_player_names, extract_team_links, strip_jersey_number, RosterSelectors};
pub use fetch::{HttpFetcher, PageFetcher};
pub use orchestrator::RosterScraper;
pub use pacing::{FixedInterval, NoDelay, RateLimitPolicy, TokenBucket};
pub use types::{Extraction, ScrapeReport, TeamFailure, TeamLink, TeamSummary};
