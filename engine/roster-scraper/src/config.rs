//! Configuration for the roster scraper

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default directory page listing every team
pub const DEFAULT_BASE_URL: &str = "https://pdfroster.nba.com/nba/";

/// Default pause between team page fetches, in milliseconds
pub const DEFAULT_PACING_INTERVAL_MS: u64 = 1000;

/// Configuration for the RosterScraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Directory page listing the teams
    pub base_url: String,

    /// Browser-like identification header
    pub user_agent: String,

    /// Accept header sent with every request
    pub accept: String,

    /// Accept-Language header sent with every request
    pub accept_language: String,

    /// Referer header sent with every request
    pub referer: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Pacing between team page fetches
    pub pacing: PacingConfig,

    /// CSS selectors describing the expected markup
    pub selectors: SelectorConfig,
}

/// How team page fetches are spaced out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingStrategy {
    /// Wait a fixed interval between consecutive fetches
    Fixed,
    /// Allow short bursts, refilling one token per interval
    TokenBucket,
    /// No pacing at all
    Disabled,
}

/// Pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    pub strategy: PacingStrategy,

    /// Fixed interval, or token refill interval, in milliseconds
    pub interval_ms: u64,

    /// Token bucket capacity (ignored by the other strategies)
    pub burst: u32,
}

/// CSS selectors for the directory and team pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Container element of one team on the directory page
    pub team_container: String,

    /// Heading inside the team container
    pub team_heading: String,

    /// Link inside the heading
    pub team_link: String,

    /// Container element of one player on a team page
    pub player_container: String,

    /// Heading inside the player container holding "Name #Number"
    pub player_heading: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
                "(KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36"
            )
            .to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            referer: "https://www.google.com/".to_string(),
            timeout_secs: 30,
            pacing: PacingConfig::default(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self { strategy: PacingStrategy::Fixed, interval_ms: DEFAULT_PACING_INTERVAL_MS, burst: 1 }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            team_container: "div.small-12.large-4.columns".to_string(),
            team_heading: "h3".to_string(),
            team_link: "a".to_string(),
            player_container: "div.small-12.medium-3.large-3.columns.player".to_string(),
            player_heading: "h3".to_string(),
        }
    }
}

impl PacingConfig {
    /// Get the pacing interval as Duration
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl ScraperConfig {
    /// Get the request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Scraper base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Scraper timeout_secs must be greater than 0".to_string());
        }

        if self.pacing.strategy == PacingStrategy::TokenBucket {
            if self.pacing.burst == 0 {
                return Err("Token bucket burst must be greater than 0".to_string());
            }
            if self.pacing.interval_ms == 0 {
                return Err("Token bucket interval_ms must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}
