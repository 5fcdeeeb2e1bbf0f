//! Structural extraction of team links and player names from roster markup

use crate::config::SelectorConfig;
use crate::error::{Result, ScrapeError};
use crate::types::{Extraction, TeamLink};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Separator between a player's name and jersey number ("Jane Doe #23")
pub const JERSEY_MARKER: char = '#';

/// Parsed selectors for the directory and team pages
#[derive(Debug, Clone)]
pub struct RosterSelectors {
    team_container_css: String,
    player_container_css: String,
    team_container: Selector,
    team_heading: Selector,
    team_link: Selector,
    player_container: Selector,
    player_heading: Selector,
}

impl RosterSelectors {
    /// Parse the configured selectors
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            team_container_css: config.team_container.clone(),
            player_container_css: config.player_container.clone(),
            team_container: parse_selector(&config.team_container)?,
            team_heading: parse_selector(&config.team_heading)?,
            team_link: parse_selector(&config.team_link)?,
            player_container: parse_selector(&config.player_container)?,
            player_heading: parse_selector(&config.player_heading)?,
        })
    }

    /// Selectors matching the current pdfroster.nba.com markup
    pub fn standard() -> Result<Self> {
        Self::new(&SelectorConfig::default())
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Selector { css: css.to_string(), reason: e.to_string() })
}

/// Lazily yield `(team name, team page URL)` pairs in document order
///
/// Each team sits in a container holding a heading holding a link; relative
/// links are resolved against `base`. Containers that break the pattern are
/// skipped.
pub fn team_links<'a>(
    document: &'a Html,
    selectors: &'a RosterSelectors,
    base: &'a Url,
) -> impl Iterator<Item = TeamLink> + 'a {
    document
        .select(&selectors.team_container)
        .filter_map(move |container| team_link(container, selectors, base))
}

fn team_link(
    container: ElementRef<'_>,
    selectors: &RosterSelectors,
    base: &Url,
) -> Option<TeamLink> {
    let heading = container.select(&selectors.team_heading).next()?;
    let link = heading.select(&selectors.team_link).next()?;
    let href = link.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }

    let name = normalize_whitespace(link.text());
    if name.is_empty() {
        return None;
    }

    match base.join(href) {
        Ok(url) => Some(TeamLink { name, url: url.to_string() }),
        Err(e) => {
            debug!("Skipping team {} with unresolvable href {:?}: {}", name, href, e);
            None
        }
    }
}

/// Lazily yield player names from a team page, jersey numbers stripped
pub fn player_names<'a>(
    document: &'a Html,
    selectors: &'a RosterSelectors,
) -> impl Iterator<Item = String> + 'a {
    document
        .select(&selectors.player_container)
        .filter_map(move |container| player_name(container, selectors))
}

fn player_name(container: ElementRef<'_>, selectors: &RosterSelectors) -> Option<String> {
    let heading = container.select(&selectors.player_heading).next()?;
    strip_jersey_number(&normalize_whitespace(heading.text()))
}

/// Keep the part of a heading before the jersey marker, trimmed
///
/// Returns `None` when nothing is left.
pub fn strip_jersey_number(text: &str) -> Option<String> {
    let name = text.split(JERSEY_MARKER).next().unwrap_or_default().trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Extract every team link from a directory page
pub fn extract_team_links(
    html: &str,
    base: &Url,
    selectors: &RosterSelectors,
) -> Extraction<TeamLink> {
    let document = Html::parse_document(html);
    let containers = document.select(&selectors.team_container).count();
    if containers == 0 {
        return Extraction::Unrecognized { selector: selectors.team_container_css.clone() };
    }

    let items: Vec<TeamLink> = team_links(&document, selectors, base).collect();
    let skipped = containers - items.len();
    if skipped > 0 {
        debug!("Skipped {} team containers without a usable link", skipped);
    }

    Extraction::Found { items, skipped }
}

/// Extract every player name from a team page
pub fn extract_player_names(html: &str, selectors: &RosterSelectors) -> Extraction<String> {
    let document = Html::parse_document(html);
    let containers = document.select(&selectors.player_container).count();
    if containers == 0 {
        return Extraction::Unrecognized { selector: selectors.player_container_css.clone() };
    }

    let items: Vec<String> = player_names(&document, selectors).collect();
    let skipped = containers - items.len();

    Extraction::Found { items, skipped }
}

/// Concatenate text fragments and collapse runs of whitespace
fn normalize_whitespace<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    let joined: String = fragments.collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
