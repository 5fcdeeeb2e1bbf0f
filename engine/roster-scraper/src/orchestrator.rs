use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::extract::{extract_player_names, extract_team_links, RosterSelectors};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::pacing::{policy_from_config, RateLimitPolicy};
use crate::types::{Extraction, ScrapeReport, TeamFailure, TeamLink, TeamSummary};
use persistence::RosterSink;
use reqwest::Url;
use tracing::{error, info, warn};

/// What happened to a single team page
enum TeamOutcome {
    Inserted(usize),
    Empty,
    LayoutChanged,
}

/// NBA roster scraper
///
/// Fetches the directory page once, then every team page in turn,
/// strictly one request at a time with the pacing policy applied before
/// each team fetch.
pub struct RosterScraper {
    fetcher: Box<dyn PageFetcher>,
    pacing: Box<dyn RateLimitPolicy>,
    selectors: RosterSelectors,
    base_url: Url,
}

impl RosterScraper {
    /// Create a scraper talking HTTP, configured from `config`
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        config.validate().map_err(ScrapeError::config)?;

        let fetcher = HttpFetcher::new(config)?;
        let pacing = policy_from_config(&config.pacing)?;
        Self::new(Box::new(fetcher), pacing, config)
    }

    /// Create a scraper with an explicit fetcher and pacing policy
    pub fn new(
        fetcher: Box<dyn PageFetcher>,
        pacing: Box<dyn RateLimitPolicy>,
        config: &ScraperConfig,
    ) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ScrapeError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let selectors = RosterSelectors::new(&config.selectors)?;

        Ok(Self { fetcher, pacing, selectors, base_url })
    }

    /// Directory page URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch the directory page and extract the team links
    ///
    /// Fetch failures propagate; an unrecognized page is returned as such.
    pub async fn fetch_team_links(&self) -> Result<Extraction<TeamLink>> {
        let html = self.fetcher.fetch(self.base_url.as_str()).await?;
        Ok(extract_team_links(&html, &self.base_url, &self.selectors))
    }

    /// Fetch one team page and extract its player names
    pub async fn fetch_players(&self, team: &TeamLink) -> Result<Extraction<String>> {
        let html = self.fetcher.fetch(&team.url).await?;
        Ok(extract_player_names(&html, &self.selectors))
    }

    /// Run the whole pipeline, writing every `(team, player)` pair to `sink`
    ///
    /// A directory fetch failure, or a directory page that no longer has the
    /// expected structure, aborts the run. Anything going wrong for a single
    /// team is logged, recorded in the report, and skipped.
    pub async fn run<S>(&self, sink: &S) -> Result<ScrapeReport>
    where
        S: RosterSink + ?Sized,
    {
        let mut report = ScrapeReport::new(self.base_url.as_str());

        info!("Fetching team links from {}", self.base_url);
        let teams = match self.fetch_team_links().await? {
            Extraction::Found { items, .. } => items,
            Extraction::Unrecognized { selector } => {
                error!("Directory page {} does not match {:?}", self.base_url, selector);
                return Err(ScrapeError::DirectoryLayoutChanged {
                    url: self.base_url.to_string(),
                    selector,
                });
            }
        };

        report.teams_found = teams.len();
        if teams.is_empty() {
            info!("No team links found.");
            report.finish();
            return Ok(report);
        }

        info!("Found {} teams", teams.len());

        for team in &teams {
            self.pacing.acquire().await;

            info!("Processing team: {} ({})", team.name, team.url);
            match self.process_team(team, sink).await {
                Ok(TeamOutcome::Inserted(count)) => {
                    info!("Inserted {} players for {}.", count, team.name);
                    report.teams.push(TeamSummary { team: team.name.clone(), players: count });
                }
                Ok(TeamOutcome::Empty) => {
                    info!("No players found for {}.", team.name);
                    report.empty_teams.push(team.name.clone());
                }
                Ok(TeamOutcome::LayoutChanged) => {
                    warn!("Team page for {} does not match the player layout", team.name);
                    report.layout_changed.push(team.name.clone());
                }
                Err(e) => {
                    error!("Error processing {}: {}", team.name, e);
                    report.failures.push(TeamFailure {
                        team: team.name.clone(),
                        url: team.url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        report.finish();
        info!(
            "Scrape complete: {} players across {} teams \
             ({} empty, {} layout changes, {} failures)",
            report.players_inserted(),
            report.teams.len(),
            report.empty_teams.len(),
            report.layout_changed.len(),
            report.failures.len()
        );

        Ok(report)
    }

    async fn process_team<S>(&self, team: &TeamLink, sink: &S) -> Result<TeamOutcome>
    where
        S: RosterSink + ?Sized,
    {
        let players = match self.fetch_players(team).await? {
            Extraction::Found { items, .. } => items,
            Extraction::Unrecognized { .. } => return Ok(TeamOutcome::LayoutChanged),
        };

        if players.is_empty() {
            return Ok(TeamOutcome::Empty);
        }

        for player in &players {
            sink.insert_player(&team.name, player).await?;
        }

        Ok(TeamOutcome::Inserted(players.len()))
    }
}
