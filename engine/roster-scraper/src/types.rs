use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team entry on the directory page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLink {
    /// Team name (e.g., "Boston Celtics")
    pub name: String,
    /// Absolute URL of the team's roster page
    pub url: String,
}

/// Outcome of running an extractor over a page
///
/// Separates "the page looks right but holds nothing" from "the page no
/// longer looks the way the extractor expects", so that markup drift is
/// not mistaken for an empty roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    /// At least one container matched; `items` may still be empty
    Found {
        items: Vec<T>,
        /// Containers that matched but yielded nothing usable
        skipped: usize,
    },
    /// No container matched the selector at all
    Unrecognized { selector: String },
}

impl<T> Extraction<T> {
    /// Items extracted, empty when nothing was found or the page was not recognized
    pub fn items(&self) -> &[T] {
        match self {
            Self::Found { items, .. } => items,
            Self::Unrecognized { .. } => &[],
        }
    }

    /// Consume the extraction, keeping only the items
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Found { items, .. } => items,
            Self::Unrecognized { .. } => Vec::new(),
        }
    }

    /// Number of items extracted
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether no items were extracted, for whatever reason
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Whether the page structure did not match the extractor's assumptions
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized { .. })
    }
}

/// Players inserted for one team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: String,
    pub players: usize,
}

/// A team that could not be processed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamFailure {
    pub team: String,
    pub url: String,
    pub reason: String,
}

/// Summary of a scraper run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    /// Directory page the run started from
    pub source_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Team links found on the directory page
    pub teams_found: usize,
    /// Teams with at least one player inserted
    pub teams: Vec<TeamSummary>,
    /// Teams whose page was recognized but listed no players
    pub empty_teams: Vec<String>,
    /// Teams whose page no longer matched the player selector
    pub layout_changed: Vec<String>,
    /// Teams skipped because of a fetch or storage failure
    pub failures: Vec<TeamFailure>,
}

impl ScrapeReport {
    /// Create an empty report for a run starting now
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            started_at: Utc::now(),
            finished_at: None,
            teams_found: 0,
            teams: Vec::new(),
            empty_teams: Vec::new(),
            layout_changed: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Mark the run as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Total players inserted across all teams
    pub fn players_inserted(&self) -> usize {
        self.teams.iter().map(|t| t.players).sum()
    }

    /// Whether every team was fetched and matched the expected layout
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.layout_changed.is_empty()
    }
}
