//! Cross-store team name audit
//!
//! The roster store and the schedule store each keep their own team names
//! with no shared key. This reports names that appear on only one side.

use persistence::{RosterStore, ScheduleStore};
use serde::Serialize;
use std::collections::BTreeSet;

/// Team names found in only one of the two stores, sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamAudit {
    pub roster_only: Vec<String>,
    pub schedule_only: Vec<String>,
}

impl TeamAudit {
    /// Compare two sets of team names; surrounding whitespace is ignored
    pub fn compare<R, S>(roster: R, schedule: S) -> Self
    where
        R: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        let roster: BTreeSet<String> = roster.into_iter().map(|n| n.trim().to_string()).collect();
        let schedule: BTreeSet<String> =
            schedule.into_iter().map(|n| n.trim().to_string()).collect();

        Self {
            roster_only: roster.difference(&schedule).cloned().collect(),
            schedule_only: schedule.difference(&roster).cloned().collect(),
        }
    }

    /// Whether every team name appears in both stores
    pub fn is_consistent(&self) -> bool {
        self.roster_only.is_empty() && self.schedule_only.is_empty()
    }
}

/// Audit the team names of both stores
pub async fn audit_teams(
    roster: &RosterStore,
    schedule: &ScheduleStore,
) -> persistence::Result<TeamAudit> {
    let roster_names = roster.team_names().await?;
    let schedule_names = schedule.all_teams().await?.into_iter().map(|t| t.name);
    Ok(TeamAudit::compare(roster_names, schedule_names))
}
