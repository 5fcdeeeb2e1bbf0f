//! Row types for the roster and schedule stores

use serde::{Deserialize, Serialize};

/// A row of the `players` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerRecord {
    /// Autoincrement row id
    pub id: i64,
    /// Team name as scraped from the directory page
    pub team: String,
    /// Player name with the jersey number stripped
    pub player: String,
}

/// A row of the schedule-side `teams` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamRecord {
    /// Table-local id, not stable across runs
    pub id: i64,
    pub name: String,
}

/// A row of the `games` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameRecord {
    pub id: i64,
    /// Source-formatted date, e.g. "Tue, Mar 4, 2025"
    pub date: String,
    pub start_time: String,
    pub visitor_team: String,
    pub home_team: String,
    pub arena: String,
}

/// A game waiting to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub date: String,
    pub start_time: String,
    pub visitor_team: String,
    pub home_team: String,
    pub arena: String,
}
