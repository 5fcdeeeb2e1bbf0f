use persistence::NewGame;
use serde::Deserialize;

/// One row of the schedule file
///
/// Only the columns below are read; anything else in the file is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "Game Date")]
    pub game_date: String,

    #[serde(rename = "Start (ET)")]
    pub start_time: String,

    #[serde(rename = "Visitor/Neutral")]
    pub visitor_team: String,

    #[serde(rename = "Home/Neutral")]
    pub home_team: String,

    #[serde(rename = "Arena")]
    pub arena: String,
}

impl From<ScheduleRecord> for NewGame {
    fn from(record: ScheduleRecord) -> Self {
        NewGame {
            date: record.game_date,
            start_time: record.start_time,
            visitor_team: record.visitor_team,
            home_team: record.home_team,
            arena: record.arena,
        }
    }
}
