//! One-pass import of the schedule file into the schedule store

use crate::error::{LoaderError, Result};
use crate::record::ScheduleRecord;
use persistence::{NewGame, ScheduleStore};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the schedule file
pub const DEFAULT_SCHEDULE_FILE: &str = "nba_schedule.csv";

/// Rows written by a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub games: usize,
    pub teams: usize,
}

/// Load the schedule file at `path` into `store`
pub async fn load_schedule_file(path: &Path, store: &ScheduleStore) -> Result<LoadSummary> {
    info!("Loading schedule from {:?}", path);

    let file = File::open(path)
        .map_err(|source| LoaderError::Io { path: path.to_path_buf(), source })?;
    load_schedule(file, store).await
}

/// Load CSV schedule data from `reader` into `store`
///
/// Every game row is inserted as it is read. Team names from the visitor
/// and home columns are inserted once each, the first time they appear,
/// ahead of their game, so every stored game has both teams stored. A
/// malformed row aborts the load; rows already written stay written.
pub async fn load_schedule<R: Read>(reader: R, store: &ScheduleStore) -> Result<LoadSummary> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut summary = LoadSummary::default();
    let mut seen = HashSet::new();

    for row in csv_reader.deserialize::<ScheduleRecord>() {
        let record = row?;

        for team in [&record.visitor_team, &record.home_team] {
            if seen.insert(team.clone()) {
                store.insert_team(team).await?;
                summary.teams += 1;
            }
        }

        let game = NewGame::from(record);
        let id = store.insert_game(&game).await?;
        debug!(
            "Inserted game {} on {}: {} at {}",
            id, game.date, game.visitor_team, game.home_team
        );
        summary.games += 1;
    }

    info!("Inserted {} games and {} teams", summary.games, summary.teams);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCHEDULE: &str = "\
Game Date,Start (ET),Visitor/Neutral,PTS,Home/Neutral,PTS,Attend.,Arena,Notes
\"Tue, Mar 4, 2025\",7:00p,Chicago Bulls,,Detroit Pistons,,,Little Caesars Arena,
\"Tue, Mar 4, 2025\",7:30p,Boston Celtics,,Chicago Bulls,,,United Center,
\"Wed, Mar 5, 2025\",8:00p,Detroit Pistons,,Boston Celtics,,,TD Garden,
";

    #[tokio::test]
    async fn test_load_collects_unique_teams() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::open(temp_dir.path().join("schedule.db")).await.unwrap();

        let summary = load_schedule(SCHEDULE.as_bytes(), &store).await.unwrap();
        assert_eq!(summary, LoadSummary { games: 3, teams: 3 });

        let names: Vec<String> =
            store.all_teams().await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Chicago Bulls", "Detroit Pistons", "Boston Celtics"]);
        store.close().await;
    }

    #[tokio::test]
    async fn test_missing_column_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::open(temp_dir.path().join("schedule.db")).await.unwrap();

        let csv = "Game Date,Start (ET),Visitor/Neutral,Home/Neutral\n\
                   \"Tue, Mar 4, 2025\",7:00p,A,B\n";
        let result = load_schedule(csv.as_bytes(), &store).await;
        assert!(matches!(result, Err(LoaderError::Csv(_))));
        store.close().await;
    }

    #[tokio::test]
    async fn test_short_row_keeps_teams_of_stored_games() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::open(temp_dir.path().join("schedule.db")).await.unwrap();

        let csv = "\
Game Date,Start (ET),Visitor/Neutral,Home/Neutral,Arena
\"Tue, Mar 4, 2025\",7:00p,Chicago Bulls,Detroit Pistons,Little Caesars Arena
\"Wed, Mar 5, 2025\",8:00p,Boston Celtics
";
        let result = load_schedule(csv.as_bytes(), &store).await;
        assert!(matches!(result, Err(LoaderError::Csv(_))));

        assert_eq!(store.count_games().await.unwrap(), 1);
        let names: Vec<String> =
            store.all_teams().await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Chicago Bulls", "Detroit Pistons"]);
        store.close().await;
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::open(temp_dir.path().join("schedule.db")).await.unwrap();

        let result = load_schedule_file(&temp_dir.path().join("nope.csv"), &store).await;
        assert!(matches!(result, Err(LoaderError::Io { .. })));
        store.close().await;
    }
}
