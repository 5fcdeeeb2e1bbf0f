//! Read path: exact-match game lookups by date

use crate::date::to_source_date;
use crate::error::Result;
use persistence::{GameRecord, ScheduleStore};
use tracing::{error, info};

/// Games found for one date lookup
#[derive(Debug, Clone)]
pub struct GameLookup {
    /// Date string actually compared against the store
    pub stored_date: String,
    pub games: Vec<GameRecord>,
}

/// Look up games for a `YYYY-M-D` date
///
/// The input is reformatted to the schedule file's format and compared by
/// exact string equality, so any drift in the stored format simply yields
/// zero games. A malformed input date is an error; a storage fault is
/// logged and reported as zero games.
pub async fn games_on_date(store: &ScheduleStore, input: &str) -> Result<GameLookup> {
    let stored_date = to_source_date(input)?;
    info!("Looking for games with date: '{}'", stored_date);

    let games = games_on_stored_date(store, &stored_date).await;
    info!("Found {} games", games.len());

    Ok(GameLookup { stored_date, games })
}

/// Look up games by a literal stored-format date such as "Tue, Mar 4, 2025"
///
/// Storage faults are logged and reported as zero games.
pub async fn games_on_stored_date(store: &ScheduleStore, stored_date: &str) -> Vec<GameRecord> {
    match store.games_on_date(stored_date).await {
        Ok(games) => games,
        Err(e) => {
            error!("An error occurred: {}", e);
            Vec::new()
        }
    }
}
