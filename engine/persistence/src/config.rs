//! Configuration for the SQLite stores

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file name of the roster store
pub const DEFAULT_ROSTER_DB: &str = "nba_rosters.db";

/// Default file name of the schedule store
pub const DEFAULT_SCHEDULE_DB: &str = "nba_schedule.db";

/// Configuration for the roster and schedule stores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the roster store (players table)
    pub roster_db: PathBuf,

    /// Path of the schedule store (teams and games tables)
    pub schedule_db: PathBuf,

    /// Connection pool size; one writer per run, so 1 is the sane value
    pub max_connections: u32,

    /// How long a statement waits on a locked database, in seconds
    pub busy_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            roster_db: PathBuf::from(DEFAULT_ROSTER_DB),
            schedule_db: PathBuf::from(DEFAULT_SCHEDULE_DB),
            max_connections: 1,
            busy_timeout_secs: 5,
        }
    }
}

impl StoreConfig {
    /// Create a configuration with both stores under `data_dir`
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            roster_db: data_dir.join(DEFAULT_ROSTER_DB),
            schedule_db: data_dir.join(DEFAULT_SCHEDULE_DB),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_connections == 0 {
            return Err("Store max_connections must be greater than 0".to_string());
        }

        if self.roster_db.as_os_str().is_empty() {
            return Err("Roster store path must not be empty".to_string());
        }

        if self.schedule_db.as_os_str().is_empty() {
            return Err("Schedule store path must not be empty".to_string());
        }

        Ok(())
    }
}
