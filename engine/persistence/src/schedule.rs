//! SQLite-backed schedule store (`teams` and `games` tables)

use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{GameRecord, NewGame, TeamRecord};
use crate::pool::connect;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use tracing::info;

const CREATE_TEAMS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS teams (id INTEGER PRIMARY KEY, name TEXT)";

const CREATE_GAMES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS games (
    id INTEGER PRIMARY KEY,
    date TEXT,
    start_time TEXT,
    visitor_team TEXT,
    home_team TEXT,
    arena TEXT
)
"#;

/// Schedule store holding teams and games loaded from the schedule file
pub struct ScheduleStore {
    pool: SqlitePool,
    path: PathBuf,
}

impl ScheduleStore {
    /// Open the store at `path` with default settings, creating the tables
    /// if they do not exist
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_config(path, &StoreConfig::default()).await
    }

    /// Open the store at the configured schedule path
    pub async fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::open_with_config(config.schedule_db.clone(), config).await
    }

    /// Open the store at `path` using the pool settings from `config`
    pub async fn open_with_config(path: impl Into<PathBuf>, config: &StoreConfig) -> Result<Self> {
        config.validate().map_err(crate::error::PersistenceError::config)?;

        let path = path.into();
        let pool = connect(&path, config).await?;
        let store = Self { pool, path };
        store.ensure_schema().await?;

        info!("Schedule store ready at {:?}", store.path);
        Ok(store)
    }

    /// Create the `teams` and `games` tables if absent; idempotent
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TEAMS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_GAMES_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a team row; returns its table-local id
    pub async fn insert_team(&self, name: &str) -> Result<i64> {
        let result = sqlx::query("INSERT INTO teams (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a game row; returns its table-local id
    pub async fn insert_game(&self, game: &NewGame) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO games (date, start_time, visitor_team, home_team, arena) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&game.date)
        .bind(&game.start_time)
        .bind(&game.visitor_team)
        .bind(&game.home_team)
        .bind(&game.arena)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Games whose stored date equals `date` exactly
    pub async fn games_on_date(&self, date: &str) -> Result<Vec<GameRecord>> {
        let games = sqlx::query_as::<_, GameRecord>(
            "SELECT id, date, start_time, visitor_team, home_team, arena \
             FROM games WHERE date = ? ORDER BY id",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(games)
    }

    /// Every team row
    pub async fn all_teams(&self) -> Result<Vec<TeamRecord>> {
        let teams = sqlx::query_as::<_, TeamRecord>("SELECT id, name FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(teams)
    }

    /// Total number of games stored
    pub async fn count_games(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM games")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Path of the underlying SQLite file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Release the connection pool
    pub async fn close(self) {
        self.pool.close().await;
        info!("Schedule store at {:?} closed", self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn game(date: &str) -> NewGame {
        NewGame {
            date: date.to_string(),
            start_time: "7:30p".to_string(),
            visitor_team: "Chicago Bulls".to_string(),
            home_team: "Detroit Pistons".to_string(),
            arena: "Little Caesars Arena".to_string(),
        }
    }

    #[tokio::test]
    async fn test_games_on_date_is_exact_match() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::open(temp_dir.path().join("schedule.db")).await.unwrap();

        store.insert_game(&game("Tue, Mar 4, 2025")).await.unwrap();
        store.insert_game(&game("Wed, Mar 5, 2025")).await.unwrap();

        let games = store.games_on_date("Tue, Mar 4, 2025").await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].home_team, "Detroit Pistons");

        // Zero-padded day never matches the stored representation
        assert!(store.games_on_date("Tue, Mar 04, 2025").await.unwrap().is_empty());
        assert_eq!(store.count_games().await.unwrap(), 2);
        store.close().await;
    }

    #[tokio::test]
    async fn test_insert_team_assigns_local_ids() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::open(temp_dir.path().join("schedule.db")).await.unwrap();

        let first = store.insert_team("Chicago Bulls").await.unwrap();
        let second = store.insert_team("Detroit Pistons").await.unwrap();
        assert!(second > first);

        let teams = store.all_teams().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "Chicago Bulls");
        store.close().await;
    }
}
