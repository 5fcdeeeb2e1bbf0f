//! SQLite-backed roster store (`players` table)

use crate::backend::RosterSink;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::maintenance;
use crate::models::PlayerRecord;
use crate::pool::connect;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use tracing::info;

const CREATE_PLAYERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    team TEXT NOT NULL,
    player TEXT NOT NULL
)
"#;

/// Roster store holding one row per scraped `(team, player)` pair
///
/// The store is a scoped resource: open it at pipeline start and call
/// [`RosterStore::close`] once the pipeline finishes, whatever its outcome.
pub struct RosterStore {
    pool: SqlitePool,
    path: PathBuf,
}

impl RosterStore {
    /// Open the store at `path` with default settings, creating the
    /// `players` table if it does not exist
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_config(path, &StoreConfig::default()).await
    }

    /// Open the store at the configured roster path
    pub async fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::open_with_config(config.roster_db.clone(), config).await
    }

    /// Open the store at `path` using the pool settings from `config`
    pub async fn open_with_config(path: impl Into<PathBuf>, config: &StoreConfig) -> Result<Self> {
        config.validate().map_err(crate::error::PersistenceError::config)?;

        let path = path.into();
        let pool = connect(&path, config).await?;
        let store = Self { pool, path };
        store.ensure_schema().await?;

        info!("Roster store ready at {:?}", store.path);
        Ok(store)
    }

    /// Create the `players` table if absent; idempotent
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_PLAYERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Distinct team names seen in the roster, sorted
    pub async fn team_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT team FROM players ORDER BY team",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Drop every user table in this store; returns the dropped names
    pub async fn drop_all_tables(&self) -> Result<Vec<String>> {
        maintenance::drop_all_tables(&self.pool).await
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
        info!("Roster store at {:?} closed", self.path);
    }
}

#[async_trait::async_trait]
impl RosterSink for RosterStore {
    async fn insert_player(&self, team: &str, player: &str) -> Result<()> {
        sqlx::query("INSERT INTO players (team, player) VALUES (?, ?)")
            .bind(team)
            .bind(player)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn all_players(&self) -> Result<Vec<PlayerRecord>> {
        let players = sqlx::query_as::<_, PlayerRecord>(
            "SELECT id, team, player FROM players ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }
}
