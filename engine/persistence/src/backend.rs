//! Roster sink trait and implementations

use crate::error::Result;
use crate::models::PlayerRecord;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Destination for scraped `(team, player)` pairs
///
/// Every insert is committed on its own; there is no batching and no
/// update or upsert.
#[async_trait::async_trait]
pub trait RosterSink: Send + Sync {
    /// Insert one `(team, player)` row
    async fn insert_player(&self, team: &str, player: &str) -> Result<()>;

    /// Read back every row, in insertion order
    async fn all_players(&self) -> Result<Vec<PlayerRecord>>;
}

/// In-memory roster sink (for testing)
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterStore {
    rows: Arc<Mutex<Vec<PlayerRecord>>>,
}

impl InMemoryRosterStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows written so far
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    /// Whether nothing has been written yet
    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }
}

#[async_trait::async_trait]
impl RosterSink for InMemoryRosterStore {
    async fn insert_player(&self, team: &str, player: &str) -> Result<()> {
        let mut rows = self.rows.lock().await;
        let id = rows.len() as i64 + 1;
        rows.push(PlayerRecord { id, team: team.to_string(), player: player.to_string() });
        Ok(())
    }

    async fn all_players(&self) -> Result<Vec<PlayerRecord>> {
        Ok(self.rows.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store_keeps_duplicates() {
        let store = InMemoryRosterStore::new();
        assert!(store.is_empty().await);

        store.insert_player("Boston Celtics", "Jayson Tatum").await.unwrap();
        store.insert_player("Boston Celtics", "Jayson Tatum").await.unwrap();

        let rows = store.all_players().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].id, 2);
        assert_eq!(rows[0].team, rows[1].team);
        assert_eq!(rows[0].player, rows[1].player);
    }
}
