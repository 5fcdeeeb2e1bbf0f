//! # Persistence Layer
//!
//! SQLite storage for the two NBA data stores:
//!
//! - **RosterStore**: the `players` table filled by the roster scraper
//! - **ScheduleStore**: the `teams` and `games` tables filled by the
//!   schedule loader
//! - **RosterSink**: the write seam the scraper depends on, with an
//!   in-memory implementation for tests
//! - **maintenance**: enumerate and drop every user table in a store
//!
//! Stores create their tables on open and commit every insert on its own.
//! Nothing is ever updated in place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use persistence::{RosterSink, RosterStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = RosterStore::open("nba_rosters.db").await?;
//!     store.insert_player("Boston Celtics", "Jayson Tatum").await?;
//!
//!     for row in store.all_players().await? {
//!         println!("{} {} {}", row.id, row.team, row.player);
//!     }
//!
//!     store.close().await;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod maintenance;
pub mod models;
mod pool;
pub mod roster;
pub mod schedule;

pub use backend::{InMemoryRosterStore, RosterSink};
pub use config::StoreConfig;
pub use error::{PersistenceError, Result};
pub use models::{GameRecord, NewGame, PlayerRecord, TeamRecord};
pub use roster::RosterStore;
pub use schedule::ScheduleStore;
