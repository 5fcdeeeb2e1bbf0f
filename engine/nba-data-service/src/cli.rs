//! # Command Line Interface
//!
//! Subcommands for scraping rosters, importing the schedule, querying both
//! stores and maintaining the roster store.

use crate::audit::audit_teams;
use crate::config::ServiceConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use persistence::{GameRecord, PlayerRecord, RosterSink, RosterStore, ScheduleStore, TeamRecord};
use roster_scraper::RosterScraper;
use schedule_loader::{games_on_date, games_on_stored_date, load_schedule_file};
use std::path::PathBuf;
use tracing::{error, info};

/// NBA roster and schedule data tool
#[derive(Parser, Debug)]
#[command(name = "nba-data")]
#[command(about = "Scrape NBA rosters, load the game schedule and query both")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scrape every team roster into the roster store
    ScrapeRosters,
    /// Load the schedule CSV into the schedule store
    LoadSchedule {
        /// Schedule file; defaults to the configured one
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Show games on a date given as YYYY-M-D
    GamesOn {
        /// Date such as 2025-3-4
        date: String,
    },
    /// Show games on a date written exactly as stored, e.g. "Tue, Mar 4, 2025"
    GamesOnRaw {
        /// Stored date string
        date: String,
    },
    /// Show every stored player
    Players,
    /// Show every schedule team
    Teams,
    /// Drop every table in the roster store
    DropRosterTables,
    /// List team names present in only one of the two stores
    AuditTeams,
}

/// CLI handler
pub struct CliHandler {
    config: ServiceConfig,
}

impl CliHandler {
    /// Create new CLI handler
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Handle CLI commands
    ///
    /// Every command opens the store(s) it needs and closes them before
    /// returning, whether or not the command succeeded.
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::ScrapeRosters => self.scrape_rosters().await,
            Commands::LoadSchedule { file } => self.load_schedule(file).await,
            Commands::GamesOn { date } => self.games_on(&date).await,
            Commands::GamesOnRaw { date } => self.games_on_raw(&date).await,
            Commands::Players => self.show_players().await,
            Commands::Teams => self.show_teams().await,
            Commands::DropRosterTables => self.drop_roster_tables().await,
            Commands::AuditTeams => self.audit_teams().await,
        }
    }

    async fn open_roster_store(&self) -> Result<RosterStore> {
        RosterStore::from_config(&self.config.stores).await.with_context(|| {
            format!("Failed to open roster store {:?}", self.config.stores.roster_db)
        })
    }

    async fn open_schedule_store(&self) -> Result<ScheduleStore> {
        ScheduleStore::from_config(&self.config.stores).await.with_context(|| {
            format!("Failed to open schedule store {:?}", self.config.stores.schedule_db)
        })
    }

    async fn scrape_rosters(&self) -> Result<()> {
        let scraper = RosterScraper::from_config(&self.config.scraper)?;
        let store = self.open_roster_store().await?;

        let result = scraper.run(&store).await;
        store.close().await;
        info!("Database connection closed.");

        let report = result.context("Roster scrape failed")?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        println!(
            "Inserted {} players for {} of {} teams ({} failed).",
            report.players_inserted(),
            report.teams.len(),
            report.teams_found,
            report.failures.len()
        );
        Ok(())
    }

    async fn load_schedule(&self, file: Option<PathBuf>) -> Result<()> {
        let path = file.unwrap_or_else(|| self.config.schedule.file.clone());
        let store = self.open_schedule_store().await?;

        let result = load_schedule_file(&path, &store).await;
        store.close().await;

        let summary = result.with_context(|| format!("Failed to load schedule from {:?}", path))?;
        println!("Loaded {} games and {} teams.", summary.games, summary.teams);
        Ok(())
    }

    async fn games_on(&self, date: &str) -> Result<()> {
        let store = self.open_schedule_store().await?;
        let result = games_on_date(&store, date).await;
        store.close().await;

        let lookup = result?;
        print_games(&lookup.games);
        println!("{} games on {}", lookup.games.len(), lookup.stored_date);
        Ok(())
    }

    async fn games_on_raw(&self, date: &str) -> Result<()> {
        let store = self.open_schedule_store().await?;
        let games = games_on_stored_date(&store, date).await;
        store.close().await;

        print_games(&games);
        println!("Games found with exact format: {}", games.len());
        Ok(())
    }

    async fn show_players(&self) -> Result<()> {
        let store = self.open_roster_store().await?;
        let players = match store.all_players().await {
            Ok(players) => players,
            Err(e) => {
                error!("An error occurred: {}", e);
                Vec::new()
            }
        };
        store.close().await;

        for player in &players {
            println!("{}", format_player(player));
        }
        Ok(())
    }

    async fn show_teams(&self) -> Result<()> {
        let store = self.open_schedule_store().await?;
        let teams = match store.all_teams().await {
            Ok(teams) => teams,
            Err(e) => {
                error!("An error occurred: {}", e);
                Vec::new()
            }
        };
        store.close().await;

        for team in &teams {
            println!("{}", format_team(team));
        }
        Ok(())
    }

    async fn drop_roster_tables(&self) -> Result<()> {
        let store = self.open_roster_store().await?;
        let result = store.drop_all_tables().await;
        store.close().await;

        let dropped = result.context("Failed to drop roster tables")?;
        if dropped.is_empty() {
            println!("No tables to drop.");
        }
        for table in &dropped {
            println!("Dropped table: {}", table);
        }
        Ok(())
    }

    async fn audit_teams(&self) -> Result<()> {
        let roster = self.open_roster_store().await?;
        let schedule = match self.open_schedule_store().await {
            Ok(schedule) => schedule,
            Err(e) => {
                roster.close().await;
                return Err(e);
            }
        };

        let result = audit_teams(&roster, &schedule).await;
        roster.close().await;
        schedule.close().await;

        let audit = result.context("Team audit failed")?;
        if audit.is_consistent() {
            println!("Team names match across both stores.");
            return Ok(());
        }
        for name in &audit.roster_only {
            println!("roster only:   {}", name);
        }
        for name in &audit.schedule_only {
            println!("schedule only: {}", name);
        }
        Ok(())
    }
}

fn print_games(games: &[GameRecord]) {
    for game in games {
        println!("{}", format_game(game));
    }
}

/// One line per game: id, date, start time, matchup and arena
pub fn format_game(game: &GameRecord) -> String {
    format!(
        "({}, '{}', '{}', '{}', '{}', '{}')",
        game.id, game.date, game.start_time, game.visitor_team, game.home_team, game.arena
    )
}

pub fn format_player(player: &PlayerRecord) -> String {
    format!("({}, '{}', '{}')", player.id, player.team, player.player)
}

pub fn format_team(team: &TeamRecord) -> String {
    format!("({}, '{}')", team.id, team.name)
}
