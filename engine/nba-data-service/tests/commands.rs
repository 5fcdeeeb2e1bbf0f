use nba_data_service::{CliHandler, Commands, ServiceConfig};
use persistence::{RosterSink, RosterStore, ScheduleStore, StoreConfig};
use std::fs;
use tempfile::TempDir;

const SCHEDULE: &str = "\
Game Date,Start (ET),Visitor/Neutral,PTS,Home/Neutral,PTS,Attend.,Arena,Notes
\"Tue, Mar 4, 2025\",7:30p,Golden State Warriors,,New York Knicks,,,Madison Square Garden,
\"Wed, Mar 5, 2025\",8:00p,New York Knicks,,Boston Celtics,,,TD Garden,
";

fn config_in(temp_dir: &TempDir) -> ServiceConfig {
    let schedule_file = temp_dir.path().join("nba_schedule.csv");
    fs::write(&schedule_file, SCHEDULE).unwrap();

    let mut config = ServiceConfig::default();
    config.stores = StoreConfig::in_dir(temp_dir.path());
    config.schedule.file = schedule_file;
    config
}

#[tokio::test]
async fn test_load_schedule_uses_configured_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);
    let handler = CliHandler::new(config.clone());

    handler.handle_command(Commands::LoadSchedule { file: None }).await.unwrap();

    let store = ScheduleStore::from_config(&config.stores).await.unwrap();
    assert_eq!(store.count_games().await.unwrap(), 2);
    assert_eq!(store.all_teams().await.unwrap().len(), 3);
    store.close().await;
}

#[tokio::test]
async fn test_load_schedule_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let handler = CliHandler::new(config_in(&temp_dir));

    let missing = temp_dir.path().join("missing.csv");
    let result = handler.handle_command(Commands::LoadSchedule { file: Some(missing) }).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_games_on_rejects_bad_date_and_accepts_good_one() {
    let temp_dir = TempDir::new().unwrap();
    let handler = CliHandler::new(config_in(&temp_dir));
    handler.handle_command(Commands::LoadSchedule { file: None }).await.unwrap();

    handler
        .handle_command(Commands::GamesOn { date: "2025-3-4".to_string() })
        .await
        .unwrap();
    handler
        .handle_command(Commands::GamesOnRaw { date: "Tue, Mar 4, 2025".to_string() })
        .await
        .unwrap();

    let result = handler.handle_command(Commands::GamesOn { date: "03/04/2025".to_string() }).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_read_commands_on_fresh_stores() {
    let temp_dir = TempDir::new().unwrap();
    let handler = CliHandler::new(config_in(&temp_dir));

    handler.handle_command(Commands::Teams).await.unwrap();
    handler.handle_command(Commands::Players).await.unwrap();
    handler
        .handle_command(Commands::GamesOn { date: "2025-3-4".to_string() })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_drop_roster_tables_empties_store() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);

    let store = RosterStore::from_config(&config.stores).await.unwrap();
    store.insert_player("Boston Celtics", "Jayson Tatum").await.unwrap();
    store.close().await;

    let handler = CliHandler::new(config.clone());
    handler.handle_command(Commands::DropRosterTables).await.unwrap();
    handler.handle_command(Commands::Players).await.unwrap();

    // Reopening recreates an empty players table
    let store = RosterStore::from_config(&config.stores).await.unwrap();
    assert!(store.all_players().await.unwrap().is_empty());
    store.close().await;
}

#[tokio::test]
async fn test_audit_teams_across_stores() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);
    let handler = CliHandler::new(config.clone());
    handler.handle_command(Commands::LoadSchedule { file: None }).await.unwrap();

    let roster = RosterStore::from_config(&config.stores).await.unwrap();
    roster.insert_player("Boston Celtics", "Jayson Tatum").await.unwrap();
    roster.insert_player("LA Clippers", "James Harden").await.unwrap();

    let schedule = ScheduleStore::from_config(&config.stores).await.unwrap();
    let audit = nba_data_service::audit_teams(&roster, &schedule).await.unwrap();
    assert_eq!(audit.roster_only, vec!["LA Clippers".to_string()]);
    assert_eq!(
        audit.schedule_only,
        vec!["Golden State Warriors".to_string(), "New York Knicks".to_string()]
    );
    roster.close().await;
    schedule.close().await;

    handler.handle_command(Commands::AuditTeams).await.unwrap();
}

#[tokio::test]
async fn test_scrape_rosters_directory_failure_propagates() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_in(&temp_dir);
    // Nothing listens on port 1, so the directory fetch is refused
    config.scraper.base_url = "http://127.0.0.1:1/nba/".to_string();
    config.scraper.timeout_secs = 5;

    let handler = CliHandler::new(config.clone());
    let error = handler.handle_command(Commands::ScrapeRosters).await.unwrap_err();
    assert!(format!("{:#}", error).contains("Roster scrape failed"));

    // The store was closed and left empty
    let store = RosterStore::from_config(&config.stores).await.unwrap();
    assert!(store.all_players().await.unwrap().is_empty());
    store.close().await;
}
