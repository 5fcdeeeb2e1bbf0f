use anyhow::{Context, Result};
use persistence::config::DEFAULT_ROSTER_DB;
use persistence::RosterStore;
use roster_scraper::{RosterScraper, ScraperConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting NBA roster scraper...");

    let scraper = RosterScraper::from_config(&ScraperConfig::default())?;
    let store = RosterStore::open(DEFAULT_ROSTER_DB)
        .await
        .context("Failed to open roster store")?;

    let result = scraper.run(&store).await;
    store.close().await;
    info!("Database connection closed.");

    let report = result.context("Roster scrape failed")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!(
        "Inserted {} players for {} of {} teams.",
        report.players_inserted(),
        report.teams.len(),
        report.teams_found
    );

    Ok(())
}
