//! NBA data command line tool

use anyhow::Result;
use clap::Parser;
use tracing::info;

use nba_data_service::{initialize_logging, load_configuration, Cli, CliHandler};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = load_configuration(cli.config.as_deref())?;
    initialize_logging(&config.logging)?;

    info!("Starting NBA data service v{}", env!("CARGO_PKG_VERSION"));

    let handler = CliHandler::new(config);
    handler.handle_command(cli.command).await
}
