//! NBA Data Service Library
//!
//! Configuration, logging and the command line front end tying the roster
//! scraper, the schedule loader and the two SQLite stores together.

use anyhow::{Context, Result};
use std::path::Path;

pub mod audit;
pub mod cli;
pub mod config;
pub mod logging;

pub use audit::{audit_teams, TeamAudit};
pub use cli::{Cli, CliHandler, Commands};
pub use config::{LoggingConfig, ScheduleSettings, ServiceConfig};
pub use logging::initialize_logging;

/// Load configuration from files and environment variables
pub fn load_configuration(path: Option<&Path>) -> Result<ServiceConfig> {
    config::load_config(path).context("Failed to load service configuration")
}
