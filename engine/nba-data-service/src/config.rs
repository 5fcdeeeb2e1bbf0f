//! Service configuration management

use config::{Config, Environment, File, FileFormat};
use persistence::StoreConfig;
use roster_scraper::ScraperConfig;
use schedule_loader::DEFAULT_SCHEDULE_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file read when `--config` is not given; optional
pub const DEFAULT_CONFIG_FILE: &str = "nba-data.toml";

/// Prefix of environment overrides, e.g. `NBA_DATA__SCRAPER__PACING__INTERVAL_MS`
pub const ENV_PREFIX: &str = "NBA_DATA";

/// Errors raised while loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Roster and schedule store locations
    pub stores: StoreConfig,

    /// Roster scraper configuration
    pub scraper: ScraperConfig,

    /// Schedule import settings
    pub schedule: ScheduleSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Schedule import settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// CSV file read by `load-schedule` when no `--file` is given
    pub file: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self { file: PathBuf::from(DEFAULT_SCHEDULE_FILE) }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

/// Load configuration from defaults, a TOML file and environment variables
///
/// Later sources win. With `path` unset, `nba-data.toml` in the working
/// directory is read if it exists; an explicit `path` must exist.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    load_config_with_env(path, Environment::with_prefix(ENV_PREFIX).separator("__"))
}

fn load_config_with_env(
    path: Option<&Path>,
    env: Environment,
) -> Result<ServiceConfig, ConfigError> {
    let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    tracing::debug!("Loading configuration from file: {:?}", file);

    let settings = Config::builder()
        .add_source(Config::try_from(&ServiceConfig::default())?)
        .add_source(File::from(file).format(FileFormat::Toml).required(path.is_some()))
        .add_source(env)
        .build()?;

    let config: ServiceConfig = settings.try_deserialize()?;
    validate_config(&config)?;

    Ok(config)
}

/// Validate configuration
pub fn validate_config(config: &ServiceConfig) -> Result<(), ConfigError> {
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}",
                config.logging.level
            )))
        }
    }

    match config.logging.format.as_str() {
        "json" | "pretty" | "compact" => {}
        _ => {
            return Err(ConfigError::Invalid(format!(
                "Invalid log format: {}",
                config.logging.format
            )))
        }
    }

    if config.schedule.file.as_os_str().is_empty() {
        return Err(ConfigError::Invalid("Schedule file path must not be empty".to_string()));
    }

    config.stores.validate().map_err(ConfigError::Invalid)?;
    config.scraper.validate().map_err(ConfigError::Invalid)?;

    Ok(())
}

/// Save configuration to a TOML file
pub fn save_config(config: &ServiceConfig, path: &Path) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_scraper::PacingStrategy;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Environment::with_prefix(ENV_PREFIX).separator("__").source(Some(map))
    }

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        // No nba-data.toml in the crate directory
        let config = load_config_with_env(None, env_from(&[])).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.scraper.pacing.interval_ms, 1000);
        assert_eq!(config.stores.roster_db, PathBuf::from("nba_rosters.db"));

        assert!(load_config_with_env(Some(&missing), env_from(&[])).is_err());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nba-data.toml");
        std::fs::write(
            &path,
            r#"
[logging]
level = "debug"

[scraper.pacing]
strategy = "token_bucket"
interval_ms = 250
burst = 4
"#,
        )
        .unwrap();

        let config = load_config_with_env(Some(&path), env_from(&[])).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.scraper.pacing.strategy, PacingStrategy::TokenBucket);
        assert_eq!(config.scraper.pacing.interval_ms, 250);
        assert_eq!(config.scraper.pacing.burst, 4);
        assert_eq!(config.scraper.base_url, roster_scraper::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nba-data.toml");
        std::fs::write(&path, "[scraper.pacing]\ninterval_ms = 250\n").unwrap();

        let env = env_from(&[
            ("NBA_DATA__SCRAPER__PACING__INTERVAL_MS", "500"),
            ("NBA_DATA__STORES__ROSTER_DB", "/tmp/other_rosters.db"),
        ]);
        let config = load_config_with_env(Some(&path), env).unwrap();
        assert_eq!(config.scraper.pacing.interval_ms, 500);
        assert_eq!(config.stores.roster_db, PathBuf::from("/tmp/other_rosters.db"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = ServiceConfig::default();
        assert!(validate_config(&config).is_ok());

        config.logging.level = "loud".to_string();
        assert!(matches!(validate_config(&config), Err(ConfigError::Invalid(_))));

        let mut config = ServiceConfig::default();
        config.logging.format = "xml".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.scraper.base_url = String::new();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.stores.max_connections = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_saved_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("saved.toml");

        let mut config = ServiceConfig::default();
        config.stores = StoreConfig::in_dir(temp_dir.path());
        config.logging.format = "json".to_string();
        save_config(&config, &path).unwrap();

        let loaded = load_config_with_env(Some(&path), env_from(&[])).unwrap();
        assert_eq!(loaded.logging.format, "json");
        assert_eq!(loaded.stores.roster_db, temp_dir.path().join("nba_rosters.db"));
    }
}
