//! Settings for the `cidr-summary` report.
//!
//! Values come from the environment, after `dotenv` has loaded any `.env` file.

use std::env;
use std::error::Error;

/// Members of each block listed in the report when not configured.
pub const DEFAULT_RANGE_LIMIT: usize = 4;
/// log4rs configuration file used when not configured.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_INPUT: &str = "CIDR_SUMMARY_INPUT";
pub const ENV_RANGE_LIMIT: &str = "CIDR_SUMMARY_RANGE_LIMIT";
pub const ENV_LOG_CONFIG: &str = "CIDR_SUMMARY_LOG_CONFIG";

/// Report settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file with `blocks` and `addresses` to report on.
    pub input_file: Option<String>,
    /// How many members of each block to print.
    pub range_limit: usize,
    /// Path of the log4rs YAML file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_file: None,
            range_limit: DEFAULT_RANGE_LIMIT,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(file) = lookup(ENV_INPUT).filter(|f| !f.trim().is_empty()) {
            config.input_file = Some(file.trim().to_string());
        }
        if let Some(limit) = lookup(ENV_RANGE_LIMIT) {
            config.range_limit = limit
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_RANGE_LIMIT}={limit:?}: {e}"))?;
        }
        if let Some(log_config) = lookup(ENV_LOG_CONFIG).filter(|f| !f.trim().is_empty()) {
            config.log_config = log_config.trim().to_string();
        }

        log::debug!("config={config:?}");
        Ok(config)
    }
}
