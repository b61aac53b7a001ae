//! Runtime configuration from the environment (and `.env` via dotenv).

use std::error::Error;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_LIST_LIMIT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs config file. `SUBNET_CALC_LOG_CONFIG`
    pub log_config: String,
    /// Subnets listed by `--list` without a count. `SUBNET_CALC_LIST_LIMIT`
    pub list_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup("SUBNET_CALC_LOG_CONFIG") {
            config.log_config = path;
        }
        if let Some(limit) = lookup("SUBNET_CALC_LIST_LIMIT") {
            config.list_limit = limit
                .trim()
                .parse()
                .map_err(|e| format!("Invalid SUBNET_CALC_LIST_LIMIT '{limit}': {e}"))?;
        }
        Ok(config)
    }
}
