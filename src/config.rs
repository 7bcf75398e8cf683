use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting, per peer IP
    pub rate_calc_per_min: u32,

    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let rate_calc_per_min: u32 = var("RATE_CALC_PER_MIN", "600")
            .parse()
            .context("RATE_CALC_PER_MIN must be a whole number")?;
        if rate_calc_per_min == 0 {
            bail!("RATE_CALC_PER_MIN must be greater than zero");
        }

        let log_level = var("LOG_LEVEL", "debug");
        let log_level = Level::from_str(&log_level)
            .map_err(|_| anyhow::anyhow!("LOG_LEVEL `{log_level}` is not a tracing level"))?;

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8080"),
            api_prefix: var("API_PREFIX", "/api"),
            rate_calc_per_min,
            log_dir: var("LOG_DIR", "logs"),
            log_level,
        })
    }
}
