use anyhow::{anyhow, Result};
use std::env;

use crate::utils::validation::validate_sweep_interval;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub http_port: u16,
    pub sweep_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let interval_str = env::var("SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "60".to_string());
        let sweep_interval_secs = interval_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid SWEEP_INTERVAL_SECS"))?;
        validate_sweep_interval(sweep_interval_secs)?;

        Ok(Config {
            telegram_bot_token: token,
            http_port,
            sweep_interval_secs,
        })
    }
}
