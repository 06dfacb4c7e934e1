//! Treasurer configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Polling interval in seconds
    pub poll_interval_secs: u64,

    /// Sweep once the pool reaches this many wei
    pub sweep_min_wei: u64,

    /// Decimals reported by the price feed
    pub feed_decimals: u8,

    /// Initial feed answer, in feed-native fixed point
    pub feed_answer: i64,

    /// Number of patron wallets to seed at startup
    pub patron_count: u32,

    /// Contribution per seeded patron, in wei
    pub patron_contribution_wei: u64,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("TREASURER_CONFIG")
            .unwrap_or_else(|_| "treasurer-config.toml".to_string());

        let config_str = std::fs::read_to_string(&config_path)
            .context(format!("Failed to read config file: {}", config_path))?;

        let config: Config = toml::from_str(&config_str)
            .context("Failed to parse config TOML")?;

        Ok(config)
    }

    /// Create default configuration
    pub fn default_local() -> Self {
        Self {
            poll_interval_secs: 1,
            sweep_min_wei: 1_000_000_000_000_000_000, // 1 ETH floor
            feed_decimals: 8,
            feed_answer: 200_000_000_000, // 2000 USD at 8 decimals
            patron_count: 5,
            patron_contribution_wei: 1_000_000_000_000_000_000,
        }
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_local();
        let toml_str = toml::to_string_pretty(&config)
            .context("Failed to serialize config")?;

        std::fs::write(path, toml_str)
            .context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }
}
