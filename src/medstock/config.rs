use crate::error::{PharmacyError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 10;

/// Configuration for medstock, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PharmacyConfig {
    /// Symbol printed in front of prices and revenue
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Medicines with a stock count at or below this are flagged in listings
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u64,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_low_stock_threshold() -> u64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for PharmacyConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// Keys accepted by `config get/set`.
pub const CONFIG_KEYS: &[&str] = &["currency", "low-stock"];

impl PharmacyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PharmacyConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "currency" => Ok(self.currency.clone()),
            "low-stock" => Ok(self.low_stock_threshold.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency" => {
                self.currency = value.to_string();
                Ok(())
            }
            "low-stock" => {
                self.low_stock_threshold = value.parse().map_err(|_| {
                    PharmacyError::Config(format!(
                        "low-stock must be a whole number, got '{}'",
                        value
                    ))
                })?;
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }

    /// Formats an amount with the configured currency symbol.
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

fn unknown_key(key: &str) -> PharmacyError {
    PharmacyError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
