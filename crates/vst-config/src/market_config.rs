use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS,
    MIN_POLL_INTERVAL_SECS,
};

use serde::Deserialize;
use vst_core::{DEFAULT_WATCHLIST, MAX_WATCHLIST_SYMBOLS};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Seconds between quote refreshes in watch mode
    pub poll_interval_secs: u64,
    /// Symbols watched when none are given on the command line
    pub symbols: Vec<String>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            symbols: DEFAULT_WATCHLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MarketConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_interval_secs < MIN_POLL_INTERVAL_SECS
            || self.poll_interval_secs > MAX_POLL_INTERVAL_SECS
        {
            return Err(ConfigError::market(format!(
                "market.poll_interval_secs must be {}-{}, got {}",
                MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS, self.poll_interval_secs
            )));
        }

        if self.symbols.len() > MAX_WATCHLIST_SYMBOLS {
            return Err(ConfigError::market(format!(
                "market.symbols holds at most {} symbols, got {}",
                MAX_WATCHLIST_SYMBOLS,
                self.symbols.len()
            )));
        }

        if self.symbols.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::market("market.symbols cannot contain blanks"));
        }

        Ok(())
    }
}
