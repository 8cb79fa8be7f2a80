mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod market_config;
mod session_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use market_config::MarketConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "VST_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".vst";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;
const MIN_POLL_INTERVAL_SECS: u64 = 1;
const MAX_POLL_INTERVAL_SECS: u64 = 3600;

const DEFAULT_TOKEN_DIR: &str = "tokens";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
