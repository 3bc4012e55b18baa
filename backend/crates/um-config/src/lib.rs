mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod table_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use table_config::TableConfig;

pub const ENV_PREFIX: &str = "UM_";
pub const CONFIG_DIR_ENV: &str = "UM_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".um";
pub const CONFIG_FILENAME: &str = "config.toml";

// API
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const MIN_API_TIMEOUT_SECS: u64 = 1;
pub const MAX_API_TIMEOUT_SECS: u64 = 300;

// Logging
pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_COLORED: bool = true;

// Table
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MIN_PAGE_SIZE: usize = 1;
pub const MAX_PAGE_SIZE: usize = 500;
